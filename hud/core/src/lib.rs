//! HUD Core - Headless Message-Overlay Orchestration
//!
//! This crate provides the state machine and presentation lifecycle of a
//! transient message overlay (HUD): activity spinners, success/warning
//! icons, custom icons and text messages, with pluggable visual styles. It
//! is completely independent of any UI framework; the embedding application
//! supplies a [`HostSurface`] and renders the view snapshots the controller
//! pushes at it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Embedding Application                   │
//! │   ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │   │  GUI window │  │  TUI frame  │  │  Headless / tests   │  │
//! │   └──────┬──────┘  └──────┬──────┘  └──────────┬──────────┘  │
//! │          └────────────────┴───────────────────-┘             │
//! │                           │                                  │
//! │              HostSurface (attach / apply / detach)           │
//! └───────────────────────────┼──────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────────┐
//! │                       HUD CORE                               │
//! │  ┌────────────────────────┴───────────────────────────────┐  │
//! │  │                       Overlay                          │  │
//! │  │  ┌───────────┐ ┌──────────────┐ ┌─────────┐ ┌───────┐  │  │
//! │  │  │  Style    │ │ Presentation │ │  View   │ │ Sched │  │  │
//! │  │  │ Provider  │ │    State     │ │  Model  │ │ uler  │  │  │
//! │  │  └───────────┘ └──────────────┘ └─────────┘ └───────┘  │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                           ▲                                  │
//! │                  OverlayRequest (mpsc)                       │
//! │                           │                                  │
//! │                     OverlayHandle                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Overlay`]: the controller owning all overlay state
//! - [`OverlayHandle`]: cloneable, thread-safe entry point for show/hide/update
//! - [`Presentation`]: what is being shown (the race-suppression snapshot)
//! - [`OverlayStyle`] / [`StyleCatalog`]: the visual configuration contract
//! - [`OverlayView`]: the widget as pure data, pushed to surfaces
//! - [`HostSurface`]: the one capability the embedder must supply
//!
//! # Quick Start
//!
//! ```ignore
//! use hud_core::{Overlay, OverlayConfig, MirrorSurface, ShowOptions, StyleCatalog};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (surface, shared) = MirrorSurface::new_pair();
//!     let hud = Overlay::spawn(surface, OverlayConfig::default());
//!
//!     hud.configure(StyleCatalog::Dark).await.unwrap();
//!     hud.show_activity(
//!         ShowOptions::default()
//!             .with_message("Loading")
//!             .dismiss_after(Duration::from_secs(3)),
//!     )
//!     .await
//!     .unwrap();
//!
//!     // Render `shared.view()` on your own cadence, or implement
//!     // HostSurface yourself for push-based rendering.
//! }
//! ```
//!
//! # Concurrency Model
//!
//! One async task (the owner loop) owns every piece of state. Handles can be
//! used from anywhere; their calls are messages, and the loop processes them
//! in order. Delayed work is never cancelled: each deferred action captures
//! the presentation it was scheduled for and no-ops if a newer claim has
//! superseded it by the time it fires.
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on any rendering or windowing stack.
//! It is pure presentation logic that can drive a GUI, a TUI, or nothing at
//! all in tests.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod config;
pub mod controller;
pub mod handle;
pub mod icon;
pub mod presentation;
pub mod requests;
pub mod scheduler;
pub mod style;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use animation::{EasingFunction, ScaleTransform, Transition};
pub use config::{OverlayConfig, DEFAULT_REVEAL_DELAY};
pub use controller::Overlay;
pub use handle::{OverlayError, OverlayHandle};
pub use icon::{BuiltinIcons, Icon, IconError, IconId};
pub use presentation::{IconContent, Presentation};
pub use requests::{OverlayRequest, ShowOptions};
pub use scheduler::{ScheduledAction, Scheduler, TokioScheduler};
pub use style::{
    BackgroundStyle, Color, DarkBlurStyle, DefaultStyle, ExtraLightBlurStyle, FontSpec,
    OverlayStyle, StyleCatalog, StyleError, UnknownStyleError,
};
pub use surface::{
    ChannelSurface, HostSurface, MirrorState, MirrorSurface, SharedView, SurfaceError,
    SurfaceUpdate,
};
pub use view::{IconView, LabelView, OverlayView, SpinnerView};
