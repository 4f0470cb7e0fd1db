//! Host Surfaces - The Embedder's Side of the Overlay
//!
//! The controller needs exactly one capability from its environment: a place
//! to attach the overlay view, deliver view snapshots, and detach when fully
//! hidden. [`HostSurface`] is that seam. The core never touches windows,
//! screens or rendering APIs; it tells the surface what the view looks like
//! and the surface draws it however it wants.
//!
//! Two adapters ship with the crate:
//!
//! - [`ChannelSurface`] forwards every lifecycle event and snapshot over an
//!   mpsc channel, for surfaces living in another task (or, serialized, in
//!   another process).
//! - [`MirrorSurface`] mirrors the latest snapshot into shared state that an
//!   embedder can poll from anywhere.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::animation::Transition;
use crate::view::OverlayView;

/// Errors reported by a surface when it cannot honor a delivery
///
/// The controller logs these and keeps going; a dead surface must not take
/// the owner loop down with it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The surface's receiving side is gone
    #[error("surface channel closed")]
    Closed,

    /// Surface-specific failure
    #[error("surface failure: {0}")]
    Failed(String),
}

/// The capability the embedding application supplies to host the overlay
#[async_trait]
pub trait HostSurface: Send {
    /// Attach the overlay view to the host (e.g. add it to the key window)
    ///
    /// Called lazily before the first reveal after a detach. Never called
    /// twice without an intervening [`detach`](HostSurface::detach).
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the host cannot accept the view.
    async fn attach(&mut self) -> Result<(), SurfaceError>;

    /// Deliver a view snapshot
    ///
    /// `transition` describes how to move from the previously applied
    /// snapshot to this one. Surfaces without animation support apply the
    /// final values immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the snapshot could not be delivered.
    async fn apply(&mut self, view: &OverlayView, transition: Transition)
        -> Result<(), SurfaceError>;

    /// Detach the overlay view from the host
    ///
    /// Called when teardown completes. The view is reused; detaching must
    /// not destroy surface resources needed for a later attach.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the host rejected the detach.
    async fn detach(&mut self) -> Result<(), SurfaceError>;
}

/// A lifecycle event or snapshot forwarded by [`ChannelSurface`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceUpdate {
    /// The view was attached to the host
    Attached,

    /// A view snapshot with its transition
    Frame {
        /// The view model at this point
        view: OverlayView,
        /// How to move from the previous snapshot to this one
        transition: Transition,
    },

    /// The view was detached from the host
    Detached,
}

/// Surface adapter that forwards updates over an mpsc channel
///
/// The receiving task renders (or relays) the updates. A full or closed
/// channel surfaces as [`SurfaceError::Closed`]; the controller logs it and
/// continues.
#[derive(Debug)]
pub struct ChannelSurface {
    tx: mpsc::Sender<SurfaceUpdate>,
}

impl ChannelSurface {
    /// Create a surface and the receiver its updates arrive on
    #[must_use]
    pub fn new_pair(capacity: usize) -> (Self, mpsc::Receiver<SurfaceUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    async fn forward(&self, update: SurfaceUpdate) -> Result<(), SurfaceError> {
        self.tx.send(update).await.map_err(|_| SurfaceError::Closed)
    }
}

#[async_trait]
impl HostSurface for ChannelSurface {
    async fn attach(&mut self) -> Result<(), SurfaceError> {
        self.forward(SurfaceUpdate::Attached).await
    }

    async fn apply(
        &mut self,
        view: &OverlayView,
        transition: Transition,
    ) -> Result<(), SurfaceError> {
        self.forward(SurfaceUpdate::Frame {
            view: view.clone(),
            transition,
        })
        .await
    }

    async fn detach(&mut self) -> Result<(), SurfaceError> {
        self.forward(SurfaceUpdate::Detached).await
    }
}

/// The state a [`MirrorSurface`] keeps current
#[derive(Debug, Clone, Default)]
pub struct MirrorState {
    /// Whether the view is currently attached
    pub attached: bool,
    /// The most recent view snapshot, if any was delivered
    pub view: Option<OverlayView>,
    /// Number of snapshots delivered so far
    pub frames: u64,
}

/// Read handle onto a [`MirrorSurface`]'s shared state
#[derive(Debug, Clone, Default)]
pub struct SharedView {
    inner: Arc<RwLock<MirrorState>>,
}

impl SharedView {
    /// Snapshot the mirror state
    #[must_use]
    pub fn snapshot(&self) -> MirrorState {
        self.inner.read().clone()
    }

    /// The most recent view snapshot, if any
    #[must_use]
    pub fn view(&self) -> Option<OverlayView> {
        self.inner.read().view.clone()
    }

    /// Whether the view is currently attached
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.read().attached
    }
}

/// Surface adapter that mirrors the latest snapshot into shared state
///
/// Useful for embedders that poll the view on their own cadence (immediate
/// mode UIs, tests, diagnostics). Transitions are not recorded; the mirror
/// always holds final property values.
#[derive(Debug)]
pub struct MirrorSurface {
    shared: SharedView,
}

impl MirrorSurface {
    /// Create a surface and the shared read handle it publishes to
    #[must_use]
    pub fn new_pair() -> (Self, SharedView) {
        let shared = SharedView::default();
        (
            Self {
                shared: shared.clone(),
            },
            shared,
        )
    }
}

#[async_trait]
impl HostSurface for MirrorSurface {
    async fn attach(&mut self) -> Result<(), SurfaceError> {
        self.shared.inner.write().attached = true;
        Ok(())
    }

    async fn apply(
        &mut self,
        view: &OverlayView,
        transition: Transition,
    ) -> Result<(), SurfaceError> {
        let _ = transition;
        let mut state = self.shared.inner.write();
        state.view = Some(view.clone());
        state.frames += 1;
        Ok(())
    }

    async fn detach(&mut self) -> Result<(), SurfaceError> {
        self.shared.inner.write().attached = false;
        Ok(())
    }
}
