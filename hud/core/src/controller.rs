//! Overlay Controller - The Presentation State Machine
//!
//! The controller is the single owner of overlay state. It runs as one async
//! task (the owner loop) that drains two queues: requests funneled in from
//! [`OverlayHandle`](crate::OverlayHandle) clones, and deferred actions that
//! the scheduler delivers back when their delay elapses. No lock guards the
//! state; only the owner loop touches it.
//!
//! # Race Suppression
//!
//! Every show operation claims its presentation synchronously (the moment
//! the request is processed) and schedules a deferred reveal that carries
//! the claimed value as a snapshot. When the reveal fires it compares the
//! snapshot against whatever is current: a mismatch means a newer call
//! pre-empted it and the reveal dissolves into a logged no-op. The newest
//! call always wins, and nothing is ever cancelled explicitly.
//!
//! Teardown reuses the same mechanism. `hide` claims `Hidden` and stages the
//! stop animation as deferred steps (retract transforms, fade out, detach)
//! that each re-check the state is still `Hidden` before acting, so a show
//! that lands mid-teardown takes over cleanly.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::animation::{EasingFunction, ScaleTransform, Transition};
use crate::config::OverlayConfig;
use crate::handle::OverlayHandle;
use crate::icon::BuiltinIcons;
use crate::presentation::Presentation;
use crate::requests::OverlayRequest;
use crate::scheduler::{Scheduler, TokioScheduler};
use crate::style::OverlayStyle;
use crate::surface::HostSurface;
use crate::view::OverlayView;

/// Actions delivered back into the owner loop by the scheduler
#[derive(Debug, Clone)]
enum Deferred {
    /// Reveal the presentation captured at claim time, if still current
    Reveal { snapshot: Presentation },
    /// Run a (scheduled) hide
    Hide,
    /// Teardown stage two: stop the spinner, clear the label, fade out
    FadeOut,
    /// Teardown stage three: detach the view from the host surface
    Detach,
}

/// The overlay controller
///
/// Owns the active style, the current [`Presentation`], the view model and
/// the host surface. Constructed with [`Overlay::new`] and driven by
/// [`Overlay::run`], or both at once with [`Overlay::spawn`].
pub struct Overlay<S: HostSurface> {
    style: Box<dyn OverlayStyle>,
    state: Presentation,
    view: OverlayView,
    icons: BuiltinIcons,
    surface: S,
    scheduler: Box<dyn Scheduler>,
    requests: mpsc::Receiver<OverlayRequest>,
    state_tx: watch::Sender<Presentation>,
    deferred_tx: mpsc::UnboundedSender<Deferred>,
    deferred_rx: mpsc::UnboundedReceiver<Deferred>,
}

impl<S: HostSurface + 'static> Overlay<S> {
    /// Create a controller and the handle that feeds it
    ///
    /// Loading the built-in icon assets happens here; a malformed asset
    /// fails fast instead of surfacing as a blank icon at presentation time.
    ///
    /// # Panics
    ///
    /// Panics if the built-in icon assets are malformed (a packaging error).
    #[must_use]
    pub fn new(surface: S, config: OverlayConfig) -> (Self, OverlayHandle) {
        let style = config.initial_style.style();
        let view = OverlayView::styled(style.as_ref());
        let (request_tx, request_rx) = mpsc::channel(config.request_capacity);
        let (state_tx, state_rx) = watch::channel(Presentation::Hidden);
        let (deferred_tx, deferred_rx) = mpsc::unbounded_channel();

        let overlay = Self {
            style,
            state: Presentation::Hidden,
            view,
            icons: BuiltinIcons::load(),
            surface,
            scheduler: Box::new(TokioScheduler),
            requests: request_rx,
            state_tx,
            deferred_tx,
            deferred_rx,
        };
        let handle = OverlayHandle::new(request_tx, state_rx);
        (overlay, handle)
    }

    /// Replace the scheduler (useful for embedders with their own timers)
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: Box<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Create a controller, spawn its owner loop, and return the handle
    ///
    /// The loop stops when every handle clone has been dropped.
    ///
    /// # Panics
    ///
    /// Panics if the built-in icon assets are malformed (a packaging error).
    #[must_use]
    pub fn spawn(surface: S, config: OverlayConfig) -> OverlayHandle {
        let (overlay, handle) = Self::new(surface, config);
        tokio::spawn(overlay.run());
        handle
    }

    /// The currently claimed presentation
    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.state
    }

    /// The current view model
    #[must_use]
    pub fn view(&self) -> &OverlayView {
        &self.view
    }

    /// Drive the owner loop until every handle has been dropped
    pub async fn run(mut self) {
        tracing::debug!("overlay controller started");
        loop {
            tokio::select! {
                request = self.requests.recv() => match request {
                    Some(request) => self.handle_request(request).await,
                    None => break,
                },
                Some(deferred) = self.deferred_rx.recv() => {
                    self.handle_deferred(deferred).await;
                }
            }
        }

        // All handles gone; leave the host surface clean.
        if self.view.attached {
            self.detach().await;
        }
        tracing::debug!("overlay controller stopped");
    }

    /// Process one request from a handle
    pub async fn handle_request(&mut self, request: OverlayRequest) {
        match request {
            OverlayRequest::Configure { style } => self.apply_style(style).await,
            OverlayRequest::Show {
                presentation,
                delay,
                dismiss_after,
            } => self.claim(presentation, delay, dismiss_after).await,
            OverlayRequest::Hide => self.hide_now().await,
            OverlayRequest::HideAfter { delay } => {
                self.schedule(delay, Deferred::Hide);
            }
            OverlayRequest::Update {
                message,
                dismiss_after,
            } => self.update_message(message, dismiss_after).await,
        }
    }

    async fn handle_deferred(&mut self, deferred: Deferred) {
        match deferred {
            Deferred::Reveal { snapshot } => {
                if self.state == snapshot {
                    self.reveal().await;
                } else {
                    tracing::trace!(
                        stale = snapshot.kind(),
                        current = self.state.kind(),
                        "stale reveal suppressed"
                    );
                }
            }
            Deferred::Hide => self.hide_now().await,
            Deferred::FadeOut => {
                if self.state.is_hidden() {
                    self.fade_out().await;
                }
            }
            Deferred::Detach => {
                if self.state.is_hidden() {
                    self.detach().await;
                }
            }
        }
    }

    /// Claim a presentation and schedule its reveal (and auto-dismiss)
    async fn claim(
        &mut self,
        presentation: Presentation,
        delay: Duration,
        dismiss_after: Option<Duration>,
    ) {
        if presentation.is_hidden() {
            self.hide_now().await;
            return;
        }

        tracing::debug!(
            state = presentation.kind(),
            delay_ms = delay.as_millis() as u64,
            "presentation claimed"
        );
        self.set_state(presentation.clone());
        self.schedule(delay, Deferred::Reveal {
            snapshot: presentation,
        });

        if let Some(interval) = dismiss_after.filter(|interval| !interval.is_zero()) {
            self.schedule(interval, Deferred::Hide);
        }
    }

    /// Perform the reveal for the currently claimed presentation
    async fn reveal(&mut self) {
        if self.state.is_hidden() {
            return;
        }

        if !self.view.attached {
            match self.surface.attach().await {
                Ok(()) => self.view.attached = true,
                Err(error) => {
                    tracing::warn!(%error, "failed to attach view to host surface");
                }
            }
        }

        let duration = self.style.animation_duration();
        let initial = self.style.indicator_initial_transform();
        let content = self.state.content(&self.icons, self.style.as_ref());
        let message = self.state.message().map(ToOwned::to_owned);

        tracing::debug!(state = self.state.kind(), "revealing presentation");
        self.view.label.text = message;

        match content {
            // Activity: spinner pops in, icon stays invisible.
            None => {
                self.view.icon.alpha = 0.0;
                self.view.spinner.animating = true;
                self.view.spinner.transform = initial;
                self.view.spinner.alpha = 1.0;
                self.view.alpha = 0.0;
                self.push(Transition::Immediate).await;

                self.view.alpha = 1.0;
                self.view.spinner.transform = ScaleTransform::IDENTITY;
                self.push(Transition::animate(duration, EasingFunction::EaseIn))
                    .await;
            }
            // Success / warning / custom: icon pops in, spinner stays off.
            Some(content) => {
                self.view.spinner.animating = false;
                self.view.spinner.alpha = 0.0;
                self.view.icon.icon = Some(content.icon);
                self.view.icon.tint = content.tint;
                self.view.icon.transform = initial;
                self.view.icon.alpha = 0.0;
                self.view.alpha = 0.0;
                self.push(Transition::Immediate).await;

                self.view.alpha = 1.0;
                self.view.icon.alpha = 1.0;
                self.view.icon.transform = ScaleTransform::IDENTITY;
                self.push(Transition::animate(duration, EasingFunction::EaseInOut))
                    .await;
            }
        }
    }

    /// Hide immediately: claim `Hidden` and start the staged teardown
    async fn hide_now(&mut self) {
        if self.state.is_hidden() && !self.view.attached {
            tracing::trace!("hide requested while already hidden");
            return;
        }

        tracing::debug!(previous = self.state.kind(), "hiding overlay");
        self.set_state(Presentation::Hidden);

        let duration = self.style.animation_duration();
        let initial = self.style.indicator_initial_transform();

        // Stage one: retract the spinner and icon transforms.
        self.view.spinner.transform = initial;
        self.view.icon.transform = initial;
        self.push(Transition::animate(duration, EasingFunction::EaseInOut))
            .await;

        // Stages two and three run only if nothing re-claimed the overlay.
        self.schedule(duration, Deferred::FadeOut);
        self.schedule(duration * 2, Deferred::Detach);
    }

    /// Teardown stage two: stop the spinner, clear the label, fade out
    async fn fade_out(&mut self) {
        let duration = self.style.animation_duration();
        self.view.spinner.animating = false;
        self.view.spinner.alpha = 0.0;
        self.view.icon.alpha = 0.0;
        self.view.label.text = None;
        self.view.alpha = 0.0;
        self.push(Transition::animate(duration, EasingFunction::EaseInOut))
            .await;
    }

    /// Teardown stage three: detach from the host surface
    async fn detach(&mut self) {
        if !self.view.attached {
            return;
        }
        if let Err(error) = self.surface.detach().await {
            tracing::warn!(%error, "failed to detach view from host surface");
        }
        self.view.attached = false;
        tracing::debug!("view detached");
    }

    /// Replace the active style and re-derive static visuals
    async fn apply_style(&mut self, style: Box<dyn OverlayStyle>) {
        tracing::debug!(style = ?style, "style reconfigured");
        self.style = style;
        self.view.apply_style(self.style.as_ref());
        self.push(Transition::Immediate).await;
    }

    /// Replace the visible label text without touching presentation state
    async fn update_message(&mut self, message: String, dismiss_after: Option<Duration>) {
        if self.state.is_hidden() {
            tracing::debug!("update ignored while hidden");
            return;
        }

        self.view.label.text = Some(message);
        self.push(Transition::Immediate).await;

        if let Some(interval) = dismiss_after.filter(|interval| !interval.is_zero()) {
            self.schedule(interval, Deferred::Hide);
        }
    }

    fn set_state(&mut self, state: Presentation) {
        self.state = state.clone();
        self.state_tx.send_replace(state);
    }

    fn schedule(&self, delay: Duration, deferred: Deferred) {
        let tx = self.deferred_tx.clone();
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                // A send failure means the owner loop is gone; nothing to do.
                let _ = tx.send(deferred);
            }),
        );
    }

    async fn push(&mut self, transition: Transition) {
        if let Err(error) = self.surface.apply(&self.view, transition).await {
            tracing::warn!(%error, "failed to deliver view snapshot to surface");
        }
    }
}
