//! Overlay Handle - Thread-Safe Entry Point
//!
//! The handle is the public face of the overlay. It is cheap to clone and
//! safe to use from any thread or task; every operation is re-dispatched
//! onto the controller's owner loop before it touches state, so callers
//! never race each other. There is no global instance anywhere; the
//! application's composition root owns the handle and passes it around.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::icon::Icon;
use crate::presentation::Presentation;
use crate::requests::{OverlayRequest, ShowOptions};
use crate::style::{self, Color, OverlayStyle, StyleCatalog, StyleError};

/// Errors surfaced by handle operations
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    /// The controller's owner loop has stopped
    #[error("overlay controller has shut down")]
    Closed,

    /// A style failed validation and never reached the controller
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Cloneable, thread-safe handle to a running overlay controller
#[derive(Debug, Clone)]
pub struct OverlayHandle {
    tx: mpsc::Sender<OverlayRequest>,
    state_rx: watch::Receiver<Presentation>,
}

impl OverlayHandle {
    pub(crate) fn new(
        tx: mpsc::Sender<OverlayRequest>,
        state_rx: watch::Receiver<Presentation>,
    ) -> Self {
        Self { tx, state_rx }
    }

    async fn send(&self, request: OverlayRequest) -> Result<(), OverlayError> {
        self.tx
            .send(request)
            .await
            .map_err(|_| OverlayError::Closed)
    }

    /// The presentation most recently claimed by the controller
    ///
    /// Note that a claimed presentation may not be revealed yet (its delay
    /// may still be running) or ever (a later claim may pre-empt it).
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.state_rx.borrow().clone()
    }

    /// Switch to a built-in style
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn configure(&self, catalog: StyleCatalog) -> Result<(), OverlayError> {
        self.configure_with(catalog.style()).await
    }

    /// Switch to an arbitrary style provider
    ///
    /// The style is validated here, before the request enters the owner
    /// loop, so configuration errors never reach a visible overlay.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Style`] for a malformed style and
    /// [`OverlayError::Closed`] if the controller has shut down.
    pub async fn configure_with(&self, style: Box<dyn OverlayStyle>) -> Result<(), OverlayError> {
        style::validate(style.as_ref())?;
        self.send(OverlayRequest::Configure { style }).await
    }

    /// Present an activity spinner
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn show_activity(&self, options: ShowOptions) -> Result<(), OverlayError> {
        let presentation = Presentation::Activity {
            message: options.message,
        };
        self.send(OverlayRequest::Show {
            presentation,
            delay: options.delay,
            dismiss_after: options.dismiss_after,
        })
        .await
    }

    /// Present the built-in success icon
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn show_success(&self, options: ShowOptions) -> Result<(), OverlayError> {
        let presentation = Presentation::Success {
            message: options.message,
        };
        self.send(OverlayRequest::Show {
            presentation,
            delay: options.delay,
            dismiss_after: options.dismiss_after,
        })
        .await
    }

    /// Present the built-in warning icon
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn show_warning(&self, options: ShowOptions) -> Result<(), OverlayError> {
        let presentation = Presentation::Warning {
            message: options.message,
        };
        self.send(OverlayRequest::Show {
            presentation,
            delay: options.delay,
            dismiss_after: options.dismiss_after,
        })
        .await
    }

    /// Present a caller-supplied icon
    ///
    /// `tint` defaults to light gray when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn show_custom(
        &self,
        icon: Icon,
        tint: Option<Color>,
        options: ShowOptions,
    ) -> Result<(), OverlayError> {
        let presentation = Presentation::Custom {
            icon,
            tint: tint.unwrap_or(Color::LIGHT_GRAY),
            message: options.message,
        };
        self.send(OverlayRequest::Show {
            presentation,
            delay: options.delay,
            dismiss_after: options.dismiss_after,
        })
        .await
    }

    /// Hide the overlay immediately
    ///
    /// Idempotent: hiding an already hidden overlay has no visible effect.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn hide(&self) -> Result<(), OverlayError> {
        self.send(OverlayRequest::Hide).await
    }

    /// Schedule a hide after a delay
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn hide_after(&self, delay: Duration) -> Result<(), OverlayError> {
        self.send(OverlayRequest::HideAfter { delay }).await
    }

    /// Replace the visible message without re-presenting
    ///
    /// Only the displayed text changes; the presentation state and any
    /// running reveal animation are untouched. Calling this while hidden is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Closed`] if the controller has shut down.
    pub async fn update(
        &self,
        message: impl Into<String> + Send,
        dismiss_after: Option<Duration>,
    ) -> Result<(), OverlayError> {
        self.send(OverlayRequest::Update {
            message: message.into(),
            dismiss_after,
        })
        .await
    }
}
