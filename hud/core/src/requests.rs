//! Overlay Requests
//!
//! Commands funneled from [`OverlayHandle`](crate::OverlayHandle) clones into
//! the controller's owner loop. Callers on any thread build requests; only
//! the owner loop interprets them, which is what makes the synchronous claim
//! step atomic without locks.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_REVEAL_DELAY;
use crate::presentation::Presentation;
use crate::style::OverlayStyle;

/// Options shared by every show operation
///
/// `delay` is the time before the reveal animation starts, not before the
/// call takes effect on state: the claim is synchronous. `dismiss_after`
/// of `None` (or zero) means the presentation stays until dismissed
/// manually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowOptions {
    /// Message displayed below the spinner or icon
    pub message: Option<String>,
    /// Delay before the reveal animation starts
    pub delay: Duration,
    /// Interval after which a hide is scheduled automatically
    pub dismiss_after: Option<Duration>,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            message: None,
            delay: DEFAULT_REVEAL_DELAY,
            dismiss_after: None,
        }
    }
}

impl ShowOptions {
    /// Set the message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the reveal delay
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the auto-dismiss interval
    #[must_use]
    pub fn dismiss_after(mut self, interval: Duration) -> Self {
        self.dismiss_after = Some(interval);
        self
    }
}

/// Commands accepted by the controller's owner loop
#[derive(Debug)]
pub enum OverlayRequest {
    /// Replace the active style and re-derive static visuals
    Configure {
        /// The new style provider (validated before it gets here)
        style: Box<dyn OverlayStyle>,
    },

    /// Claim a presentation and schedule its reveal
    Show {
        /// The presentation to claim
        presentation: Presentation,
        /// Delay before the reveal animation starts
        delay: Duration,
        /// Interval after which a hide is scheduled automatically
        dismiss_after: Option<Duration>,
    },

    /// Hide immediately
    Hide,

    /// Schedule a hide
    HideAfter {
        /// Delay before the hide runs
        delay: Duration,
    },

    /// Replace the visible label text without touching state
    Update {
        /// The new label text
        message: String,
        /// Interval after which a hide is scheduled automatically
        dismiss_after: Option<Duration>,
    },
}
