//! Controller Configuration

use std::time::Duration;

use crate::style::StyleCatalog;

/// Default reveal delay applied by [`ShowOptions`](crate::ShowOptions)
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(250);

/// Overlay controller configuration
#[derive(Clone, Debug)]
pub struct OverlayConfig {
    /// Style the controller starts with before any configure call
    pub initial_style: StyleCatalog,
    /// Capacity of the request channel feeding the owner loop
    pub request_capacity: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            initial_style: StyleCatalog::Default,
            request_capacity: 64,
        }
    }
}

impl OverlayConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `HUD_INITIAL_STYLE` (`default`, `dark`, `extra-light`) and
    /// `HUD_REQUEST_CAPACITY`; anything unset or unparsable falls back to the
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            initial_style: std::env::var("HUD_INITIAL_STYLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.initial_style),
            request_capacity: std::env::var("HUD_REQUEST_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&capacity| capacity > 0)
                .unwrap_or(defaults.request_capacity),
        }
    }
}
