//! Presentation State - What the Overlay Is Showing
//!
//! A [`Presentation`] describes *what* is on screen: nothing, an activity
//! spinner, a success or warning icon, or a custom icon, each with an
//! optional message. Exactly one presentation is current at any instant.
//!
//! Equality over presentations is the crate's race-suppression primitive:
//! every delayed action captures the presentation it was scheduled for and
//! only acts if that value is still current when the timer fires. Derived
//! equality compares the variant and its payload; custom icons compare by
//! identity, so two customs with different images never match each other's
//! snapshots.

use serde::{Deserialize, Serialize};

use crate::icon::{BuiltinIcons, Icon};
use crate::style::{Color, OverlayStyle};

/// The overlay's presentation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Presentation {
    /// Nothing is shown; the view is detached once teardown completes
    #[default]
    Hidden,

    /// Activity spinner with an optional message below it
    Activity {
        /// Message displayed below the spinner
        message: Option<String>,
    },

    /// Built-in checkmark icon tinted with the style's success color
    Success {
        /// Message displayed below the icon
        message: Option<String>,
    },

    /// Built-in warning icon tinted with the style's warning color
    Warning {
        /// Message displayed below the icon
        message: Option<String>,
    },

    /// Caller-supplied icon and tint
    Custom {
        /// The icon to display (compared by identity)
        icon: Icon,
        /// Tint applied to the icon
        tint: Color,
        /// Message displayed below the icon
        message: Option<String>,
    },
}

/// Icon content derived from a presentation and the active style
#[derive(Debug, Clone, PartialEq)]
pub struct IconContent {
    /// The icon to display
    pub icon: Icon,
    /// The tint to draw it with
    pub tint: Color,
}

impl Presentation {
    /// Whether this is the hidden presentation
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// The presentation's message, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Activity { message }
            | Self::Success { message }
            | Self::Warning { message }
            | Self::Custom { message, .. } => message.as_deref(),
        }
    }

    /// Short tag name for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Activity { .. } => "activity",
            Self::Success { .. } => "success",
            Self::Warning { .. } => "warning",
            Self::Custom { .. } => "custom",
        }
    }

    /// Derive the icon content for this presentation
    ///
    /// Success and warning resolve to the built-in icons tinted from the
    /// active style; custom carries its own icon and tint. Hidden and
    /// activity have no icon content (activity shows the spinner instead).
    #[must_use]
    pub fn content(&self, icons: &BuiltinIcons, style: &dyn OverlayStyle) -> Option<IconContent> {
        match self {
            Self::Hidden | Self::Activity { .. } => None,
            Self::Success { .. } => Some(IconContent {
                icon: icons.checkmark.clone(),
                tint: style.success_color(),
            }),
            Self::Warning { .. } => Some(IconContent {
                icon: icons.warning.clone(),
                tint: style.warning_color(),
            }),
            Self::Custom { icon, tint, .. } => Some(IconContent {
                icon: icon.clone(),
                tint: *tint,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DarkBlurStyle, DefaultStyle};

    #[test]
    fn test_equality_includes_message_payload() {
        let a = Presentation::Success {
            message: Some("saved".to_string()),
        };
        let b = Presentation::Success {
            message: Some("saved".to_string()),
        };
        let c = Presentation::Success {
            message: Some("deleted".to_string()),
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Presentation::Warning {
            message: Some("saved".to_string()),
        });
    }

    #[test]
    fn test_custom_equality_uses_icon_identity() {
        let icon_a = Icon::from_rows("dot", &["#"]).unwrap();
        let icon_b = Icon::from_rows("dot", &["#"]).unwrap();

        let a = Presentation::Custom {
            icon: icon_a.clone(),
            tint: Color::LIGHT_GRAY,
            message: None,
        };
        let same = Presentation::Custom {
            icon: icon_a,
            tint: Color::LIGHT_GRAY,
            message: None,
        };
        let different_icon = Presentation::Custom {
            icon: icon_b,
            tint: Color::LIGHT_GRAY,
            message: None,
        };

        assert_eq!(a, same);
        assert_ne!(a, different_icon);
    }

    #[test]
    fn test_content_derivation() {
        let icons = BuiltinIcons::load();

        let success = Presentation::Success { message: None };
        let content = success.content(&icons, &DefaultStyle).unwrap();
        assert_eq!(content.icon, icons.checkmark);
        assert_eq!(content.tint, DefaultStyle.success_color());

        let warning = Presentation::Warning { message: None };
        let content = warning.content(&icons, &DarkBlurStyle).unwrap();
        assert_eq!(content.icon, icons.warning);
        assert_eq!(content.tint, DarkBlurStyle.warning_color());

        assert!(Presentation::Hidden.content(&icons, &DefaultStyle).is_none());
        assert!(Presentation::Activity { message: None }
            .content(&icons, &DefaultStyle)
            .is_none());
    }

    #[test]
    fn test_custom_content_passes_through() {
        let icons = BuiltinIcons::load();
        let icon = Icon::from_rows("heart", &["# #", "###", " # "]).unwrap();
        let tint = Color::rgb(200, 30, 90);

        let custom = Presentation::Custom {
            icon: icon.clone(),
            tint,
            message: Some("liked".to_string()),
        };
        let content = custom.content(&icons, &DefaultStyle).unwrap();
        assert_eq!(content.icon, icon);
        assert_eq!(content.tint, tint);
    }

    #[test]
    fn test_message_accessor() {
        assert_eq!(Presentation::Hidden.message(), None);
        assert_eq!(
            Presentation::Activity {
                message: Some("loading".to_string())
            }
            .message(),
            Some("loading")
        );
    }
}
