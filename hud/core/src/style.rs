//! Style Providers - The Visual Configuration Contract
//!
//! A style is a pure bundle of visual parameters: colors, font, indicator
//! size, the initial transform used for the pop-in effect, the animation
//! duration and the background treatment. The controller holds exactly one
//! active style at a time and replaces it wholesale on reconfigure.
//!
//! # Design Philosophy
//!
//! Styles are modeled as a capability trait rather than a closed enum so that
//! embedders can ship their own themes through the same contract the built-in
//! themes use. The [`StyleCatalog`] enum is a convenience layer over the three
//! shipped themes, not a boundary: anything implementing [`OverlayStyle`] is a
//! first-class style.
//!
//! Style values are validated when they are handed to the controller, never
//! at presentation time. A malformed style is a configuration bug and is
//! reported as a [`StyleError`] before it can affect a visible overlay.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::ScaleTransform;

/// Surface-agnostic RGBA color
///
/// A simple color representation that can be mapped to any rendering target:
/// terminal 256-color, CSS `rgba()`, or platform color types.
///
/// # Examples
///
/// ```
/// use hud_core::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.a, 255);
///
/// let half_black = Color::rgba(0, 0, 0, 128);
/// assert_eq!(half_black.a, 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0=transparent, 255=opaque)
    pub a: u8,
}

impl Color {
    /// Neutral light gray, the default tint for custom icons.
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);

    /// Create a fully opaque color from RGB components
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha channel
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Check if this color is fully transparent
    #[must_use]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Convert to a CSS-style hex string (#RRGGBB or #RRGGBBAA)
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Font descriptor for the message label
///
/// Family names are advisory; surfaces map them to whatever their rendering
/// stack provides. `"system"` selects the platform default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name (advisory)
    pub family: String,
    /// Point size, must be positive
    pub size: f32,
}

impl FontSpec {
    /// The platform default font at the given point size
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self {
            family: "system".to_string(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::system(16.0)
    }
}

/// Background treatment behind the overlay content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundStyle {
    /// Solid color fill (typically semi-transparent)
    Color(Color),
    /// Light blur effect
    Light,
    /// Extra-light blur effect
    ExtraLight,
    /// Dark blur effect
    Dark,
}

impl BackgroundStyle {
    /// Whether this background is a blur effect rather than a solid fill
    #[must_use]
    pub const fn is_blur(&self) -> bool {
        !matches!(self, Self::Color(_))
    }
}

/// The visual configuration contract
///
/// Implementations are immutable bundles of visual parameters. The controller
/// queries them when deriving the view's static visuals and when populating
/// presentation content. Three built-in implementations ship
/// ([`DefaultStyle`], [`DarkBlurStyle`] and [`ExtraLightBlurStyle`]) and
/// embedders may supply their own.
pub trait OverlayStyle: fmt::Debug + Send + Sync {
    /// Color of the activity spinner
    fn activity_color(&self) -> Color;

    /// Color of the message label text
    fn message_color(&self) -> Color;

    /// Tint applied to the built-in success icon
    fn success_color(&self) -> Color;

    /// Tint applied to the built-in warning icon
    fn warning_color(&self) -> Color;

    /// Font of the message label
    fn message_font(&self) -> FontSpec;

    /// Duration of reveal and teardown animations
    fn animation_duration(&self) -> Duration;

    /// Width and height of the spinner / icon area, must be positive
    fn indicator_size(&self) -> f32;

    /// Transform applied to the spinner / icon before reveal animations
    ///
    /// Scale factors must be positive; near-zero values produce the pop-in
    /// effect.
    fn indicator_initial_transform(&self) -> ScaleTransform;

    /// Background treatment of the overlay
    fn background(&self) -> BackgroundStyle;
}

/// Errors produced by style validation
///
/// Returned from [`validate`] before a style reaches the controller. These
/// are configuration bugs, not runtime conditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// The indicator size is zero, negative, or not finite
    #[error("indicator size must be positive and finite, got {0}")]
    InvalidIndicatorSize(f32),

    /// The message font size is zero, negative, or not finite
    #[error("message font size must be positive and finite, got {0}")]
    InvalidFontSize(f32),

    /// An initial transform scale factor is zero, negative, or not finite
    #[error("initial transform scales must be positive and finite, got {x}x{y}")]
    InvalidTransform {
        /// Horizontal scale factor
        x: f32,
        /// Vertical scale factor
        y: f32,
    },
}

/// Validate a style's numeric parameters
///
/// Called by the handle before a configure request enters the owner loop, so
/// malformed styles are rejected at configuration time.
///
/// # Errors
///
/// Returns the first [`StyleError`] found.
pub fn validate(style: &dyn OverlayStyle) -> Result<(), StyleError> {
    let size = style.indicator_size();
    if !size.is_finite() || size <= 0.0 {
        return Err(StyleError::InvalidIndicatorSize(size));
    }

    let font_size = style.message_font().size;
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(StyleError::InvalidFontSize(font_size));
    }

    let transform = style.indicator_initial_transform();
    if !transform.is_valid() {
        return Err(StyleError::InvalidTransform {
            x: transform.x,
            y: transform.y,
        });
    }

    Ok(())
}

/// The default built-in style: blue accents over a translucent white fill
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyle;

impl OverlayStyle for DefaultStyle {
    fn activity_color(&self) -> Color {
        Color::rgb(0, 99, 251)
    }

    fn message_color(&self) -> Color {
        Color::rgb(71, 68, 69)
    }

    fn success_color(&self) -> Color {
        Color::rgb(0, 134, 245)
    }

    fn warning_color(&self) -> Color {
        Color::rgb(245, 0, 0)
    }

    fn message_font(&self) -> FontSpec {
        FontSpec::system(16.0)
    }

    fn animation_duration(&self) -> Duration {
        Duration::from_millis(350)
    }

    fn indicator_size(&self) -> f32 {
        45.0
    }

    fn indicator_initial_transform(&self) -> ScaleTransform {
        ScaleTransform::uniform(0.01)
    }

    fn background(&self) -> BackgroundStyle {
        BackgroundStyle::Color(Color::rgba(255, 255, 255, 217))
    }
}

/// Built-in style for dark surroundings: a dark blur background with muted
/// label colors
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkBlurStyle;

impl OverlayStyle for DarkBlurStyle {
    fn activity_color(&self) -> Color {
        Color::rgb(35, 158, 242)
    }

    fn message_color(&self) -> Color {
        Color::rgb(224, 200, 220)
    }

    fn success_color(&self) -> Color {
        Color::rgb(0, 134, 245)
    }

    fn warning_color(&self) -> Color {
        Color::rgb(245, 0, 0)
    }

    fn message_font(&self) -> FontSpec {
        FontSpec::system(16.0)
    }

    fn animation_duration(&self) -> Duration {
        Duration::from_millis(350)
    }

    fn indicator_size(&self) -> f32 {
        45.0
    }

    fn indicator_initial_transform(&self) -> ScaleTransform {
        ScaleTransform::uniform(0.01)
    }

    fn background(&self) -> BackgroundStyle {
        BackgroundStyle::Dark
    }
}

/// Built-in style with an extra-light blur background and gray accents
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraLightBlurStyle;

impl OverlayStyle for ExtraLightBlurStyle {
    fn activity_color(&self) -> Color {
        Color::rgb(128, 128, 128)
    }

    fn message_color(&self) -> Color {
        Color::rgb(64, 64, 64)
    }

    fn success_color(&self) -> Color {
        Color::rgb(0, 134, 245)
    }

    fn warning_color(&self) -> Color {
        Color::rgb(245, 0, 0)
    }

    fn message_font(&self) -> FontSpec {
        FontSpec::system(16.0)
    }

    fn animation_duration(&self) -> Duration {
        Duration::from_millis(350)
    }

    fn indicator_size(&self) -> f32 {
        45.0
    }

    fn indicator_initial_transform(&self) -> ScaleTransform {
        ScaleTransform::uniform(0.01)
    }

    fn background(&self) -> BackgroundStyle {
        BackgroundStyle::ExtraLight
    }
}

/// The closed catalog of built-in styles
///
/// A convenience wrapper mapping 1:1 to the shipped [`OverlayStyle`]
/// implementations. Custom styles bypass the catalog and go through
/// `configure_with` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleCatalog {
    /// [`DefaultStyle`]
    #[default]
    Default,
    /// [`DarkBlurStyle`]
    Dark,
    /// [`ExtraLightBlurStyle`]
    ExtraLight,
}

impl StyleCatalog {
    /// Resolve the catalog entry into its style implementation
    #[must_use]
    pub fn style(self) -> Box<dyn OverlayStyle> {
        match self {
            Self::Default => Box::new(DefaultStyle),
            Self::Dark => Box::new(DarkBlurStyle),
            Self::ExtraLight => Box::new(ExtraLightBlurStyle),
        }
    }

    /// Human-readable name of the catalog entry
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::ExtraLight => "extra-light",
        }
    }
}

/// Error returned when parsing an unknown catalog entry name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style catalog entry: {0}")]
pub struct UnknownStyleError(pub String);

impl std::str::FromStr for StyleCatalog {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "extra-light" | "extralight" => Ok(Self::ExtraLight),
            other => Err(UnknownStyleError(other.to_string())),
        }
    }
}
