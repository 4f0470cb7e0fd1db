//! Animation Descriptors - Surface-Agnostic Transition Hints
//!
//! The controller never interpolates anything itself. It pushes view
//! snapshots carrying final property values together with a [`Transition`]
//! describing how a surface should move from the previously applied snapshot
//! to the new one. Surfaces with real animation systems tween; headless
//! surfaces apply the final values immediately. Either way the view model is
//! the single source of truth for where properties end up.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A 2D scale transform applied to the spinner and icon
///
/// Near-zero uniform scales produce the pop-in effect when animated to
/// [`ScaleTransform::IDENTITY`] during reveal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransform {
    /// Horizontal scale factor
    pub x: f32,
    /// Vertical scale factor
    pub y: f32,
}

impl ScaleTransform {
    /// The identity transform (no scaling)
    pub const IDENTITY: ScaleTransform = ScaleTransform { x: 1.0, y: 1.0 };

    /// Create a uniform scale transform
    #[must_use]
    pub const fn uniform(scale: f32) -> Self {
        Self { x: scale, y: scale }
    }

    /// Whether both scale factors are finite and positive
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }

    /// Whether this is (approximately) the identity transform
    #[must_use]
    pub fn is_identity(&self) -> bool {
        (self.x - 1.0).abs() < f32::EPSILON && (self.y - 1.0).abs() < f32::EPSILON
    }
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EasingFunction {
    /// No easing (constant speed)
    #[default]
    Linear,

    /// Slow start, fast end
    EaseIn,

    /// Fast start, slow end
    EaseOut,

    /// Slow start and end
    EaseInOut,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use hud_core::EasingFunction;
    ///
    /// assert_eq!(EasingFunction::Linear.apply(0.5), 0.5);
    /// assert_eq!(EasingFunction::EaseIn.apply(1.0), 1.0);
    /// ```
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// How a surface should move from the previous snapshot to a new one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Apply the new property values immediately
    Immediate,

    /// Animate toward the new property values
    Animate {
        /// Animation duration
        duration: Duration,
        /// Easing curve
        easing: EasingFunction,
    },
}

impl Transition {
    /// Create an animated transition
    #[must_use]
    pub const fn animate(duration: Duration, easing: EasingFunction) -> Self {
        Self::Animate { duration, easing }
    }

    /// Whether this transition animates
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Animate { .. })
    }

    /// The transition's duration (zero for [`Transition::Immediate`])
    #[must_use]
    pub const fn duration(&self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Animate { duration, .. } => *duration,
        }
    }
}
