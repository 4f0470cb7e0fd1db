//! Overlay View Model - The Widget as Pure Data
//!
//! Surfaces are dumb renderers: the controller owns this model, mutates it,
//! and pushes snapshots down to whatever [`HostSurface`](crate::HostSurface)
//! the embedder supplied. The model holds final property values; a
//! [`Transition`](crate::Transition) accompanying each snapshot tells the
//! surface whether to tween from the previously applied snapshot or apply
//! the values immediately.
//!
//! The view instance is reused across presentations. It is attached to the
//! host surface lazily on the first reveal and detached when fully hidden,
//! never rebuilt.

use serde::{Deserialize, Serialize};

use crate::animation::ScaleTransform;
use crate::icon::Icon;
use crate::style::{BackgroundStyle, Color, FontSpec, OverlayStyle};

/// The activity spinner portion of the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinnerView {
    /// Spinner color, derived from the active style
    pub color: Color,
    /// Current scale transform
    pub transform: ScaleTransform,
    /// Opacity (0.0 = invisible, 1.0 = opaque)
    pub alpha: f32,
    /// Whether the spinner is spinning
    pub animating: bool,
}

/// The message label portion of the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelView {
    /// Displayed text, if any
    pub text: Option<String>,
    /// Label font, derived from the active style
    pub font: FontSpec,
    /// Label color, derived from the active style
    pub color: Color,
}

/// The icon portion of the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconView {
    /// The icon currently populated, if any
    pub icon: Option<Icon>,
    /// Tint the icon is drawn with
    pub tint: Color,
    /// Current scale transform
    pub transform: ScaleTransform,
    /// Opacity (0.0 = invisible, 1.0 = opaque)
    pub alpha: f32,
}

/// The complete overlay view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayView {
    /// Whether the view is attached to the host surface
    pub attached: bool,
    /// Overall opacity of the overlay
    pub alpha: f32,
    /// Background treatment, derived from the active style
    pub background: BackgroundStyle,
    /// Width and height of the spinner / icon area
    pub indicator_size: f32,
    /// Spinner sub-view
    pub spinner: SpinnerView,
    /// Label sub-view
    pub label: LabelView,
    /// Icon sub-view
    pub icon: IconView,
}

impl OverlayView {
    /// Build the initial (hidden, detached) view for a style
    #[must_use]
    pub fn styled(style: &dyn OverlayStyle) -> Self {
        let initial = style.indicator_initial_transform();
        Self {
            attached: false,
            alpha: 0.0,
            background: style.background(),
            indicator_size: style.indicator_size(),
            spinner: SpinnerView {
                color: style.activity_color(),
                transform: initial,
                alpha: 0.0,
                animating: false,
            },
            label: LabelView {
                text: None,
                font: style.message_font(),
                color: style.message_color(),
            },
            icon: IconView {
                icon: None,
                tint: style.success_color(),
                transform: initial,
                alpha: 0.0,
            },
        }
    }

    /// Re-derive the static visuals from a style
    ///
    /// Touches only what a style governs: spinner color and resting
    /// transform, label font and color, icon resting transform, background
    /// and indicator size. Content (text, icon image, alphas) and the
    /// attachment flag belong to the presentation lifecycle and are left
    /// alone.
    pub fn apply_style(&mut self, style: &dyn OverlayStyle) {
        let initial = style.indicator_initial_transform();
        self.background = style.background();
        self.indicator_size = style.indicator_size();
        self.spinner.color = style.activity_color();
        self.spinner.transform = initial;
        self.label.font = style.message_font();
        self.label.color = style.message_color();
        self.icon.transform = initial;
    }
}
