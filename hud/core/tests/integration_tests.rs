//! Integration tests for the overlay presentation lifecycle
//!
//! These tests drive a spawned controller through its public handle with the
//! tokio clock paused, so every delay is deterministic virtual time. A
//! recording surface captures each attach/detach and every view snapshot the
//! controller pushes. Covered here:
//!
//! - Last-call-wins race suppression between overlapping shows
//! - Hide idempotence and the staged teardown
//! - Auto-dismiss scheduling
//! - Style reconfiguration independence from presentation content
//! - Message updates preserving presentation state
//! - Custom-icon identity in the stale-reveal snapshot check
//! - The end-to-end dark-style activity scenario

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tokio::time::sleep;

use hud_core::{
    BackgroundStyle, Color, DarkBlurStyle, DefaultStyle, FontSpec, HostSurface, Icon, Overlay,
    OverlayConfig, OverlayError, OverlayStyle, OverlayView, Presentation, ScaleTransform,
    ShowOptions, StyleCatalog, StyleError, SurfaceError, Transition,
};

// =============================================================================
// Test harness: a surface that records everything it is told
// =============================================================================

#[derive(Default)]
struct SurfaceLog {
    attaches: usize,
    detaches: usize,
    frames: Vec<(OverlayView, Transition)>,
}

impl SurfaceLog {
    fn last_view(&self) -> OverlayView {
        self.frames
            .last()
            .map(|(view, _)| view.clone())
            .expect("no view snapshot was delivered")
    }

    fn is_attached(&self) -> bool {
        self.attaches > self.detaches
    }
}

struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

#[async_trait]
impl HostSurface for RecordingSurface {
    async fn attach(&mut self) -> Result<(), SurfaceError> {
        self.log.lock().attaches += 1;
        Ok(())
    }

    async fn apply(
        &mut self,
        view: &OverlayView,
        transition: Transition,
    ) -> Result<(), SurfaceError> {
        self.log.lock().frames.push((view.clone(), transition));
        Ok(())
    }

    async fn detach(&mut self) -> Result<(), SurfaceError> {
        self.log.lock().detaches += 1;
        Ok(())
    }
}

fn spawn_overlay() -> (hud_core::OverlayHandle, Arc<Mutex<SurfaceLog>>) {
    let log = Arc::new(Mutex::new(SurfaceLog::default()));
    let surface = RecordingSurface {
        log: Arc::clone(&log),
    };
    let handle = Overlay::spawn(surface, OverlayConfig::default());
    (handle, log)
}

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

// =============================================================================
// Last call wins
// =============================================================================

/// Two shows issued before either delay elapses: only the later one's reveal
/// executes; the earlier one dies on its snapshot check.
#[tokio::test(start_paused = true)]
async fn test_last_call_wins_for_overlapping_shows() {
    let (hud, log) = spawn_overlay();

    hud.show_activity(
        ShowOptions::default()
            .with_message("loading")
            .with_delay(millis(100)),
    )
    .await
    .unwrap();
    hud.show_success(
        ShowOptions::default()
            .with_message("done")
            .with_delay(millis(100)),
    )
    .await
    .unwrap();

    sleep(millis(200)).await;

    let log = log.lock();
    assert_eq!(log.attaches, 1, "only the winning reveal attaches");
    let view = log.last_view();
    assert!(view.icon.icon.is_some(), "success icon should be populated");
    assert!(!view.spinner.animating, "spinner must not be running");
    assert_eq!(view.label.text.as_deref(), Some("done"));
    assert_eq!(view.alpha, 1.0);
}

// =============================================================================
// Idempotent hide
// =============================================================================

/// Hiding N times in a row ends in the same place as hiding once: state
/// Hidden, view detached exactly once.
#[tokio::test(start_paused = true)]
async fn test_hide_is_idempotent() {
    let (hud, log) = spawn_overlay();

    hud.show_warning(ShowOptions::default().with_delay(Duration::ZERO))
        .await
        .unwrap();
    sleep(millis(50)).await;
    assert!(log.lock().is_attached());

    hud.hide().await.unwrap();
    hud.hide().await.unwrap();
    hud.hide().await.unwrap();

    sleep(millis(1500)).await;

    assert!(hud.presentation().is_hidden());
    let log = log.lock();
    assert_eq!(log.attaches, 1);
    assert_eq!(log.detaches, 1, "repeated hides must not detach again");
    assert_eq!(log.last_view().alpha, 0.0);
}

/// Hiding an overlay that was never shown does nothing at all.
#[tokio::test(start_paused = true)]
async fn test_hide_when_never_shown_is_silent() {
    let (hud, log) = spawn_overlay();

    hud.hide().await.unwrap();
    sleep(millis(1000)).await;

    let log = log.lock();
    assert_eq!(log.attaches, 0);
    assert_eq!(log.detaches, 0);
    assert!(log.frames.is_empty(), "no snapshot should be delivered");
}

// =============================================================================
// Auto-dismiss
// =============================================================================

/// A warning with delay 0 and a one second dismiss interval is visible
/// shortly after the call and hidden (and eventually detached) afterwards.
#[tokio::test(start_paused = true)]
async fn test_warning_auto_dismisses() {
    let (hud, log) = spawn_overlay();

    hud.show_warning(
        ShowOptions::default()
            .with_message("x")
            .with_delay(Duration::ZERO)
            .dismiss_after(Duration::from_secs(1)),
    )
    .await
    .unwrap();

    sleep(millis(50)).await;
    {
        let log = log.lock();
        assert!(log.is_attached());
        let view = log.last_view();
        assert_eq!(view.alpha, 1.0);
        assert_eq!(view.label.text.as_deref(), Some("x"));
        assert!(view.icon.icon.is_some());
    }
    assert_eq!(
        hud.presentation(),
        Presentation::Warning {
            message: Some("x".to_string())
        }
    );

    // Past the interval plus the staged teardown.
    sleep(millis(2000)).await;
    assert!(hud.presentation().is_hidden());
    let log = log.lock();
    assert!(!log.is_attached());
    assert_eq!(log.detaches, 1);
    assert_eq!(log.last_view().alpha, 0.0);
}

// =============================================================================
// Style reconfiguration independence
// =============================================================================

/// Reconfiguring while an activity is visible restyles the indicator
/// immediately but leaves the message and the state tag alone.
#[tokio::test(start_paused = true)]
async fn test_restyle_keeps_current_content() {
    let (hud, log) = spawn_overlay();

    hud.show_activity(
        ShowOptions::default()
            .with_message("Loading")
            .with_delay(Duration::ZERO),
    )
    .await
    .unwrap();
    sleep(millis(50)).await;
    assert_eq!(
        log.lock().last_view().spinner.color,
        DefaultStyle.activity_color()
    );

    hud.configure(StyleCatalog::Dark).await.unwrap();
    sleep(millis(10)).await;

    let view = log.lock().last_view();
    assert_eq!(view.spinner.color, DarkBlurStyle.activity_color());
    assert_eq!(
        view.spinner.transform,
        DarkBlurStyle.indicator_initial_transform()
    );
    assert_eq!(view.background, BackgroundStyle::Dark);

    // Content and lifecycle are untouched.
    assert_eq!(view.label.text.as_deref(), Some("Loading"));
    assert_eq!(view.alpha, 1.0);
    assert!(view.spinner.animating);
    assert_eq!(
        hud.presentation(),
        Presentation::Activity {
            message: Some("Loading".to_string())
        }
    );
}

// =============================================================================
// Message updates
// =============================================================================

/// `update` while a success is showing changes only the displayed text.
#[tokio::test(start_paused = true)]
async fn test_update_preserves_presentation() {
    let (hud, log) = spawn_overlay();

    hud.show_success(
        ShowOptions::default()
            .with_message("done")
            .with_delay(Duration::ZERO),
    )
    .await
    .unwrap();
    sleep(millis(50)).await;

    hud.update("new text", None).await.unwrap();
    sleep(millis(10)).await;

    let view = log.lock().last_view();
    assert_eq!(view.label.text.as_deref(), Some("new text"));
    assert!(view.icon.icon.is_some());
    assert_eq!(view.alpha, 1.0);

    // The claimed presentation still carries its original payload.
    assert_eq!(
        hud.presentation(),
        Presentation::Success {
            message: Some("done".to_string())
        }
    );
}

/// The documented policy for updating while hidden: the call is ignored.
#[tokio::test(start_paused = true)]
async fn test_update_while_hidden_is_ignored() {
    let (hud, log) = spawn_overlay();

    hud.update("ghost", None).await.unwrap();
    sleep(millis(50)).await;

    assert!(hud.presentation().is_hidden());
    let log = log.lock();
    assert_eq!(log.attaches, 0);
    assert!(log.frames.is_empty());
}

/// `update` with a dismiss interval schedules the hide like a show does.
#[tokio::test(start_paused = true)]
async fn test_update_can_schedule_dismissal() {
    let (hud, log) = spawn_overlay();

    hud.show_activity(ShowOptions::default().with_delay(Duration::ZERO))
        .await
        .unwrap();
    sleep(millis(50)).await;

    hud.update("wrapping up", Some(millis(500))).await.unwrap();
    sleep(millis(2000)).await;

    assert!(hud.presentation().is_hidden());
    assert!(!log.lock().is_attached());
}

// =============================================================================
// Snapshot equality for custom presentations
// =============================================================================

/// Back-to-back customs with different icons resolve by icon identity, not
/// just the state tag: the earlier reveal is stale even though both are
/// `Custom` with the same message and tint.
#[tokio::test(start_paused = true)]
async fn test_custom_snapshot_uses_icon_identity() {
    let (hud, log) = spawn_overlay();

    let first = Icon::from_rows("square", &["##", "##"]).unwrap();
    let second = Icon::from_rows("square", &["##", "##"]).unwrap();
    let second_id = second.id();

    hud.show_custom(
        first,
        None,
        ShowOptions::default().with_message("pin").with_delay(millis(100)),
    )
    .await
    .unwrap();
    hud.show_custom(
        second,
        None,
        ShowOptions::default().with_message("pin").with_delay(millis(100)),
    )
    .await
    .unwrap();

    sleep(millis(250)).await;

    let log = log.lock();
    assert_eq!(log.attaches, 1, "the stale custom reveal must not attach");
    let view = log.last_view();
    let shown = view.icon.icon.expect("an icon should be populated");
    assert_eq!(shown.id(), second_id);
    assert_eq!(view.icon.tint, Color::LIGHT_GRAY, "default tint applies");
}

// =============================================================================
// End-to-end scenario
// =============================================================================

/// configure(dark) → showActivity("Loading") → spinner visible on a dark
/// background; hide() → view detached at alpha 0.
#[tokio::test(start_paused = true)]
async fn test_dark_activity_end_to_end() {
    let (hud, log) = spawn_overlay();

    hud.configure(StyleCatalog::Dark).await.unwrap();
    hud.show_activity(
        ShowOptions::default()
            .with_message("Loading")
            .with_delay(Duration::ZERO),
    )
    .await
    .unwrap();
    sleep(millis(50)).await;

    {
        let log = log.lock();
        assert!(log.is_attached());
        let view = log.last_view();
        assert!(view.spinner.animating, "spinner should be animating");
        assert_eq!(view.label.text.as_deref(), Some("Loading"));
        assert_eq!(view.background, BackgroundStyle::Dark);
        assert_eq!(view.alpha, 1.0);
        assert_eq!(view.spinner.transform, ScaleTransform::IDENTITY);
    }

    hud.hide().await.unwrap();
    sleep(millis(1500)).await;

    let log = log.lock();
    assert!(!log.is_attached());
    assert_eq!(log.detaches, 1);
    let view = log.last_view();
    assert_eq!(view.alpha, 0.0);
    assert!(view.label.text.is_none());
    assert!(!view.spinner.animating);
}

// =============================================================================
// Scheduling edge cases
// =============================================================================

/// A hide issued before a pending reveal's delay elapses pre-empts it: the
/// view is never attached.
#[tokio::test(start_paused = true)]
async fn test_hide_before_reveal_suppresses_attach() {
    let (hud, log) = spawn_overlay();

    hud.show_activity(ShowOptions::default().with_delay(millis(100)))
        .await
        .unwrap();
    sleep(millis(10)).await;
    hud.hide().await.unwrap();

    sleep(millis(1000)).await;

    assert!(hud.presentation().is_hidden());
    let log = log.lock();
    assert_eq!(log.attaches, 0, "the pre-empted reveal must not attach");
    assert_eq!(log.detaches, 0, "nothing was attached to detach");
}

/// `hide_after` delays the hide without a snapshot of its own.
#[tokio::test(start_paused = true)]
async fn test_hide_after_delays_teardown() {
    let (hud, log) = spawn_overlay();

    hud.show_success(ShowOptions::default().with_delay(Duration::ZERO))
        .await
        .unwrap();
    sleep(millis(50)).await;

    hud.hide_after(millis(500)).await.unwrap();
    sleep(millis(100)).await;
    assert!(
        !hud.presentation().is_hidden(),
        "hide must not run before its delay"
    );
    assert!(log.lock().is_attached());

    sleep(millis(1500)).await;
    assert!(hud.presentation().is_hidden());
    assert!(!log.lock().is_attached());
}

/// A zero dismiss interval means manual dismissal: the presentation stays.
#[tokio::test(start_paused = true)]
async fn test_zero_dismiss_interval_means_manual() {
    let (hud, log) = spawn_overlay();

    hud.show_success(
        ShowOptions::default()
            .with_delay(Duration::ZERO)
            .dismiss_after(Duration::ZERO),
    )
    .await
    .unwrap();

    sleep(Duration::from_secs(10)).await;

    assert!(!hud.presentation().is_hidden());
    assert!(log.lock().is_attached());
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Debug)]
struct UpsideDownStyle;

impl OverlayStyle for UpsideDownStyle {
    fn activity_color(&self) -> Color {
        Color::rgb(1, 2, 3)
    }
    fn message_color(&self) -> Color {
        Color::rgb(1, 2, 3)
    }
    fn success_color(&self) -> Color {
        Color::rgb(1, 2, 3)
    }
    fn warning_color(&self) -> Color {
        Color::rgb(1, 2, 3)
    }
    fn message_font(&self) -> FontSpec {
        FontSpec::system(16.0)
    }
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(350)
    }
    fn indicator_size(&self) -> f32 {
        -45.0
    }
    fn indicator_initial_transform(&self) -> ScaleTransform {
        ScaleTransform::uniform(0.01)
    }
    fn background(&self) -> BackgroundStyle {
        BackgroundStyle::Light
    }
}

/// Malformed styles are rejected before they reach the controller, and the
/// active style stays in place.
#[tokio::test(start_paused = true)]
async fn test_invalid_style_is_rejected_at_configure_time() {
    let (hud, log) = spawn_overlay();

    let error = hud
        .configure_with(Box::new(UpsideDownStyle))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        OverlayError::Style(StyleError::InvalidIndicatorSize(_))
    ));

    hud.show_activity(ShowOptions::default().with_delay(Duration::ZERO))
        .await
        .unwrap();
    sleep(millis(50)).await;

    let view = log.lock().last_view();
    assert_eq!(view.spinner.color, DefaultStyle.activity_color());
}

// =============================================================================
// Thread-affinity funneling
// =============================================================================

/// Handles are cloneable and usable from other tasks; calls are funneled to
/// the owner loop in send order.
#[tokio::test(start_paused = true)]
async fn test_handle_works_across_tasks() {
    let (hud, log) = spawn_overlay();

    let worker = hud.clone();
    tokio::spawn(async move {
        worker
            .show_activity(
                ShowOptions::default()
                    .with_message("from a worker")
                    .with_delay(Duration::ZERO),
            )
            .await
            .unwrap();
    })
    .await
    .unwrap();

    sleep(millis(50)).await;

    assert!(log.lock().is_attached());
    assert_eq!(
        log.lock().last_view().label.text.as_deref(),
        Some("from a worker")
    );
}
