//! The demo scenario catalog
//!
//! Each presentation kind across the three built-in styles (auto-dismissing
//! after three seconds), plus a long-running task that streams progress text
//! into a visible activity overlay. The long-running task is a cooperative
//! async worker; it sleeps on its own task and feeds `update` calls through
//! the handle, never blocking the controller.

use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::info;

use hud_core::{OverlayHandle, ShowOptions, StyleCatalog};

/// Auto-dismiss interval used by the style showcase scenarios
const SHOWCASE_DISMISS: Duration = Duration::from_secs(3);

/// A named demo scenario
pub struct Scenario {
    /// Name passed to `--scenario`
    pub name: &'static str,
    /// One-line description shown by `--list`
    pub description: &'static str,
}

/// Every available scenario
pub fn catalog() -> &'static [Scenario] {
    &[
        Scenario {
            name: "activity-default",
            description: "Activity spinner, default style, dismisses after 3s",
        },
        Scenario {
            name: "activity-extra-light",
            description: "Activity spinner, extra-light style, dismisses after 3s",
        },
        Scenario {
            name: "activity-dark",
            description: "Activity spinner, dark style, dismisses after 3s",
        },
        Scenario {
            name: "success-default",
            description: "Success checkmark, default style, dismisses after 3s",
        },
        Scenario {
            name: "success-extra-light",
            description: "Success checkmark, extra-light style, dismisses after 3s",
        },
        Scenario {
            name: "success-dark",
            description: "Success checkmark, dark style, dismisses after 3s",
        },
        Scenario {
            name: "warning-default",
            description: "Warning triangle, default style, dismisses after 3s",
        },
        Scenario {
            name: "warning-extra-light",
            description: "Warning triangle, extra-light style, dismisses after 3s",
        },
        Scenario {
            name: "warning-dark",
            description: "Warning triangle, dark style, dismisses after 3s",
        },
        Scenario {
            name: "long-task",
            description: "Emulates a long running task with message updates",
        },
    ]
}

/// Run a single scenario by name
pub async fn run(name: &str, hud: &OverlayHandle) -> Result<()> {
    info!(scenario = name, "running scenario");
    match name {
        "activity-default" => showcase(hud, Kind::Activity, StyleCatalog::Default).await,
        "activity-extra-light" => showcase(hud, Kind::Activity, StyleCatalog::ExtraLight).await,
        "activity-dark" => showcase(hud, Kind::Activity, StyleCatalog::Dark).await,
        "success-default" => showcase(hud, Kind::Success, StyleCatalog::Default).await,
        "success-extra-light" => showcase(hud, Kind::Success, StyleCatalog::ExtraLight).await,
        "success-dark" => showcase(hud, Kind::Success, StyleCatalog::Dark).await,
        "warning-default" => showcase(hud, Kind::Warning, StyleCatalog::Default).await,
        "warning-extra-light" => showcase(hud, Kind::Warning, StyleCatalog::ExtraLight).await,
        "warning-dark" => showcase(hud, Kind::Warning, StyleCatalog::Dark).await,
        "long-task" => long_running_task(hud).await,
        other => anyhow::bail!("unknown scenario: {other} (try --list)"),
    }
}

/// Run every scenario in catalog order
pub async fn run_all(hud: &OverlayHandle) -> Result<()> {
    for scenario in catalog() {
        run(scenario.name, hud).await?;
    }
    Ok(())
}

enum Kind {
    Activity,
    Success,
    Warning,
}

impl Kind {
    fn label(&self) -> &'static str {
        match self {
            Self::Activity => "Activity!",
            Self::Success => "Success!",
            Self::Warning => "Warning!",
        }
    }

    fn style_label(style: StyleCatalog) -> &'static str {
        match style {
            StyleCatalog::Default => "Default style",
            StyleCatalog::Dark => "Dark style",
            StyleCatalog::ExtraLight => "Extra Light style",
        }
    }
}

/// Present one kind in one style and wait for the auto-dismiss to play out
async fn showcase(hud: &OverlayHandle, kind: Kind, style: StyleCatalog) -> Result<()> {
    hud.configure(style).await?;

    let message = format!("{} {}", kind.label(), Kind::style_label(style));
    let options = ShowOptions::default()
        .with_message(message)
        .dismiss_after(SHOWCASE_DISMISS);

    match kind {
        Kind::Activity => hud.show_activity(options).await?,
        Kind::Success => hud.show_success(options).await?,
        Kind::Warning => hud.show_warning(options).await?,
    }

    // Dismiss interval plus the staged teardown.
    sleep(SHOWCASE_DISMISS + Duration::from_secs(1)).await;
    Ok(())
}

/// The long-running task scenario
///
/// A cooperative worker task drives the overlay through its handle:
/// an initial activity presentation, a pause, a 0-100% progress sweep, and
/// a completion message that dismisses itself.
async fn long_running_task(hud: &OverlayHandle) -> Result<()> {
    hud.configure(StyleCatalog::Dark).await?;
    hud.show_activity(ShowOptions::default().with_message("Initial message"))
        .await?;

    let worker = hud.clone();
    let progress = tokio::spawn(async move {
        worker.update("Data is about to load...", None).await?;
        sleep(Duration::from_secs(3)).await;

        for percent in 0..=100u8 {
            sleep(Duration::from_millis(50)).await;
            worker.update(format!("Loading: {percent}%"), None).await?;
        }

        worker
            .update("Completed task!", Some(Duration::from_millis(2500)))
            .await
    });
    progress.await??;

    // Let the completion message and teardown play out.
    sleep(Duration::from_secs(4)).await;
    Ok(())
}
