//! A host surface that narrates the overlay's life through the log
//!
//! Stands in for a real window: attach/detach become log lines and every
//! view snapshot is summarized (or dumped as JSON with `--json`).

use async_trait::async_trait;
use tracing::info;

use hud_core::{HostSurface, OverlayView, SurfaceError, Transition};

pub struct TraceSurface {
    json: bool,
}

impl TraceSurface {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

#[async_trait]
impl HostSurface for TraceSurface {
    async fn attach(&mut self) -> Result<(), SurfaceError> {
        info!("overlay attached to host surface");
        Ok(())
    }

    async fn apply(
        &mut self,
        view: &OverlayView,
        transition: Transition,
    ) -> Result<(), SurfaceError> {
        if self.json {
            let line = serde_json::to_string(view)
                .map_err(|error| SurfaceError::Failed(error.to_string()))?;
            println!("{line}");
            return Ok(());
        }

        info!(
            alpha = view.alpha,
            spinner = view.spinner.animating,
            icon = view.icon.icon.as_ref().map_or("-", |icon| icon.name()),
            text = view.label.text.as_deref().unwrap_or("-"),
            animated = transition.is_animated(),
            "frame"
        );
        Ok(())
    }

    async fn detach(&mut self) -> Result<(), SurfaceError> {
        info!("overlay detached from host surface");
        Ok(())
    }
}
