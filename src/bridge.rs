//! Glue between the page behavior in `sweetheart_core` and the webview.
//!
//! - [`SignalTarget`] lets core widgets write into reactive element state
//! - [`EvalBurst`] forwards confetti bursts to the JavaScript library
//! - [`drive_frames`] ticks frame work at display rate until it finishes

use std::time::Duration;

use dioxus::prelude::*;
use sweetheart_core::{
    BurstConfig, BurstSink, ElementState, FrameStep, PageError, PageResult, PageSession, Rect,
    RenderTarget, Viewport,
};

use crate::context::PageClock;

/// Frame pacing for frame-driven work (about 60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Reactive element state usable as a core [`RenderTarget`].
#[derive(Clone, Copy)]
pub struct SignalTarget(pub Signal<ElementState>);

impl RenderTarget for SignalTarget {
    fn text(&self) -> String {
        self.0.read().text()
    }

    fn set_text(&mut self, text: &str) {
        self.0.write().set_text(text);
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0.read().style(property)
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.0.write().set_style(property, value);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.read().has_class(class)
    }

    fn add_class(&mut self, class: &str) {
        self.0.write().add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.0.write().remove_class(class);
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.0.read().bounding_box()
    }
}

/// Asks the page whether canvas-confetti has finished loading.
const CONFETTI_PROBE: &str = "dioxus.send(typeof confetti === 'function');";

/// Burst capability backed by canvas-confetti in the webview.
#[derive(Clone, Copy, Debug)]
pub struct EvalBurst {
    loaded: bool,
}

impl EvalBurst {
    /// Check once whether the library is available in the page.
    pub async fn connect() -> PageResult<Self> {
        let mut probe = document::eval(CONFETTI_PROBE);
        let loaded: bool = probe
            .recv()
            .await
            .map_err(|e| PageError::Script(format!("confetti check: {:?}", e)))?;
        if !loaded {
            tracing::warn!("Confetti library not loaded yet");
        }
        Ok(Self { loaded })
    }
}

impl BurstSink for EvalBurst {
    fn burst(&mut self, config: &BurstConfig) -> PageResult<()> {
        if !self.loaded {
            return Err(PageError::Burst("confetti library not loaded".to_string()));
        }
        let script = config.to_script()?;
        document::eval(&script);
        Ok(())
    }
}

/// Current window inner size.
pub async fn viewport() -> PageResult<Viewport> {
    let mut eval = document::eval("dioxus.send([window.innerWidth, window.innerHeight]);");
    let (width, height): (f64, f64) = eval
        .recv()
        .await
        .map_err(|e| PageError::Script(format!("viewport size: {:?}", e)))?;
    Ok(Viewport::new(width, height))
}

/// Measure a mounted element into its state.
pub async fn measure(mounted: &MountedData, mut target: Signal<ElementState>) -> PageResult<Rect> {
    let rect = mounted
        .get_client_rect()
        .await
        .map_err(|e| PageError::MissingElement(format!("element layout: {:?}", e)))?;
    let rect = Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
    target.write().set_bounding_box(rect);
    Ok(rect)
}

/// Tick `task` once now and then once per frame until it reports done.
pub async fn drive_frames<T: FrameStep>(mut task: T, clock: PageClock) {
    loop {
        if task.tick(clock.now_ms()).is_break() {
            break;
        }
        tokio::time::sleep(FRAME_INTERVAL).await;
    }
}

/// Run the shared celebration: opening burst now, side bursts for a few seconds.
pub fn celebrate(session: Signal<PageSession>, clock: PageClock) {
    spawn(async move {
        let started = match EvalBurst::connect().await {
            Ok(sink) => session.peek().celebration().start(sink, clock.now_ms()),
            Err(e) => Err(e),
        };
        match started {
            Ok(task) => drive_frames(task, clock).await,
            Err(e) => tracing::error!("Celebration failed: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetheart_core::Celebration;

    #[test]
    fn test_unloaded_library_reports_burst_error() {
        let mut sink = EvalBurst { loaded: false };
        let result = sink.burst(&BurstConfig::opening());
        assert!(matches!(result, Err(PageError::Burst(_))));
    }

    #[test]
    fn test_celebration_fails_without_library() {
        let sink = EvalBurst { loaded: false };
        let result = Celebration::default().start(sink, 0.0);
        assert!(matches!(result, Err(PageError::Burst(_))));
    }
}
