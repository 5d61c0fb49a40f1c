//! Time Together Section
//!
//! Hours, minutes and seconds since the reference instant. Counts up with
//! an ease-out ramp the first time the section scrolls into view, then
//! ticks once per second.

use std::time::Duration;

use dioxus::prelude::*;
use sweetheart_core::{ElapsedReading, ElementState, RampTask, RenderTarget};

use crate::bridge::{drive_frames, SignalTarget};
use crate::context::{use_page_clock, use_session, wall_clock_ms};

/// Resolves once the section is at least `threshold` visible, or right
/// away if the section is missing.
const VISIBILITY_SCRIPT: &str = r#"
const threshold = await dioxus.recv();
const section = document.getElementById('time-together');
if (!section) {
    dioxus.send(false);
} else {
    const observer = new IntersectionObserver((entries) => {
        entries.forEach((entry) => {
            if (entry.isIntersecting) {
                observer.unobserve(entry.target);
                dioxus.send(true);
            }
        });
    }, { threshold });
    observer.observe(section);
}
"#;

/// Time-together counter section.
#[component]
pub fn TimeTogether() -> Element {
    let mut session = use_session();
    let clock = use_page_clock();
    let hours = use_signal(|| ElementState::with_text("0"));
    let minutes = use_signal(|| ElementState::with_text("0"));
    let seconds = use_signal(|| ElementState::with_text("0"));

    use_effect(move || {
        spawn(async move {
            let (threshold, refresh_ms) = {
                let session = session.peek();
                let counter = &session.config().counter;
                (counter.visibility_threshold, counter.refresh_ms)
            };

            // Wait for the section to come into view
            let mut visible = document::eval(VISIBILITY_SCRIPT);
            if let Err(e) = visible.send(threshold) {
                tracing::warn!("Visibility check unavailable, starting now: {:?}", e);
            } else {
                match visible.recv::<bool>().await {
                    Ok(true) => tracing::debug!("Time-together section visible"),
                    Ok(false) => tracing::debug!("Time-together section missing, starting now"),
                    Err(e) => tracing::warn!("Visibility check failed, starting now: {:?}", e),
                }
            }

            let Some(counter) = session.write().begin_ramp() else {
                return;
            };

            let show = move |reading: ElapsedReading| {
                reading.render(
                    &mut SignalTarget(hours),
                    &mut SignalTarget(minutes),
                    &mut SignalTarget(seconds),
                );
            };

            let mut task = RampTask::new(counter, wall_clock_ms, show);
            drive_frames(&mut task, clock).await;
            session.write().finish_ramp(task.into_counter());

            // Steady once-per-second refresh for the rest of the session
            let mut ticker = tokio::time::interval(Duration::from_millis(refresh_ms));
            loop {
                ticker.tick().await;
                let reading = session.peek().counter().refresh(wall_clock_ms());
                show(reading);
            }
        });
    });

    rsx! {
        section { id: "time-together", class: "time-together",
            h2 { class: "section-title", "Our Time Together" }
            div { class: "time-grid",
                TimeUnit { state: hours, label: "Hours" }
                TimeUnit { state: minutes, label: "Minutes" }
                TimeUnit { state: seconds, label: "Seconds" }
            }
            p { class: "time-caption", "...and counting, every second ❤️" }
        }
    }
}

/// One number with its caption.
#[component]
fn TimeUnit(state: Signal<ElementState>, label: &'static str) -> Element {
    let value = state.read().text();
    let id = format!("{}-count", label.to_lowercase());

    rsx! {
        div { class: "time-unit",
            span { id: "{id}", class: "time-value", "{value}" }
            span { class: "time-label", "{label}" }
        }
    }
}
