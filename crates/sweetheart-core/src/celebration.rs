//! Confetti celebration.
//!
//! One opening burst, then a left/right pair of heart bursts on every
//! frame until the repeat window closes. Rendering the particles is the
//! job of an external [`BurstSink`]; this module only decides what to fire
//! and when.

use serde::{Deserialize, Serialize};

use crate::config::CelebrationConfig;
use crate::error::PageResult;
use crate::task::FrameTask;

/// Fractional viewport coordinates a burst originates from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Origin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Options for one call to the particle-burst capability.
///
/// Serializes to the option object canvas-confetti expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstConfig {
    pub particle_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    pub spread: f64,
    #[serde(default)]
    pub origin: Origin,
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<String>,
}

impl BurstConfig {
    /// The big initial burst.
    pub fn opening() -> Self {
        Self {
            particle_count: 150,
            angle: None,
            spread: 70.0,
            origin: Origin {
                x: None,
                y: Some(0.6),
            },
            colors: vec!["#ff4d6d".into(), "#ff8fa3".into(), "#ffffff".into()],
            shapes: Vec::new(),
        }
    }

    /// A small heart burst from a screen edge (`origin_x` 0 = left, 1 = right).
    pub fn side(angle: f64, origin_x: f64) -> Self {
        Self {
            particle_count: 5,
            angle: Some(angle),
            spread: 55.0,
            origin: Origin {
                x: Some(origin_x),
                y: None,
            },
            colors: vec!["#ff4d6d".into(), "#ffccd5".into()],
            shapes: vec!["heart".into()],
        }
    }

    /// JavaScript call expression for this burst.
    pub fn to_script(&self) -> PageResult<String> {
        Ok(format!("confetti({});", serde_json::to_string(self)?))
    }
}

/// External particle-burst capability.
pub trait BurstSink {
    fn burst(&mut self, config: &BurstConfig) -> PageResult<()>;
}

/// Shared celebration operation.
#[derive(Debug, Clone)]
pub struct Celebration {
    config: CelebrationConfig,
}

impl Celebration {
    pub fn new(config: CelebrationConfig) -> Self {
        Self { config }
    }

    /// Fire the opening burst and return the repeating side-burst task.
    ///
    /// `now_ms` is on the same clock the returned task will be ticked with.
    /// A failed opening burst is returned as an error; failures inside the
    /// repeating task are logged and skipped.
    pub fn start<S>(&self, mut sink: S, now_ms: f64) -> PageResult<FrameTask<impl FnMut(f64)>>
    where
        S: BurstSink,
    {
        tracing::info!("Celebration started");
        sink.burst(&self.config.opening)?;

        let left = self.config.left.clone();
        let right = self.config.right.clone();
        let deadline = now_ms + self.config.repeat_ms as f64;

        Ok(FrameTask::new(deadline, move |_| {
            for side in [&left, &right] {
                if let Err(e) = sink.burst(side) {
                    tracing::warn!("Side burst failed: {}", e);
                }
            }
        }))
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(CelebrationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use crate::task::FrameStep;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<BurstConfig>>>);

    impl BurstSink for Recorder {
        fn burst(&mut self, config: &BurstConfig) -> PageResult<()> {
            self.0.borrow_mut().push(config.clone());
            Ok(())
        }
    }

    struct Broken;

    impl BurstSink for Broken {
        fn burst(&mut self, _config: &BurstConfig) -> PageResult<()> {
            Err(PageError::Burst("confetti is not defined".to_string()))
        }
    }

    #[test]
    fn test_opening_script_matches_library_options() {
        let script = BurstConfig::opening().to_script().unwrap();
        assert_eq!(
            script,
            r##"confetti({"particleCount":150,"spread":70.0,"origin":{"y":0.6},"colors":["#ff4d6d","#ff8fa3","#ffffff"]});"##
        );
    }

    #[test]
    fn test_side_burst_carries_heart_shape() {
        let json = serde_json::to_value(BurstConfig::side(120.0, 1.0)).unwrap();
        assert_eq!(json["angle"], 120.0);
        assert_eq!(json["origin"]["x"], 1.0);
        assert!(json["origin"].get("y").is_none());
        assert_eq!(json["shapes"][0], "heart");
    }

    #[test]
    fn test_pairs_fire_each_frame_until_deadline() {
        let recorder = Recorder::default();
        let celebration = Celebration::default();

        let mut task = celebration.start(recorder.clone(), 1_000.0).unwrap();
        assert_eq!(recorder.0.borrow().len(), 1);

        // 60 fps for 3 seconds, plus the frame that crosses the deadline
        let frames = (0..).map(|i| 1_000.0 + i as f64 * (1000.0 / 60.0));
        task.run_frames(frames);

        let bursts = recorder.0.borrow();
        let pairs = (bursts.len() - 1) / 2;
        assert_eq!(pairs as u64, task.frames());
        assert!((180..=182).contains(&pairs), "got {} pairs", pairs);
        assert_eq!(bursts[1].origin.x, Some(0.0));
        assert_eq!(bursts[2].origin.x, Some(1.0));
    }

    #[test]
    fn test_failed_opening_burst_is_reported() {
        let result = Celebration::default().start(Broken, 0.0);
        assert!(matches!(result, Err(PageError::Burst(_))));
    }
}
