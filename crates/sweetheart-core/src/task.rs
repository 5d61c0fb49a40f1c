//! Cooperative per-frame tasks.
//!
//! A [`FrameTask`] is work that wants to run once per rendered frame until
//! a deadline passes. The host owns the frame loop and calls
//! [`FrameStep::tick`] with the frame timestamp; the task answers whether
//! it wants another frame. The stop condition is data on the task, not
//! control flow in the callback.

use std::ops::ControlFlow;

/// Work the host ticks once per rendered frame.
pub trait FrameStep {
    /// Advance one frame.
    ///
    /// `Continue` asks the host for another frame, `Break` means done.
    fn tick(&mut self, now_ms: f64) -> ControlFlow<()>;

    /// Drive the work over a sequence of frame timestamps until it finishes.
    ///
    /// Returns the number of timestamps consumed.
    fn run_frames<I>(&mut self, timestamps: I) -> usize
    where
        I: IntoIterator<Item = f64>,
        Self: Sized,
    {
        let mut consumed = 0;
        for now_ms in timestamps {
            consumed += 1;
            if self.tick(now_ms).is_break() {
                break;
            }
        }
        consumed
    }
}

impl<T: FrameStep + ?Sized> FrameStep for &mut T {
    fn tick(&mut self, now_ms: f64) -> ControlFlow<()> {
        (**self).tick(now_ms)
    }
}

/// A deadline-bounded, self-rescheduling unit of frame work.
///
/// The step runs first and the deadline is checked after it, so the first
/// frame always runs.
pub struct FrameTask<F> {
    deadline_ms: f64,
    frames: u64,
    step: F,
}

impl<F> FrameTask<F>
where
    F: FnMut(f64),
{
    /// Create a task that stops at `deadline_ms` (same clock as the frame timestamps).
    pub fn new(deadline_ms: f64, step: F) -> Self {
        Self {
            deadline_ms,
            frames: 0,
            step,
        }
    }

    pub fn deadline_ms(&self) -> f64 {
        self.deadline_ms
    }

    /// Number of frames on which the step ran.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<F> FrameStep for FrameTask<F>
where
    F: FnMut(f64),
{
    fn tick(&mut self, now_ms: f64) -> ControlFlow<()> {
        (self.step)(now_ms);
        self.frames += 1;

        if now_ms < self.deadline_ms {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_past_deadline() {
        let mut calls = 0;
        let mut task = FrameTask::new(100.0, |_| calls += 1);
        assert!(task.tick(500.0).is_break());
        drop(task);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_runs_until_deadline_at_frame_rate() {
        let mut seen = Vec::new();
        let mut task = FrameTask::new(50.0, |now| seen.push(now));
        let frames = (0..).map(|i| i as f64 * 16.0);
        let consumed = task.run_frames(frames);
        // 0, 16, 32, 48 continue; 64 runs and stops
        assert_eq!(consumed, 5);
        assert_eq!(task.frames(), 5);
        drop(task);
        assert_eq!(seen.last().copied(), Some(64.0));
    }

    #[test]
    fn test_borrowed_task_keeps_progress() {
        fn first_two<T: FrameStep>(mut work: T) {
            work.run_frames([0.0, 10.0]);
        }

        let mut task = FrameTask::new(20.0, |_| {});
        first_two(&mut task);
        assert_eq!(task.frames(), 2);
        assert!(task.tick(20.0).is_break());
        assert_eq!(task.frames(), 3);
    }
}
