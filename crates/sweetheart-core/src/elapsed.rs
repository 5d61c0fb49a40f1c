//! Time-together counter.
//!
//! Elapsed time since a fixed reference instant, split into total hours,
//! minutes and seconds (no calendar months or days). The display eases in
//! over a fixed ramp once the section becomes visible, then refreshes with
//! exact values every second.
//!
//! ## Phases
//!
//! | Phase | Entered on | Shows |
//! |-------|------------|-------|
//! | Waiting | page load | nothing |
//! | AnimatingIn | section visible (once) | `floor(unit * ease(t))` per unit |
//! | Steady | ramp finished | exact values |
//!
//! During the ramp each unit is eased and truncated on its own, so the
//! three numbers need not describe one consistent duration.

use std::ops::ControlFlow;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

use crate::error::{PageError, PageResult};
use crate::render::RenderTarget;
use crate::task::FrameStep;

/// Fixed instant the counter measures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceInstant {
    at: DateTime<FixedOffset>,
}

impl ReferenceInstant {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// Interpret a wall-clock time in the machine's local zone.
    pub fn from_local(naive: NaiveDateTime) -> PageResult<Self> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|at| Self::new(at.fixed_offset()))
            .ok_or_else(|| PageError::InvalidReference(format!("{} does not exist locally", naive)))
    }

    pub fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }

    /// Whole seconds from the reference to `now_epoch_ms`.
    ///
    /// Instants before the reference count as zero.
    pub fn elapsed_seconds(&self, now_epoch_ms: i64) -> u64 {
        let diff_ms = now_epoch_ms - self.at.timestamp_millis();
        diff_ms.div_euclid(1000).max(0) as u64
    }
}

/// Hours / minutes / seconds as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedReading {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ElapsedReading {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// Scale each unit by `ease` and truncate it independently.
    pub fn eased(&self, ease: f64) -> Self {
        let scale = |unit: u64| (unit as f64 * ease).floor().max(0.0) as u64;
        Self {
            hours: scale(self.hours),
            minutes: scale(self.minutes),
            seconds: scale(self.seconds),
        }
    }

    /// Hours with thousands separators (`1,234`).
    pub fn hours_label(&self) -> String {
        let digits = self.hours.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Write the reading into the three display elements.
    pub fn render<H, M, S>(&self, hours: &mut H, minutes: &mut M, seconds: &mut S)
    where
        H: RenderTarget,
        M: RenderTarget,
        S: RenderTarget,
    {
        hours.set_text(&self.hours_label());
        minutes.set_text(&self.minutes.to_string());
        seconds.set_text(&self.seconds.to_string());
    }
}

/// Exponential ease-out: `1 - 2^(-10 * progress / duration)`.
pub fn ease_out_expo(progress_ms: f64, duration_ms: f64) -> f64 {
    1.0 - 2f64.powf(-10.0 * progress_ms / duration_ms)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Waiting,
    /// `started_at_ms` is the first ramp frame's timestamp
    AnimatingIn { started_at_ms: Option<f64> },
    Steady,
}

/// Counter state machine.
#[derive(Debug, Clone)]
pub struct ElapsedCounter {
    reference: ReferenceInstant,
    ramp_ms: f64,
    phase: CounterPhase,
}

impl ElapsedCounter {
    pub fn new(reference: ReferenceInstant, ramp_ms: u64) -> Self {
        Self {
            reference,
            ramp_ms: ramp_ms as f64,
            phase: CounterPhase::Waiting,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn reference(&self) -> ReferenceInstant {
        self.reference
    }

    /// Section became visible. Only the first call starts the ramp.
    pub fn reveal(&mut self) -> bool {
        if self.phase == CounterPhase::Waiting {
            tracing::debug!("Counter ramp armed");
            self.phase = CounterPhase::AnimatingIn {
                started_at_ms: None,
            };
            true
        } else {
            false
        }
    }

    /// One ramp frame at `frame_ms` (frame clock) and `now_epoch_ms` (wall clock).
    ///
    /// Returns the eased reading while the ramp runs. Returns `None` once the
    /// ramp is over (switching to `Steady`) or when not ramping at all.
    pub fn frame(&mut self, frame_ms: f64, now_epoch_ms: i64) -> Option<ElapsedReading> {
        let CounterPhase::AnimatingIn { started_at_ms } = self.phase else {
            return None;
        };

        let start = started_at_ms.unwrap_or(frame_ms);
        self.phase = CounterPhase::AnimatingIn {
            started_at_ms: Some(start),
        };

        let progress = frame_ms - start;
        if progress < self.ramp_ms {
            let target = ElapsedReading::from_seconds(self.reference.elapsed_seconds(now_epoch_ms));
            Some(target.eased(ease_out_expo(progress, self.ramp_ms)))
        } else {
            tracing::debug!("Counter ramp finished, switching to steady refresh");
            self.phase = CounterPhase::Steady;
            None
        }
    }

    /// Exact reading for the steady refresh.
    pub fn refresh(&self, now_epoch_ms: i64) -> ElapsedReading {
        ElapsedReading::from_seconds(self.reference.elapsed_seconds(now_epoch_ms))
    }
}

/// The ramp as frame work: reads the wall clock, hands each eased reading
/// to `display`, and finishes when the counter reaches `Steady`.
pub struct RampTask<C, D> {
    counter: ElapsedCounter,
    wall_clock: C,
    display: D,
}

impl<C, D> RampTask<C, D>
where
    C: FnMut() -> i64,
    D: FnMut(ElapsedReading),
{
    pub fn new(counter: ElapsedCounter, wall_clock: C, display: D) -> Self {
        Self {
            counter,
            wall_clock,
            display,
        }
    }

    /// Give the counter back, typically in `Steady`.
    pub fn into_counter(self) -> ElapsedCounter {
        self.counter
    }
}

impl<C, D> FrameStep for RampTask<C, D>
where
    C: FnMut() -> i64,
    D: FnMut(ElapsedReading),
{
    fn tick(&mut self, now_ms: f64) -> ControlFlow<()> {
        let now_epoch_ms = (self.wall_clock)();
        match self.counter.frame(now_ms, now_epoch_ms) {
            Some(reading) => {
                (self.display)(reading);
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        }
    }
}
