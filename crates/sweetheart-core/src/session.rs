//! Page-session context.
//!
//! All state that outlives a single event handler lives here: the
//! reference instant, the envelope's reveal flag, the counter phase (with
//! its ramp start) and the emitter's id sequence. One session is created
//! at startup and handed to every component.

use crate::celebration::Celebration;
use crate::config::PageConfig;
use crate::elapsed::{CounterPhase, ElapsedCounter, ReferenceInstant};
use crate::emitter::AmbientEmitter;
use crate::error::PageResult;
use crate::evasive::Evader;
use crate::reveal::Envelope;

#[derive(Debug, Clone)]
pub struct PageSession {
    config: PageConfig,
    envelope: Envelope,
    counter: ElapsedCounter,
    emitter: AmbientEmitter,
    evader: Evader,
    celebration: Celebration,
}

impl PageSession {
    /// Build a session, resolving the configured reference in local time.
    pub fn new(config: PageConfig) -> PageResult<Self> {
        config.validate()?;
        let reference = ReferenceInstant::from_local(config.reference()?)?;
        Ok(Self::with_reference(config, reference))
    }

    /// Build a session around an already-resolved reference instant.
    pub fn with_reference(config: PageConfig, reference: ReferenceInstant) -> Self {
        tracing::info!("Page session started, counting from {}", reference.at());
        Self {
            envelope: Envelope::new(),
            counter: ElapsedCounter::new(reference, config.counter.ramp_ms),
            emitter: AmbientEmitter::new(config.emitter.clone()),
            evader: Evader::new(config.evade_margin_px),
            celebration: Celebration::new(config.celebration.clone()),
            config,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn reference(&self) -> ReferenceInstant {
        self.counter.reference()
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    pub fn emitter(&self) -> &AmbientEmitter {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut AmbientEmitter {
        &mut self.emitter
    }

    pub fn evader(&self) -> Evader {
        self.evader
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    pub fn counter(&self) -> &ElapsedCounter {
        &self.counter
    }

    /// The time-together section became visible.
    ///
    /// Returns a working copy of the counter to drive the ramp with, or
    /// `None` if the ramp was already started.
    pub fn begin_ramp(&mut self) -> Option<ElapsedCounter> {
        if self.counter.reveal() {
            Some(self.counter.clone())
        } else {
            None
        }
    }

    /// Store the counter back after its ramp.
    pub fn finish_ramp(&mut self, counter: ElapsedCounter) {
        if counter.phase() != CounterPhase::Steady {
            tracing::warn!("Ramp handed back before finishing: {:?}", counter.phase());
        }
        self.counter = counter;
    }
}
