//! Ambient floating-heart emitter.
//!
//! Each tick produces one [`Decoration`] with randomized symbol, position,
//! size and float duration. Decorations expire a fixed time after they are
//! spawned, regardless of how long their float animation runs.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::EmitterConfig;

/// One floating heart.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    /// Unique for the page session
    pub id: u64,
    pub symbol: String,
    /// Horizontal position in vw, within `[0, 100)`
    pub left_vw: f64,
    pub size_rem: f64,
    pub duration_s: f64,
    /// Page-clock millisecond at which the node is removed
    pub expires_at_ms: u64,
}

impl Decoration {
    /// Inline style for the heart node.
    ///
    /// Values are written at full precision; rounding could push a sample
    /// onto its excluded upper bound.
    pub fn style_attr(&self) -> String {
        format!(
            "left: {}vw; font-size: {}rem; animation-duration: {}s;",
            self.left_vw, self.size_rem, self.duration_s
        )
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

/// Spawns decorations on a fixed interval.
#[derive(Debug, Clone)]
pub struct AmbientEmitter {
    config: EmitterConfig,
    next_id: u64,
}

impl AmbientEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config, next_id: 0 }
    }

    pub fn interval_ms(&self) -> u64 {
        self.config.interval_ms
    }

    pub fn lifetime_ms(&self) -> u64 {
        self.config.lifetime_ms
    }

    /// Upper bound on simultaneously live decorations.
    pub fn steady_state_population(&self) -> usize {
        self.config.lifetime_ms.div_ceil(self.config.interval_ms) as usize
    }

    /// Create one decoration spawned at `now_ms`.
    pub fn emit<R: Rng>(&mut self, rng: &mut R, now_ms: u64) -> Decoration {
        let id = self.next_id;
        self.next_id += 1;

        let symbol = self
            .config
            .symbols
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "❤️".to_string());
        let size = self.config.size_rem;
        let duration = self.config.duration_s;

        Decoration {
            id,
            symbol,
            left_vw: rng.random_range(0.0..100.0),
            size_rem: rng.random_range(size.min..size.max),
            duration_s: rng.random_range(duration.min..duration.max),
            expires_at_ms: now_ms + self.config.lifetime_ms,
        }
    }

    /// One emitter tick at `now_ms`: drop what has expired from `layer`,
    /// then spawn a new decoration into it.
    ///
    /// Returns the number of decorations removed.
    pub fn tick<R: Rng>(
        &mut self,
        layer: &mut DecorationLayer,
        rng: &mut R,
        now_ms: u64,
    ) -> usize {
        let reaped = layer.reap(now_ms);
        layer.insert(self.emit(rng, now_ms));
        reaped
    }
}

/// Live decorations in spawn order.
#[derive(Debug, Clone, Default)]
pub struct DecorationLayer {
    live: Vec<Decoration>,
}

impl DecorationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, decoration: Decoration) {
        self.live.push(decoration);
    }

    /// Remove one decoration by id. Returns whether it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|d| d.id != id);
        self.live.len() != before
    }

    /// Drop everything expired at `now_ms`. Returns how many were removed.
    pub fn reap(&mut self, now_ms: u64) -> usize {
        let before = self.live.len();
        self.live.retain(|d| !d.is_expired(now_ms));
        before - self.live.len()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
        self.live.iter()
    }
}
