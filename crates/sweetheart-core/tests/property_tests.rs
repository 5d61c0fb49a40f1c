//! Property-based tests for page behavior
//!
//! Uses proptest to check the numeric contracts of the emitter, the
//! evasive button and the elapsed counter.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sweetheart_core::{
    choose_placement, AmbientEmitter, DecorationLayer, ElapsedReading, EmitterConfig, Rect,
    Viewport,
};

proptest! {
    /// Relocation keeps the whole element inside the margins whenever it fits
    #[test]
    fn prop_placement_within_margins(
        seed in any::<u64>(),
        width in 10.0f64..400.0,
        height in 10.0f64..200.0,
        vw in 500.0f64..4000.0,
        vh in 300.0f64..3000.0,
        margin in 0.0f64..40.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let element = Rect::new(0.0, 0.0, width, height);
        let p = choose_placement(&mut rng, element, Viewport::new(vw, vh), margin);

        prop_assert!(p.x >= margin);
        prop_assert!(p.x <= vw - width - margin + 1e-9);
        prop_assert!(p.y >= margin);
        prop_assert!(p.y <= vh - height - margin + 1e-9);
    }

    /// Steady-state decomposition matches floor/mod arithmetic
    #[test]
    fn prop_decomposition(total in 0u64..10_000_000_000) {
        let r = ElapsedReading::from_seconds(total);
        prop_assert_eq!(r.hours, total / 3600);
        prop_assert_eq!(r.minutes, (total % 3600) / 60);
        prop_assert_eq!(r.seconds, total % 60);
        prop_assert!(r.minutes < 60 && r.seconds < 60);
        prop_assert_eq!(r.hours * 3600 + r.minutes * 60 + r.seconds, total);
    }

    /// Easing never overshoots any unit
    #[test]
    fn prop_eased_never_exceeds_target(total in 0u64..10_000_000, ease in 0.0f64..1.0) {
        let target = ElapsedReading::from_seconds(total);
        let eased = target.eased(ease);
        prop_assert!(eased.hours <= target.hours);
        prop_assert!(eased.minutes <= target.minutes);
        prop_assert!(eased.seconds <= target.seconds);
    }

    /// Decorations stay in range and the live set stays bounded
    #[test]
    fn prop_emitter_bounded(seed in any::<u64>(), ticks in 1usize..400) {
        let config = EmitterConfig::default();
        let mut emitter = AmbientEmitter::new(config.clone());
        let mut layer = DecorationLayer::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for tick in 0..ticks as u64 {
            let now = tick * config.interval_ms;
            emitter.tick(&mut layer, &mut rng, now);
            let d = layer.iter().last().cloned().unwrap();
            prop_assert!(d.left_vw >= 0.0 && d.left_vw < 100.0);
            prop_assert!(config.size_rem.contains(d.size_rem));
            prop_assert!(layer.len() <= emitter.steady_state_population());
        }

        // Ticks keep running; one lifetime later only the new heart is left
        let last = (ticks as u64 - 1) * config.interval_ms;
        emitter.tick(&mut layer, &mut rng, last + config.lifetime_ms);
        prop_assert_eq!(layer.len(), 1);
    }
}
