//! Action effect model
//!
//! Maps each effect class to an additive perturbation on the environment.
//! Every component is an independent uniform draw; no draw is reused
//! across the three quantities.

use rand::Rng;
use rule_engine::EffectClass;

use crate::state::EnvironmentState;

pub(crate) fn apply_effect<R: Rng>(
    state: &mut EnvironmentState,
    effect: EffectClass,
    rng: &mut R,
) {
    match effect {
        EffectClass::Suppress => {
            state.temperature -= rng.gen_range(5.0..=15.0);
            state.smoke -= rng.gen_range(10.0..=25.0);
            state.zone_risk -= rng.gen_range(10.0..=20.0);
        }
        EffectClass::Evacuate => {
            state.zone_risk -= rng.gen_range(15.0..=25.0);
            state.temperature += rng.gen_range(2.0..=8.0);
            state.smoke += rng.gen_range(3.0..=10.0);
        }
        EffectClass::Ventilate => {
            state.smoke -= rng.gen_range(5.0..=15.0);
            state.temperature -= rng.gen_range(2.0..=5.0);
            state.zone_risk -= rng.gen_range(5.0..=10.0);
        }
        EffectClass::Alert => {
            state.temperature += rng.gen_range(1.0..=5.0);
            state.smoke += rng.gen_range(2.0..=8.0);
            state.zone_risk += rng.gen_range(2.0..=8.0);
        }
        EffectClass::Monitor => {
            state.temperature += rng.gen_range(-1.0..=2.0);
            state.smoke += rng.gen_range(-1.0..=3.0);
            state.zone_risk += rng.gen_range(-2.0..=5.0);
        }
        EffectClass::Moderate => {
            state.temperature += rng.gen_range(-3.0..=5.0);
            state.smoke += rng.gen_range(-3.0..=7.0);
            state.zone_risk += rng.gen_range(-5.0..=10.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> EnvironmentState {
        EnvironmentState {
            smoke: 50.0,
            temperature: 80.0,
            zone_risk: 50.0,
        }
    }

    #[test]
    fn test_suppression_reduces_all_quantities() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut s = state();
            apply_effect(&mut s, EffectClass::Suppress, &mut rng);
            assert!(s.temperature <= 80.0 - 5.0 && s.temperature >= 80.0 - 15.0);
            assert!(s.smoke <= 50.0 - 10.0 && s.smoke >= 50.0 - 25.0);
            assert!(s.zone_risk <= 50.0 - 10.0 && s.zone_risk >= 50.0 - 20.0);
        }
    }

    #[test]
    fn test_evacuation_lowers_risk_while_conditions_worsen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut s = state();
            apply_effect(&mut s, EffectClass::Evacuate, &mut rng);
            assert!(s.zone_risk < 50.0);
            assert!(s.temperature > 80.0);
            assert!(s.smoke > 50.0);
        }
    }

    #[test]
    fn test_ventilation_clears_smoke() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut s = state();
            apply_effect(&mut s, EffectClass::Ventilate, &mut rng);
            assert!(s.smoke < 50.0);
            assert!(s.temperature < 80.0);
            assert!(s.zone_risk < 50.0);
        }
    }

    #[test]
    fn test_monitor_drift_stays_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut s = state();
            apply_effect(&mut s, EffectClass::Monitor, &mut rng);
            assert!(s.temperature >= 79.0 && s.temperature <= 82.0);
            assert!(s.smoke >= 49.0 && s.smoke <= 53.0);
            assert!(s.zone_risk >= 48.0 && s.zone_risk <= 55.0);
        }
    }
}
