//! Per-tick exponential damping
//!
//! A damper closes a fixed fraction of the remaining distance to its target
//! on every animation tick. Unlike a spring there is no velocity state and
//! no overshoot: for any factor in `(0, 1)` the value approaches the target
//! monotonically, which is exactly the trailing-cursor motion contract.

/// Configuration for a damper
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamperConfig {
    /// Fraction of the remaining distance closed per tick, in `(0, 1)`
    pub factor: f32,
}

impl DamperConfig {
    /// Create a new damper configuration
    ///
    /// # Panics
    ///
    /// Panics unless `0 < factor < 1`. A factor outside that range breaks
    /// the no-overshoot contract, so construction fails fast.
    pub fn new(factor: f32) -> Self {
        assert!(
            factor > 0.0 && factor < 1.0,
            "damper factor must be in (0, 1), got {factor}"
        );
        Self { factor }
    }

    /// The classic trailing-cursor feel (10% per tick)
    pub fn trailing() -> Self {
        Self { factor: 0.1 }
    }

    /// Snappy, close-following damping
    pub fn tight() -> Self {
        Self { factor: 0.35 }
    }

    /// Very loose, floaty damping
    pub fn loose() -> Self {
        Self { factor: 0.05 }
    }
}

impl Default for DamperConfig {
    fn default() -> Self {
        Self::trailing()
    }
}

/// A damped follower value
#[derive(Clone, Copy, Debug)]
pub struct Damper {
    config: DamperConfig,
    value: f32,
    target: f32,
}

impl Damper {
    pub fn new(config: DamperConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to a value without animating
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
    }

    /// Check if the damper has settled onto its target
    pub fn is_settled(&self) -> bool {
        // Sub-twentieth-of-a-pixel remainders are imperceptible
        const EPSILON: f32 = 0.05;

        (self.value - self.target).abs() < EPSILON
    }

    /// Advance one tick: close `factor` of the remaining distance
    pub fn step(&mut self) {
        if self.is_settled() {
            self.value = self.target;
            return;
        }

        let dist = self.target - self.value;
        self.value += dist * self.config.factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damper_settles_to_target() {
        let mut damper = Damper::new(DamperConfig::trailing(), 0.0);
        damper.set_target(100.0);

        // A few seconds at display cadence is far more than enough
        for _ in 0..240 {
            damper.step();
        }

        assert!(damper.is_settled());
        assert_eq!(damper.value(), 100.0);
    }

    #[test]
    fn test_damper_distance_strictly_decreases() {
        let mut damper = Damper::new(DamperConfig::trailing(), 0.0);
        damper.set_target(500.0);

        let mut previous = (damper.target() - damper.value()).abs();
        for _ in 0..100 {
            damper.step();
            let distance = (damper.target() - damper.value()).abs();
            assert!(
                distance < previous || distance == 0.0,
                "distance must shrink every tick"
            );
            previous = distance;
        }
    }

    #[test]
    fn test_damper_never_overshoots() {
        let mut damper = Damper::new(DamperConfig::tight(), -50.0);
        damper.set_target(200.0);

        for _ in 0..500 {
            damper.step();
            assert!(damper.value() <= 200.0);
        }

        damper.set_target(-300.0);
        for _ in 0..500 {
            damper.step();
            assert!(damper.value() >= -300.0);
        }
    }

    #[test]
    fn test_damper_holds_until_target_moves() {
        let mut damper = Damper::new(DamperConfig::trailing(), 42.0);

        for _ in 0..10 {
            damper.step();
        }
        assert_eq!(damper.value(), 42.0);

        damper.set_target(43.0);
        damper.step();
        assert!(damper.value() > 42.0);
    }

    #[test]
    fn test_set_immediate_skips_animation() {
        let mut damper = Damper::new(DamperConfig::loose(), 0.0);
        damper.set_target(100.0);
        damper.step();

        damper.set_immediate(7.0);
        assert_eq!(damper.value(), 7.0);
        assert_eq!(damper.target(), 7.0);
        assert!(damper.is_settled());
    }

    #[test]
    #[should_panic(expected = "damper factor must be in (0, 1)")]
    fn test_config_rejects_factor_of_one() {
        DamperConfig::new(1.0);
    }

    #[test]
    #[should_panic(expected = "damper factor must be in (0, 1)")]
    fn test_config_rejects_zero_factor() {
        DamperConfig::new(0.0);
    }
}
