//! Damped-spring smoothing for scroll-derived signals.

use crate::constants::{
    MAX_FRAME_DT_SEC, SPRING_MASS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_SUBSTEP_SEC,
};
use crate::error::ConfigError;

/// Spring tuning. Mass defaults to 1 so stiffness/damping read like the
/// usual motion-library parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: SPRING_MASS,
        }
    }

    pub const fn from_pair(pair: (f32, f32)) -> Self {
        Self::new(pair.0, pair.1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSpring { name, value });
            }
        }
        Ok(())
    }

    /// ζ = c / (2·√(k·m)); at or above 1 the spring never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_pair(crate::constants::PROGRESS_SPRING)
    }
}

/// Damped harmonic oscillator pulled toward `target`.
#[derive(Clone, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Jump to `value` with no residual motion.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance by one frame of `dt_sec`, integrated in fixed substeps
    /// (semi-implicit Euler). Frames longer than [`MAX_FRAME_DT_SEC`] are
    /// clamped so a resumed tab converges over a few frames instead of
    /// exploding. Returns the new position.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() {
            self.snap_to(self.target);
            return self.position;
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        if dt <= 0.0 {
            return self.position;
        }
        let n = (dt / SPRING_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / n as f32;
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
        } = self.config;
        for _ in 0..n {
            let accel = (k * (self.target - self.position) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        if self.is_at_rest() {
            self.snap_to(self.target);
        }
        self.position
    }
}

/// A signal filter that is either a spring or a straight pass-through.
///
/// The pass-through variant holds no spring state at all; it is what the
/// sequencer builds when reduced motion is requested.
#[derive(Clone, Debug)]
pub enum SignalSmoother {
    Spring(Spring),
    Passthrough { value: f32 },
}

impl SignalSmoother {
    pub fn new(config: SpringConfig, initial: f32, bypass: bool) -> Self {
        if bypass {
            SignalSmoother::Passthrough { value: initial }
        } else {
            SignalSmoother::Spring(Spring::new(config, initial))
        }
    }

    pub fn set_target(&mut self, target: f32) {
        match self {
            SignalSmoother::Spring(s) => s.set_target(target),
            SignalSmoother::Passthrough { value } => *value = target,
        }
    }

    /// Integrate one frame and return the smoothed value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        match self {
            SignalSmoother::Spring(s) => s.step(dt_sec),
            SignalSmoother::Passthrough { value } => *value,
        }
    }

    pub fn value(&self) -> f32 {
        match self {
            SignalSmoother::Spring(s) => s.position(),
            SignalSmoother::Passthrough { value } => *value,
        }
    }

    pub fn is_settled(&self) -> bool {
        match self {
            SignalSmoother::Spring(s) => s.is_at_rest(),
            SignalSmoother::Passthrough { .. } => true,
        }
    }

    pub fn snap_to(&mut self, v: f32) {
        match self {
            SignalSmoother::Spring(s) => s.snap_to(v),
            SignalSmoother::Passthrough { value } => *value = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(SpringConfig::new(80.0, 30.0).validate().is_ok());
        assert!(matches!(
            SpringConfig::new(0.0, 30.0).validate(),
            Err(ConfigError::InvalidSpring { name: "stiffness", .. })
        ));
        assert!(SpringConfig::new(80.0, f32::NAN).validate().is_err());
    }

    #[test]
    fn presets_do_not_overshoot() {
        assert!(SpringConfig::new(80.0, 30.0).damping_ratio() > 1.0);
        assert!(SpringConfig::new(120.0, 26.0).damping_ratio() > 1.0);
    }

    #[test]
    fn small_input_change_gives_small_output_change() {
        let mut s = Spring::new(SpringConfig::new(80.0, 30.0), 0.0);
        s.set_target(0.01);
        let p = s.step(1.0 / 60.0);
        assert!(p > 0.0 && p < 0.01);
    }

    #[test]
    fn long_frame_is_clamped() {
        let mut s = Spring::new(SpringConfig::new(120.0, 26.0), 0.0);
        s.set_target(1.0);
        let p = s.step(30.0);
        assert!(p < 1.0, "one long frame must not reach the target, got {p}");
        assert!(p.is_finite());
    }

    #[test]
    fn passthrough_has_no_lag() {
        let mut sm = SignalSmoother::new(SpringConfig::default(), 0.0, true);
        sm.set_target(0.7);
        assert_eq!(sm.step(1.0 / 60.0), 0.7);
        assert!(sm.is_settled());
    }
}
