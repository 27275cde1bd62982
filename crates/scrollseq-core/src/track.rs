//! Piecewise-linear mappings from progress to property values.

use crate::error::ConfigError;
use crate::value::Value;
use smallvec::SmallVec;

/// Easing applied to the local fraction within one segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Input breakpoints paired with output values.
///
/// Before the first breakpoint the first value is held, after the last the
/// last value is held.
#[derive(Clone, Debug)]
pub struct Track {
    inputs: SmallVec<[f32; 4]>,
    outputs: SmallVec<[Value; 4]>,
    easing: Easing,
}

impl Track {
    pub fn new(inputs: &[f32], outputs: &[Value]) -> Result<Self, ConfigError> {
        if inputs.len() != outputs.len() {
            return Err(ConfigError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints(inputs.len()));
        }
        for (i, w) in inputs.windows(2).enumerate() {
            if !w[0].is_finite() || !w[1].is_finite() || w[1] < w[0] {
                return Err(ConfigError::UnorderedBreakpoints(i + 1));
            }
        }
        let first = outputs[0].kind();
        if let Some(other) = outputs.iter().map(Value::kind).find(|k| *k != first) {
            return Err(ConfigError::MixedValueKinds { first, other });
        }
        Ok(Self {
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
            easing: Easing::Linear,
        })
    }

    /// Convenience for scalar tracks.
    pub fn numbers(inputs: &[f32], outputs: &[f32]) -> Result<Self, ConfigError> {
        let values: SmallVec<[Value; 4]> = outputs.iter().map(|v| Value::Number(*v)).collect();
        Self::new(inputs, &values)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Continuous sample at `progress`.
    pub fn sample(&self, progress: f32) -> Value {
        let last = self.inputs.len() - 1;
        if progress <= self.inputs[0] {
            return self.outputs[0];
        }
        if progress >= self.inputs[last] {
            return self.outputs[last];
        }
        // first segment whose end lies beyond progress
        let seg = self
            .inputs
            .windows(2)
            .position(|w| progress < w[1])
            .unwrap_or(last - 1);
        let (a, b) = (self.inputs[seg], self.inputs[seg + 1]);
        let span = b - a;
        if span <= f32::EPSILON {
            return self.outputs[seg + 1];
        }
        let t = self.easing.apply((progress - a) / span);
        self.outputs[seg].lerp(&self.outputs[seg + 1], t)
    }

    /// Stepped sample: the value of the last breakpoint reached. Used for
    /// reduced motion, where states change without in-between frames.
    pub fn sample_stepped(&self, progress: f32) -> Value {
        let idx = self
            .inputs
            .iter()
            .rposition(|i| progress >= *i)
            .unwrap_or(0);
        self.outputs[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Rgb;

    #[test]
    fn holds_boundaries_without_extrapolation() {
        let t = Track::numbers(&[0.1, 0.6], &[0.0, 1.0]).unwrap();
        assert_eq!(t.sample(0.05), Value::Number(0.0));
        assert_eq!(t.sample(0.6), Value::Number(1.0));
        assert_eq!(t.sample(0.9), Value::Number(1.0));
        let mid = t.sample(0.35).as_f32().unwrap();
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn multi_segment_plateau() {
        // fade in, hold, fade out
        let t = Track::numbers(&[0.0, 0.2, 0.4, 0.6], &[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(t.sample(0.3), Value::Number(1.0));
        let out = t.sample(0.5).as_f32().unwrap();
        assert!((out - 0.5).abs() < 1e-5);
        assert_eq!(t.sample(1.0), Value::Number(0.0));
    }

    #[test]
    fn zero_width_segment_jumps() {
        let t = Track::numbers(&[0.0, 0.5, 0.5, 1.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(t.sample(0.49), Value::Number(0.0));
        assert_eq!(t.sample(0.5), Value::Number(1.0));
    }

    #[test]
    fn rejects_authoring_errors() {
        assert!(matches!(
            Track::numbers(&[0.0, 1.0], &[0.0]),
            Err(ConfigError::LengthMismatch { .. })
        ));
        assert!(matches!(
            Track::numbers(&[0.5], &[0.0]),
            Err(ConfigError::TooFewBreakpoints(1))
        ));
        assert!(matches!(
            Track::numbers(&[0.6, 0.1], &[0.0, 1.0]),
            Err(ConfigError::UnorderedBreakpoints(1))
        ));
        assert!(matches!(
            Track::new(&[0.0, 1.0], &[Value::Px(0.0), Value::Color(Rgb::default())]),
            Err(ConfigError::MixedValueKinds { .. })
        ));
    }

    #[test]
    fn easing_keeps_endpoints() {
        for e in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn stepped_sample_snaps_to_reached_breakpoint() {
        let t = Track::new(
            &[0.0, 0.5, 1.0],
            &[Value::Percent(0.0), Value::Percent(50.0), Value::Percent(100.0)],
        )
        .unwrap();
        assert_eq!(t.sample_stepped(0.49), Value::Percent(0.0));
        assert_eq!(t.sample_stepped(0.5), Value::Percent(50.0));
        assert_eq!(t.sample_stepped(-1.0), Value::Percent(0.0));
    }
}
