use thiserror::Error;

/// Authoring mistakes caught when a sequencer, track or trigger is built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("falling threshold {falling} must be below rising threshold {rising}")]
    NoHysteresis { rising: f32, falling: f32 },

    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f32),

    #[error("track needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),

    #[error("track has {inputs} input breakpoints but {outputs} output values")]
    LengthMismatch { inputs: usize, outputs: usize },

    #[error("input breakpoints must be finite and non-decreasing (index {0})")]
    UnorderedBreakpoints(usize),

    #[error("track mixes value kinds ({first} and {other})")]
    MixedValueKinds {
        first: &'static str,
        other: &'static str,
    },

    #[error("spring {name} must be finite and positive, got {value}")]
    InvalidSpring { name: &'static str, value: f32 },

    #[error("active duration must be positive")]
    ZeroDuration,

    #[error("cannot parse color {0:?}")]
    BadColor(String),

    #[error("scene {0:?} declared twice")]
    DuplicateScene(String),
}
