//! Scroll-synchronized scene sequencing.
//!
//! Platform-free core shared by the web shell and the native simulator:
//! scroll progress, spring smoothing, scene tracks, a hysteresis trigger
//! and the particle burst it starts.

pub mod constants;
pub mod error;
pub mod journey;
pub mod particles;
pub mod policy;
pub mod progress;
pub mod scene;
pub mod sequencer;
pub mod spring;
pub mod track;
pub mod trigger;
pub mod value;

pub use constants::*;
pub use error::*;
pub use particles::*;
pub use policy::*;
pub use progress::*;
pub use scene::*;
pub use sequencer::*;
pub use spring::*;
pub use track::*;
pub use trigger::*;
pub use value::*;
