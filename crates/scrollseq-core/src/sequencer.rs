//! Per-section scene sequencer: one owned instance per scroll-driven section.
//!
//! Each frame runs in a fixed order: take the latest progress sample,
//! integrate the springs one step, then feed the same smoothed value to the
//! scene interpolator and the threshold trigger.

use crate::constants::{ACCENT_SPRING, BURST_PARTICLES, BURST_PARTICLES_COMPACT};
use crate::error::ConfigError;
use crate::particles::ParticleBurst;
use crate::policy::MotionPolicy;
use crate::progress::ProgressSource;
use crate::scene::{interpolate_into, validate_scenes, Scene, SceneOutputs, Signals};
use crate::spring::{SignalSmoother, SpringConfig};
use crate::trigger::{ThresholdTrigger, TriggerConfig, TriggerState, Triggered};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct SequencerConfig {
    pub progress_spring: SpringConfig,
    pub accent_spring: SpringConfig,
    pub trigger: TriggerConfig,
    pub burst_particles: usize,
    pub burst_particles_compact: usize,
    /// Snap scene values to breakpoints when reduced motion is requested.
    pub snap_reduced_motion: bool,
    pub seed: u64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            progress_spring: SpringConfig::default(),
            accent_spring: SpringConfig::from_pair(ACCENT_SPRING),
            trigger: TriggerConfig::default(),
            burst_particles: BURST_PARTICLES,
            burst_particles_compact: BURST_PARTICLES_COMPACT,
            snap_reduced_motion: false,
            seed: 0x5C20_11ED,
        }
    }
}

impl SequencerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.progress_spring.validate()?;
        self.accent_spring.validate()?;
        self.trigger.validate()
    }
}

/// What happened during one [`SceneSequencer::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub progress: f32,
    pub state: TriggerState,
    /// Set on the frame of an `Idle -> Active` transition.
    pub triggered: Option<Triggered>,
    /// True when the transition also started a visible burst.
    pub effect_started: bool,
}

#[derive(Debug)]
pub struct SceneSequencer {
    config: SequencerConfig,
    policy: MotionPolicy,
    source: ProgressSource,
    progress: SignalSmoother,
    accent: SignalSmoother,
    scenes: Vec<Scene>,
    outputs: SceneOutputs,
    trigger: ThresholdTrigger,
    burst: Option<ParticleBurst>,
    rng: StdRng,
    clock_sec: f64,
    observed: bool,
    torn_down: bool,
}

impl SceneSequencer {
    pub fn new(
        config: SequencerConfig,
        scenes: Vec<Scene>,
        policy: MotionPolicy,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_scenes(&scenes)?;
        let bypass = !policy.smoothing_enabled();
        let mut seq = Self {
            progress: SignalSmoother::new(config.progress_spring, 0.0, bypass),
            accent: SignalSmoother::new(config.accent_spring, 0.0, bypass),
            trigger: ThresholdTrigger::new(config.trigger)?,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            policy,
            source: ProgressSource::new(),
            scenes,
            outputs: SceneOutputs::default(),
            burst: None,
            clock_sec: 0.0,
            observed: false,
            torn_down: false,
        };
        seq.resample(Signals::uniform(0.0));
        log::info!(
            "[sequencer] {} scenes, reduced_motion={} compact={}",
            seq.scenes.len(),
            policy.reduced_motion,
            policy.compact
        );
        Ok(seq)
    }

    /// Record a raw progress sample; only the latest one per frame is used.
    pub fn observe(&mut self, raw: f32) {
        if !self.torn_down {
            self.source.observe(raw);
        }
    }

    /// Record a sample from container geometry (see [`crate::progress_from_rect`]).
    pub fn observe_rect(
        &mut self,
        container_top: f64,
        container_height: f64,
        viewport_height: f64,
    ) {
        if !self.torn_down {
            self.source
                .observe_rect(container_top, container_height, viewport_height);
        }
    }

    pub fn set_viewport_width(&mut self, viewport_width_px: f64) {
        let next = self.policy.with_viewport_width(viewport_width_px);
        if next != self.policy {
            log::debug!("[sequencer] compact={}", next.compact);
            self.policy = next;
        }
    }

    /// Advance one frame of `dt`.
    pub fn tick(&mut self, dt: Duration) -> FrameReport {
        let mut report = FrameReport {
            progress: self.progress.value(),
            state: self.trigger.state(),
            triggered: None,
            effect_started: false,
        };
        if self.torn_down {
            return report;
        }
        self.clock_sec += dt.as_secs_f64();
        let dt_sec = dt.as_secs_f32();

        if let Some(p) = self.source.take() {
            if self.observed {
                self.progress.set_target(p);
                self.accent.set_target(p);
            } else {
                // no spring-in from 0 when mounting mid-page
                self.progress.snap_to(p);
                self.accent.snap_to(p);
                self.observed = true;
            }
        }
        if !self.observed {
            return report;
        }

        let signals = Signals {
            progress: self.progress.step(dt_sec),
            accent: self.accent.step(dt_sec),
        };
        self.resample(signals);

        report.progress = signals.progress;
        report.triggered = self.trigger.update(signals.progress, self.clock_sec);
        report.state = self.trigger.state();

        if report.triggered.is_some() && self.policy.effects_enabled() {
            let count = if self.policy.compact {
                self.config.burst_particles_compact
            } else {
                self.config.burst_particles
            };
            let lifetime = self.config.trigger.active_duration.as_secs_f32();
            self.burst = Some(ParticleBurst::spawn(count, lifetime, &mut self.rng));
            report.effect_started = true;
        } else if let Some(burst) = &mut self.burst {
            burst.step(dt_sec);
            if burst.is_finished() {
                self.burst = None;
            }
        }
        report
    }

    fn resample(&mut self, signals: Signals) {
        let stepped = self.config.snap_reduced_motion && self.policy.snap_scenes();
        interpolate_into(signals, &self.scenes, stepped, &mut self.outputs);
    }

    /// Whether another frame would change anything.
    pub fn needs_frame(&self) -> bool {
        !self.torn_down
            && (self.source.has_pending()
                || !self.progress.is_settled()
                || !self.accent.is_settled()
                || self.trigger.state().is_active()
                || self.burst.is_some())
    }

    /// Stop for good: pending samples, the active timer and any burst are
    /// dropped and later calls are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.source.clear();
        self.burst = None;
        log::debug!("[sequencer] torn down in state {}", self.trigger.state().as_str());
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn outputs(&self) -> &SceneOutputs {
        &self.outputs
    }

    pub fn trigger_state(&self) -> TriggerState {
        self.trigger.state()
    }

    pub fn burst(&self) -> Option<&ParticleBurst> {
        self.burst.as_ref()
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// True once a frame has consumed at least one progress sample.
    pub fn is_observing(&self) -> bool {
        self.observed
    }
}
