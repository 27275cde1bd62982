//! One-shot threshold trigger with hysteresis and a timed active phase.
//!
//! ```text
//!   Idle --(p >= rising)--> Active --(timer)--> Cooldown --(p < falling)--> Idle
//! ```
//!
//! There is no edge out of `Active` other than the timer: scrolling back
//! while the effect plays does not cut it short. Dropping below the falling
//! threshold during `Active` is remembered, so the trigger re-arms as soon
//! as the timer ends.

use crate::constants::{BURST_ACTIVE_SEC, BURST_FALLING_THRESHOLD, BURST_RISING_THRESHOLD};
use crate::error::ConfigError;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerState {
    Idle,
    Active,
    Cooldown,
}

impl TriggerState {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerState::Idle => "idle",
            TriggerState::Active => "active",
            TriggerState::Cooldown => "cooldown",
        }
    }

    pub fn is_active(self) -> bool {
        self == TriggerState::Active
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerConfig {
    pub rising: f32,
    pub falling: f32,
    pub active_duration: Duration,
}

impl TriggerConfig {
    pub fn new(rising: f32, falling: f32, active_duration: Duration) -> Result<Self, ConfigError> {
        let cfg = Self {
            rising,
            falling,
            active_duration,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for t in [self.rising, self.falling] {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::ThresholdOutOfRange(t));
            }
        }
        if self.falling >= self.rising {
            return Err(ConfigError::NoHysteresis {
                rising: self.rising,
                falling: self.falling,
            });
        }
        if self.active_duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            rising: BURST_RISING_THRESHOLD,
            falling: BURST_FALLING_THRESHOLD,
            active_duration: Duration::from_secs_f32(BURST_ACTIVE_SEC),
        }
    }
}

/// Emitted once per `Idle -> Active` transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triggered {
    pub at_sec: f64,
    pub progress: f32,
}

#[derive(Clone, Debug)]
pub struct ThresholdTrigger {
    config: TriggerConfig,
    state: TriggerState,
    entered_active_sec: f64,
    dipped_below: bool,
}

impl ThresholdTrigger {
    pub fn new(config: TriggerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: TriggerState::Idle,
            entered_active_sec: 0.0,
            dipped_below: false,
        })
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Feed one smoothed progress sample taken at `now_sec`.
    pub fn update(&mut self, progress: f32, now_sec: f64) -> Option<Triggered> {
        match self.state {
            TriggerState::Idle => {
                if progress >= self.config.rising {
                    self.state = TriggerState::Active;
                    self.entered_active_sec = now_sec;
                    self.dipped_below = false;
                    log::debug!("[trigger] idle -> active at p={progress:.3}");
                    return Some(Triggered {
                        at_sec: now_sec,
                        progress,
                    });
                }
            }
            TriggerState::Active => {
                if progress < self.config.falling {
                    self.dipped_below = true;
                }
                let elapsed = now_sec - self.entered_active_sec;
                if elapsed >= self.config.active_duration.as_secs_f64() {
                    self.state = TriggerState::Cooldown;
                    log::debug!("[trigger] active -> cooldown after {elapsed:.2}s");
                    self.try_rearm(progress);
                }
            }
            TriggerState::Cooldown => self.try_rearm(progress),
        }
        None
    }

    fn try_rearm(&mut self, progress: f32) {
        if progress < self.config.falling || self.dipped_below {
            self.state = TriggerState::Idle;
            self.dipped_below = false;
            log::debug!("[trigger] cooldown -> idle at p={progress:.3}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger() -> ThresholdTrigger {
        ThresholdTrigger::new(TriggerConfig::default()).unwrap()
    }

    #[test]
    fn rejects_missing_hysteresis_gap() {
        let d = Duration::from_secs(1);
        assert!(matches!(
            TriggerConfig::new(0.5, 0.5, d),
            Err(ConfigError::NoHysteresis { .. })
        ));
        assert!(matches!(
            TriggerConfig::new(0.4, 0.6, d),
            Err(ConfigError::NoHysteresis { .. })
        ));
        assert!(matches!(
            TriggerConfig::new(1.5, 0.2, d),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
        assert_eq!(
            TriggerConfig::new(0.5, 0.2, Duration::ZERO),
            Err(ConfigError::ZeroDuration)
        );
    }

    #[test]
    fn active_phase_is_timer_bound() {
        let mut t = trigger();
        assert!(t.update(0.6, 0.0).is_some());
        assert_eq!(t.state(), TriggerState::Active);
        // scrolling far back does not end the effect early
        assert!(t.update(0.0, 0.5).is_none());
        assert_eq!(t.state(), TriggerState::Active);
        // timer expires; the earlier dip re-arms immediately
        t.update(0.0, 2.0);
        assert_eq!(t.state(), TriggerState::Idle);
    }

    #[test]
    fn dip_during_active_refires_when_timer_ends() {
        // fire, dip below falling while the effect plays, come back and park
        let mut t = trigger();
        assert!(t.update(0.6, 0.0).is_some());
        assert!(t.update(0.3, 0.5).is_none());
        assert!(t.update(0.6, 1.0).is_none());
        assert!(t.update(0.6, 1.9).is_none());
        assert_eq!(t.state(), TriggerState::Active);
        // the frame that sees the timer expire re-arms, the next one fires
        assert!(t.update(0.6, 2.05).is_none());
        assert_eq!(t.state(), TriggerState::Idle);
        let again = t.update(0.6, 2.1).unwrap();
        assert_eq!(again.at_sec, 2.1);
        assert_eq!(t.state(), TriggerState::Active);
    }

    #[test]
    fn parked_above_rising_without_dip_never_refires() {
        let mut t = trigger();
        assert!(t.update(0.6, 0.0).is_some());
        for i in 1..40 {
            assert!(t.update(0.6, i as f64 * 0.25).is_none());
        }
        assert_eq!(t.state(), TriggerState::Cooldown);
    }

    #[test]
    fn cooldown_waits_for_falling_threshold() {
        let mut t = trigger();
        t.update(0.6, 0.0);
        t.update(0.6, 2.5);
        assert_eq!(t.state(), TriggerState::Cooldown);
        t.update(0.45, 3.0);
        assert_eq!(t.state(), TriggerState::Cooldown);
        t.update(0.41, 3.1);
        assert_eq!(t.state(), TriggerState::Idle);
    }
}
