use crate::constants::COMPACT_MAX_WIDTH_PX;

/// Motion preferences that gate smoothing and effects.
///
/// `reduced_motion` is read once at mount and treated as fixed for the
/// session; `compact` follows the viewport width on every resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPolicy {
    pub reduced_motion: bool,
    pub compact: bool,
}

impl MotionPolicy {
    pub fn resolve(reduced_motion: bool, viewport_width_px: f64) -> Self {
        Self {
            reduced_motion,
            compact: is_compact_width(viewport_width_px),
        }
    }

    /// Same preference, re-evaluated viewport.
    pub fn with_viewport_width(self, viewport_width_px: f64) -> Self {
        Self {
            compact: is_compact_width(viewport_width_px),
            ..self
        }
    }

    pub fn smoothing_enabled(&self) -> bool {
        !self.reduced_motion
    }

    pub fn effects_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Hint for consumers: snap scene values to breakpoints instead of blending.
    pub fn snap_scenes(&self) -> bool {
        self.reduced_motion
    }
}

#[inline]
pub fn is_compact_width(viewport_width_px: f64) -> bool {
    viewport_width_px < COMPACT_MAX_WIDTH_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_updates_keep_motion_preference() {
        let p = MotionPolicy::resolve(true, 1280.0);
        assert!(!p.compact);
        let p = p.with_viewport_width(375.0);
        assert!(p.compact && p.reduced_motion);
        assert!(!p.effects_enabled() && !p.smoothing_enabled() && p.snap_scenes());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_compact_width(767.9));
        assert!(!is_compact_width(768.0));
    }
}
