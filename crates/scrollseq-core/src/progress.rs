//! Normalized scroll progress of a tracked container.
//!
//! Progress follows the "start enters end, end exits start" convention: it is
//! 0 when the container's top edge reaches the bottom of the viewport and 1
//! when its bottom edge passes the top of the viewport. Values outside that
//! window are clamped, never extrapolated.

/// Clamp a raw progress value into \[0, 1\]. NaN maps to 0.
#[inline]
pub fn clamp_progress(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Progress for a container measured relative to the viewport.
///
/// `container_top` is the container's top edge in viewport coordinates (as
/// reported by `getBoundingClientRect().top`). Returns `None` when the
/// geometry is degenerate, which callers treat as "not observing yet".
pub fn progress_from_rect(
    container_top: f64,
    container_height: f64,
    viewport_height: f64,
) -> Option<f32> {
    if !(container_top.is_finite()
        && container_height.is_finite()
        && viewport_height.is_finite())
    {
        return None;
    }
    let travel = viewport_height + container_height.max(0.0);
    if travel <= 0.0 {
        return None;
    }
    let raw = (viewport_height - container_top) / travel;
    Some(clamp_progress(raw as f32))
}

/// Latest-sample holder between scroll events and frame callbacks.
///
/// Several scroll/resize events can land between two frames; only the most
/// recent one is kept so a frame never has to catch up on a backlog.
#[derive(Clone, Debug, Default)]
pub struct ProgressSource {
    pending: Option<f32>,
    last: Option<f32>,
}

impl ProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw sample. Overwrites any sample not yet consumed.
    pub fn observe(&mut self, raw: f32) {
        let p = clamp_progress(raw);
        self.pending = Some(p);
        self.last = Some(p);
    }

    /// Record a sample from container geometry; degenerate geometry is ignored.
    pub fn observe_rect(
        &mut self,
        container_top: f64,
        container_height: f64,
        viewport_height: f64,
    ) {
        if let Some(p) = progress_from_rect(container_top, container_height, viewport_height) {
            self.observe(p);
        }
    }

    /// Consume the pending sample, if any arrived since the last call.
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_observing(&self) -> bool {
        self.last.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_samples() {
        assert_eq!(clamp_progress(-5.0), 0.0);
        assert_eq!(clamp_progress(5.0), 1.0);
        assert_eq!(clamp_progress(f32::NAN), 0.0);
        assert_eq!(clamp_progress(0.25), 0.25);
    }

    #[test]
    fn rect_progress_follows_enter_exit_convention() {
        // container 400px tall, viewport 800px
        assert_eq!(progress_from_rect(800.0, 400.0, 800.0), Some(0.0));
        assert_eq!(progress_from_rect(-400.0, 400.0, 800.0), Some(1.0));
        let mid = progress_from_rect(200.0, 400.0, 800.0).unwrap();
        assert!((mid - 0.5).abs() < 1e-6);
        // far below / far above are clamped
        assert_eq!(progress_from_rect(5000.0, 400.0, 800.0), Some(0.0));
        assert_eq!(progress_from_rect(-5000.0, 400.0, 800.0), Some(1.0));
    }

    #[test]
    fn degenerate_geometry_is_not_observed() {
        assert_eq!(progress_from_rect(0.0, 0.0, 0.0), None);
        assert_eq!(progress_from_rect(f64::NAN, 10.0, 10.0), None);
        let mut src = ProgressSource::new();
        src.observe_rect(0.0, 0.0, 0.0);
        assert!(!src.is_observing());
        assert_eq!(src.take(), None);
    }

    #[test]
    fn intermediate_samples_are_coalesced() {
        let mut src = ProgressSource::new();
        src.observe(0.1);
        src.observe(0.2);
        src.observe(0.3);
        assert_eq!(src.take(), Some(0.3));
        assert_eq!(src.take(), None);
        assert!(src.is_observing());
    }
}
