//! Dual-handle range slider drag engine
//!
//! Pure state machine behind the metacritic slider: which handle is held,
//! and how a pointer x coordinate turns into a new `(min, max)` selection.
//! The component owns the DOM listeners; this module never touches the DOM.

use super::types::ScoreRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    Min,
    Max,
}

/// Fixed absolute domain and step of a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDomain {
    pub min_value: f64,
    pub max_value: f64,
    pub step: f64,
}

impl SliderDomain {
    pub fn new(min_value: f64, max_value: f64, step: f64) -> Self {
        Self { min_value, max_value, step }
    }

    /// Zero-width or non-finite domains cannot be dragged
    pub fn is_degenerate(&self) -> bool {
        let span = self.max_value - self.min_value;
        !span.is_finite() || span <= 0.0
    }

    /// Position of `value` along the track, 0–100. Degenerate domains pin
    /// every value to the start of the track.
    pub fn percent_of(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let percent = (value - self.min_value) / (self.max_value - self.min_value) * 100.0;
        if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
    }

    /// Domain value at `percent` along the track, snapped to `step`
    pub fn value_at(&self, percent: f64) -> f64 {
        let raw = self.min_value + percent / 100.0 * (self.max_value - self.min_value);
        self.snap(raw)
    }

    /// Nearest step from `min_value`, or `max_value` itself when that is
    /// closer. The step grid need not divide the span.
    fn snap(&self, raw: f64) -> f64 {
        let raw = raw.max(self.min_value).min(self.max_value);
        if !(self.step > 0.0 && self.step.is_finite()) {
            return raw;
        }
        let stepped = self.min_value + ((raw - self.min_value) / self.step).round() * self.step;
        let stepped = stepped.min(self.max_value);
        if self.max_value - raw < (raw - stepped).abs() {
            self.max_value
        } else {
            stepped
        }
    }
}

impl Default for SliderDomain {
    fn default() -> Self {
        Self::new(0.0, 100.0, 1.0)
    }
}

/// Percentage of the track covered by `client_x`, clamped to 0–100.
/// `None` when the track has no usable width.
pub fn track_percent(client_x: f64, track_left: f64, track_width: f64) -> Option<f64> {
    if !track_width.is_finite() || track_width <= 0.0 || !client_x.is_finite() {
        return None;
    }
    Some(((client_x - track_left) / track_width * 100.0).clamp(0.0, 100.0))
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragEngine {
    dragging: Option<DragHandle>,
    domain: SliderDomain,
}

impl DragEngine {
    pub fn new(domain: SliderDomain) -> Self {
        Self { dragging: None, domain }
    }

    pub fn domain(&self) -> SliderDomain {
        self.domain
    }

    pub fn dragging(&self) -> Option<DragHandle> {
        self.dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Pointer-down or touch-start on a thumb
    pub fn start(&mut self, handle: DragHandle) {
        self.dragging = Some(handle);
    }

    /// Pointer-up, touch-end or touch-cancel anywhere on the page
    pub fn end(&mut self) {
        self.dragging = None;
    }

    /// Selection after moving the held handle to `client_x`.
    ///
    /// Returns `None` when nothing is held or the move cannot be mapped onto
    /// the domain. The min handle never passes the current max and vice versa.
    pub fn drag_to(
        &self,
        client_x: f64,
        track_left: f64,
        track_width: f64,
        current: ScoreRange,
    ) -> Option<ScoreRange> {
        let handle = self.dragging?;
        if self.domain.is_degenerate() {
            return None;
        }
        let percent = track_percent(client_x, track_left, track_width)?;
        let value = self.domain.value_at(percent);

        let next = match handle {
            DragHandle::Min => ScoreRange::new(value.min(current.max), current.max),
            DragHandle::Max => ScoreRange::new(current.min, value.max(current.min)),
        };
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK_LEFT: f64 = 100.0;
    const TRACK_WIDTH: f64 = 400.0;

    fn engine(handle: DragHandle) -> DragEngine {
        let mut engine = DragEngine::new(SliderDomain::default());
        engine.start(handle);
        engine
    }

    #[test]
    fn test_state_transitions() {
        let mut engine = DragEngine::new(SliderDomain::default());
        assert_eq!(engine.dragging(), None);

        engine.start(DragHandle::Max);
        assert_eq!(engine.dragging(), Some(DragHandle::Max));

        engine.end();
        assert!(!engine.is_dragging());
        assert_eq!(engine.drag_to(300.0, TRACK_LEFT, TRACK_WIDTH, ScoreRange::FULL), None);
    }

    #[test]
    fn test_min_handle_clamped_to_max() {
        let current = ScoreRange::new(20.0, 60.0);
        let next = engine(DragHandle::Min)
            .drag_to(TRACK_LEFT + TRACK_WIDTH * 0.9, TRACK_LEFT, TRACK_WIDTH, current)
            .unwrap();
        assert_eq!(next, ScoreRange::new(60.0, 60.0));
    }

    #[test]
    fn test_max_handle_clamped_to_min() {
        let current = ScoreRange::new(40.0, 80.0);
        let next = engine(DragHandle::Max)
            .drag_to(TRACK_LEFT, TRACK_LEFT, TRACK_WIDTH, current)
            .unwrap();
        assert_eq!(next, ScoreRange::new(40.0, 40.0));
    }

    #[test]
    fn test_offsets_outside_track_clamp_to_domain() {
        let next = engine(DragHandle::Min)
            .drag_to(-500.0, TRACK_LEFT, TRACK_WIDTH, ScoreRange::new(30.0, 70.0))
            .unwrap();
        assert_eq!(next.min, 0.0);

        let next = engine(DragHandle::Max)
            .drag_to(5000.0, TRACK_LEFT, TRACK_WIDTH, ScoreRange::new(30.0, 70.0))
            .unwrap();
        assert_eq!(next.max, 100.0);
    }

    #[test]
    fn test_values_snap_to_step() {
        let mut engine = DragEngine::new(SliderDomain::new(0.0, 100.0, 5.0));
        engine.start(DragHandle::Max);
        for offset in 0..=400 {
            let x = TRACK_LEFT + offset as f64;
            let next = engine.drag_to(x, TRACK_LEFT, TRACK_WIDTH, ScoreRange::new(0.0, 100.0)).unwrap();
            assert_eq!(next.max % 5.0, 0.0, "offset {} gave {}", offset, next.max);
        }
    }

    #[test]
    fn test_degenerate_domain_does_not_move() {
        let mut engine = DragEngine::new(SliderDomain::new(50.0, 50.0, 1.0));
        engine.start(DragHandle::Min);
        assert_eq!(engine.drag_to(300.0, TRACK_LEFT, TRACK_WIDTH, ScoreRange::new(50.0, 50.0)), None);
        assert_eq!(engine.domain().percent_of(50.0), 0.0);

        let infinite = SliderDomain::new(0.0, f64::INFINITY, 1.0);
        assert!(infinite.is_degenerate());
        assert_eq!(infinite.percent_of(10.0), 0.0);

        let nan = SliderDomain::new(f64::NAN, 100.0, 1.0);
        assert!(nan.is_degenerate());
    }

    #[test]
    fn test_zero_width_track_ignored() {
        assert_eq!(track_percent(120.0, 100.0, 0.0), None);
        assert_eq!(
            engine(DragHandle::Min).drag_to(120.0, TRACK_LEFT, 0.0, ScoreRange::FULL),
            None
        );
    }

    #[test]
    fn test_thumb_percent_uses_domain() {
        let domain = SliderDomain::new(50.0, 100.0, 1.0);
        assert_eq!(domain.percent_of(75.0), 50.0);
        assert_eq!(domain.percent_of(50.0), 0.0);
        assert_eq!(domain.percent_of(100.0), 100.0);
        assert_eq!(domain.percent_of(10.0), 0.0);
    }

    #[test]
    fn test_uneven_step_reaches_endpoints() {
        let domain = SliderDomain::new(0.0, 100.0, 30.0);
        assert_eq!(domain.value_at(0.0), 0.0);
        assert_eq!(domain.value_at(80.0), 90.0);
        assert_eq!(domain.value_at(97.0), 100.0);
        assert_eq!(domain.value_at(100.0), 100.0);

        let mut engine = DragEngine::new(domain);
        engine.start(DragHandle::Max);
        let next = engine.drag_to(TRACK_LEFT + TRACK_WIDTH, TRACK_LEFT, TRACK_WIDTH, ScoreRange::new(0.0, 90.0));
        assert_eq!(next, Some(ScoreRange::new(0.0, 100.0)));
    }

    #[test]
    fn test_offset_domain_stepping() {
        let domain = SliderDomain::new(10.0, 60.0, 5.0);
        assert_eq!(domain.value_at(0.0), 10.0);
        assert_eq!(domain.value_at(51.0), 35.0);
        assert_eq!(domain.value_at(100.0), 60.0);
    }
}
