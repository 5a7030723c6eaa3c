//! Value and thumb position for slider watchers.
//!
//! Positions are measured from the widget's left edge, so they include the
//! [`LEADING_MARGIN`] in front of the track.

/// Gap between the widget edge and the start of the track.
pub const LEADING_MARGIN: f32 = 10.0;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl SliderRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Float mode: either bound has a fractional part. Always derived.
    pub fn is_float(&self) -> bool {
        self.min.fract() != 0.0 || self.max.fract() != 0.0
    }

    /// Tolerates inverted bounds (`min` wins), where `f64::clamp` would panic.
    pub fn clamp(&self, v: f64) -> f64 {
        if v < self.min {
            self.min
        } else if v > self.max {
            self.max
        } else {
            v
        }
    }

    fn span(&self) -> f64 {
        (self.max - self.min).abs()
    }

    pub fn value_to_position(&self, value: f64, track_len: f32) -> f32 {
        let span = self.span();
        let ratio = if span == 0.0 {
            0.0
        } else {
            ((self.clamp(value) - self.min).abs() / span).min(1.0)
        };
        (track_len as f64 * ratio) as f32 + LEADING_MARGIN
    }

    pub fn position_to_value(&self, position: f32, track_len: f32) -> f64 {
        let ratio = if track_len > 0.0 {
            ((position - LEADING_MARGIN).clamp(0.0, track_len) / track_len) as f64
        } else {
            0.0
        };
        let raw = self.min + self.span() * ratio;
        let mut v = self.clamp(round_to_hundredths(raw));
        if !self.is_float() {
            v = v.round();
        }
        self.clamp(v)
    }
}

fn round_to_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midpoint_scenario() {
        let r = SliderRange::new(0.0, 100.0);
        assert_eq!(r.value_to_position(50.0, 100.0), 60.0);
    }

    #[test]
    fn test_boundaries_are_exact() {
        let r = SliderRange::new(-20.0, 30.0);
        assert_eq!(r.value_to_position(-20.0, 70.0), LEADING_MARGIN);
        assert_eq!(r.value_to_position(30.0, 70.0), LEADING_MARGIN + 70.0);
        assert_eq!(r.position_to_value(LEADING_MARGIN, 70.0), -20.0);
        assert_eq!(r.position_to_value(LEADING_MARGIN + 70.0, 70.0), 30.0);
    }

    #[test]
    fn test_degenerate_range() {
        let r = SliderRange::new(5.0, 5.0);
        assert_eq!(r.value_to_position(5.0, 70.0), LEADING_MARGIN);
        assert_eq!(r.position_to_value(40.0, 70.0), 5.0);
    }

    #[test]
    fn test_positions_outside_track_clamp() {
        let r = SliderRange::new(0.0, 10.0);
        assert_eq!(r.position_to_value(-100.0, 70.0), 0.0);
        assert_eq!(r.position_to_value(1000.0, 70.0), 10.0);
    }

    #[test]
    fn test_integer_mode_rounds() {
        let r = SliderRange::new(0.0, 10.0);
        assert!(!r.is_float());
        // 0.33 of the way
        let v = r.position_to_value(LEADING_MARGIN + 33.0, 100.0);
        assert_eq!(v, 3.0);
    }

    #[test]
    fn test_float_mode_keeps_hundredths() {
        let r = SliderRange::new(0.0, 1.5);
        assert!(r.is_float());
        let v = r.position_to_value(LEADING_MARGIN + 50.0, 100.0);
        assert_eq!(v, 0.75);
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let r = SliderRange::new(10.0, 0.0);
        assert_eq!(r.clamp(5.0), 10.0);
        let _ = r.position_to_value(30.0, 70.0);
    }

    proptest! {
        #[test]
        fn prop_float_round_trip(
            min in -1000.0f64..1000.0,
            span in 0.5f64..1000.0,
            v in -3000.0f64..3000.0,
            track in 70.0f32..300.0,
        ) {
            let r = SliderRange::new(min, min + span + 0.25);
            prop_assume!(r.is_float());
            let back = r.position_to_value(r.value_to_position(v, track), track);
            prop_assert!((back - r.clamp(v)).abs() <= 0.01, "v={v} back={back}");
        }

        #[test]
        fn prop_integer_round_trip(
            min in -500i32..500,
            span in 1i32..500,
            v in -2000i32..2000,
            track in 70.0f32..300.0,
        ) {
            let r = SliderRange::new(min as f64, (min + span) as f64);
            let back = r.position_to_value(r.value_to_position(v as f64, track), track);
            prop_assert!((back - r.clamp(v as f64)).abs() <= 0.01, "v={v} back={back}");
        }
    }
}
