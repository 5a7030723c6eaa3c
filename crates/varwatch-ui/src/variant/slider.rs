use varwatch_core::{Rect, Theme, Vec2};

use super::{LayoutCx, Placement, PillLayout, PillStyle, WatchStrategy, stacked_y};
use crate::format::slider_value_text;
use crate::model::{Value, VariableModel};
use crate::paint::DrawScope;
use crate::slider_map::{DEFAULT_MAX, DEFAULT_MIN, LEADING_MARGIN, SliderRange};

pub const MIN_SLIDER_WIDTH: f32 = 90.0;
pub const SLIDER_HEIGHT: f32 = 33.0;
pub const THUMB_RADIUS: f32 = 3.0;
const TRACK_Y: f32 = 10.0;

/// A pill with a draggable track underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderWatch {
    pub value: f64,
    pub range: SliderRange,
    /// Track length from the last layout pass.
    pub track_len: f32,
}

impl SliderWatch {
    pub fn new(value: &Value, range: SliderRange) -> Self {
        let mut slider = Self {
            value: range.min,
            range,
            track_len: MIN_SLIDER_WIDTH - 2.0 * LEADING_MARGIN,
        };
        slider.set_value(value);
        slider
    }

    pub fn from_model(model: &VariableModel) -> Self {
        let range = SliderRange {
            min: model.min_value.unwrap_or(DEFAULT_MIN),
            max: model.max_value.unwrap_or(DEFAULT_MAX),
        };
        Self::new(&model.value, range)
    }

    /// Non-numeric values land on `min`.
    pub fn set_value(&mut self, value: &Value) {
        self.value = self.range.clamp(value.as_number().unwrap_or(self.range.min));
    }

    pub fn is_float_mode(&self) -> bool {
        self.range.is_float()
    }

    pub fn thumb_position(&self) -> f32 {
        self.range.value_to_position(self.value, self.track_len)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderLayout {
    pub label: PillLayout,
    pub width: f32,
    pub track: Rect,
    pub thumb: Vec2,
}

impl SliderLayout {
    pub fn background(&self) -> Rect {
        Rect::new(0.0, -14.0, self.width, SLIDER_HEIGHT)
    }

    pub fn paint(&self, scope: &mut DrawScope, theme: &Theme) {
        scope.draw_nine_patch(self.background(), theme.pill_texture, 6.0);
        self.label.paint_label(scope, theme);
        scope.draw_rect(self.track, theme.slider_track, 0.0);
        scope.draw_circle_outlined(
            self.thumb,
            THUMB_RADIUS,
            theme.slider_thumb,
            1.0,
            theme.outline,
        );
    }
}

impl WatchStrategy for SliderWatch {
    type Layout = SliderLayout;

    fn layout(&mut self, cx: &mut LayoutCx<'_>) -> SliderLayout {
        let text = slider_value_text(self.value, self.is_float_mode());
        let label = PillLayout::measure(cx, PillStyle::Simple, text);
        let width = label.content_width().max(MIN_SLIDER_WIDTH);
        self.track_len = width - 2.0 * LEADING_MARGIN;
        SliderLayout {
            width,
            track: Rect::new(LEADING_MARGIN, TRACK_Y, self.track_len, 1.5),
            thumb: Vec2::new(self.thumb_position(), TRACK_Y + 0.5),
            label,
        }
    }

    fn write_model(&self, model: &mut VariableModel) {
        model.value = Value::Number(self.value);
        model.min_value = Some(self.range.min);
        model.max_value = Some(self.range.max);
    }

    fn restore(&mut self, model: &VariableModel) {
        self.set_value(&model.value);
    }

    fn auto_position(&self, placement: Placement) -> Vec2 {
        let s = placement.siblings;
        Vec2::new(
            -230.0 + (s / 11) as f32 * 80.0,
            stacked_y(placement.index, s, 11, 264.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::IndexBase;
    use crate::metrics::MetricsCache;
    use varwatch_core::{Scene, SceneNode, theme};
    use varwatch_text::FixedMeasure;

    fn layout(slider: &mut SliderWatch, advance: f32) -> SliderLayout {
        let measure = FixedMeasure::new(advance);
        let theme = theme();
        let mut metrics = MetricsCache::default();
        let mut cx = LayoutCx {
            label: "speed",
            metrics: &mut metrics,
            measure: &measure,
            theme: &theme,
            index_base: IndexBase::One,
        };
        slider.layout(&mut cx)
    }

    #[test]
    fn test_narrow_slider_uses_minimum_width() {
        let mut s = SliderWatch::new(&Value::Number(50.0), SliderRange::new(0.0, 100.0));
        let l = layout(&mut s, 1.0);
        assert_eq!(l.width, MIN_SLIDER_WIDTH);
        assert_eq!(l.track, Rect::new(10.0, 10.0, 70.0, 1.5));
        assert_eq!(l.thumb, Vec2::new(45.0, 10.5));
    }

    #[test]
    fn test_wide_slider_grows_track() {
        // "speed" 50 + "50" 20 + 26 padding
        let mut s = SliderWatch::new(&Value::Number(50.0), SliderRange::new(0.0, 100.0));
        let l = layout(&mut s, 10.0);
        assert_eq!(l.width, 96.0);
        assert_eq!(s.track_len, 76.0);
    }

    #[test]
    fn test_value_clamps_and_text_pads() {
        let mut s = SliderWatch::new(&Value::Number(7.0), SliderRange::new(0.0, 2.5));
        assert_eq!(s.value, 2.5);
        s.set_value(&Value::from("banana"));
        assert_eq!(s.value, 0.0);
        s.set_value(&Value::from("1.5"));
        assert_eq!(layout(&mut s, 1.0).label.value_text, "1.50");
    }

    #[test]
    fn test_thumb_has_outline() {
        let mut s = SliderWatch::new(&Value::Number(0.0), SliderRange::new(0.0, 100.0));
        let l = layout(&mut s, 1.0);
        let theme = theme();
        let mut scope = DrawScope::new();
        l.paint(&mut scope, &theme);
        let mut scene = Scene::new();
        scope.flush(&mut scene, Vec2::ZERO);

        let thumb = Rect::new(7.0, 7.5, 6.0, 6.0);
        assert!(scene.nodes.contains(&SceneNode::Ellipse {
            rect: thumb,
            color: theme.slider_thumb,
        }));
        assert!(scene.nodes.contains(&SceneNode::EllipseBorder {
            rect: thumb,
            color: theme.outline,
            width: 1.0,
        }));
    }
}
