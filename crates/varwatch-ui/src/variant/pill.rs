use varwatch_core::{Rect, Theme, Vec2};

use super::{LayoutCx, Placement, WatchStrategy, stacked_y};
use crate::format::pill_value_text;
use crate::model::{Value, VariableModel, VariantKind};
use crate::paint::DrawScope;

pub const NAME_POS: Vec2 = Vec2::new(4.0, -10.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillStyle {
    Simple,
    Timer,
    Answer,
}

impl PillStyle {
    pub fn kind(self) -> VariantKind {
        match self {
            PillStyle::Simple => VariantKind::Simple,
            PillStyle::Timer => VariantKind::Timer,
            PillStyle::Answer => VariantKind::Answer,
        }
    }

    pub fn decimals(self) -> usize {
        match self {
            PillStyle::Answer | PillStyle::Timer => 1,
            PillStyle::Simple => 2,
        }
    }
}

/// Label and value, side by side on a rounded background.
#[derive(Clone, Debug, PartialEq)]
pub struct Pill {
    pub style: PillStyle,
    pub value: Value,
}

impl Pill {
    pub fn new(style: PillStyle, value: Value) -> Self {
        Self { style, value }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PillLayout {
    pub style: PillStyle,
    pub name: String,
    pub value_text: String,
    pub name_width: f32,
    pub value_width: f32,
}

impl PillLayout {
    /// Measures through the widget's width memo.
    pub(crate) fn measure(cx: &mut LayoutCx<'_>, style: PillStyle, value_text: String) -> Self {
        let theme = cx.theme;
        let font = &theme.font;
        let name_width = cx.metrics.name.width(cx.label, cx.measure, font);
        let value_width = cx.metrics.value.width(&value_text, cx.measure, font);
        Self {
            style,
            name: cx.label.to_string(),
            value_text,
            name_width,
            value_width,
        }
    }

    /// Name, value and the padding around both.
    pub fn content_width(&self) -> f32 {
        self.name_width + self.value_width + 26.0
    }

    pub fn background(&self) -> Rect {
        Rect::new(0.0, -14.0, self.content_width(), 20.0)
    }

    pub fn badge(&self) -> Rect {
        Rect::new(self.name_width + 7.0, -11.0, self.value_width + 15.0, 14.0)
    }

    pub fn value_pos(&self) -> Vec2 {
        Vec2::new(self.name_width + 14.0, -10.0)
    }

    pub fn paint(&self, scope: &mut DrawScope, theme: &Theme) {
        match self.style {
            PillStyle::Timer => scope.draw_rect_outlined(
                self.background(),
                theme.timer_background,
                4.0,
                1.0,
                theme.outline,
            ),
            PillStyle::Simple | PillStyle::Answer => {
                scope.draw_nine_patch(self.background(), theme.pill_texture, 6.0)
            }
        }
        self.paint_label(scope, theme);
    }

    /// Badge and both texts, without the background.
    pub(crate) fn paint_label(&self, scope: &mut DrawScope, theme: &Theme) {
        match self.style {
            PillStyle::Simple => scope.draw_rect(self.badge(), theme.variable_badge, 7.0),
            PillStyle::Answer => scope.draw_rect(self.badge(), theme.answer_badge, 7.0),
            PillStyle::Timer => scope.draw_rect_outlined(
                self.badge(),
                theme.timer_badge,
                7.0,
                1.0,
                theme.timer_badge_stroke,
            ),
        }
        let size = theme.font.px;
        scope.draw_text(self.name.clone(), NAME_POS, theme.label, size);
        scope.draw_text(self.value_text.clone(), self.value_pos(), theme.value, size);
    }
}

impl WatchStrategy for Pill {
    type Layout = PillLayout;

    fn layout(&mut self, cx: &mut LayoutCx<'_>) -> PillLayout {
        let text = pill_value_text(&self.value, self.style.decimals());
        PillLayout::measure(cx, self.style, text)
    }

    fn write_model(&self, model: &mut VariableModel) {
        model.value = self.value.clone();
    }

    fn restore(&mut self, model: &VariableModel) {
        self.value = model.value.clone();
    }

    fn auto_position(&self, placement: Placement) -> Vec2 {
        let s = placement.siblings;
        Vec2::new(
            -230.0 + ((s % 66) / 11) as f32 * 80.0,
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

    fn layout(pill: &mut Pill, label: &str) -> PillLayout {
        let measure = FixedMeasure::new(5.0);
        let theme = theme();
        let mut metrics = MetricsCache::default();
        let mut cx = LayoutCx {
            label,
            metrics: &mut metrics,
            measure: &measure,
            theme: &theme,
            index_base: IndexBase::One,
        };
        pill.layout(&mut cx)
    }

    #[test]
    fn test_pill_geometry() {
        let mut pill = Pill::new(PillStyle::Simple, Value::Number(42.0));
        let l = layout(&mut pill, "score");
        // "score" is 25 wide, "42" is 10 wide
        assert_eq!(l.value_text, "42");
        assert_eq!(l.background(), Rect::new(0.0, -14.0, 61.0, 20.0));
        assert_eq!(l.badge(), Rect::new(32.0, -11.0, 25.0, 14.0));
        assert_eq!(l.value_pos(), Vec2::new(39.0, -10.0));
    }

    #[test]
    fn test_answer_and_timer_use_one_decimal() {
        let mut pill = Pill::new(PillStyle::Answer, Value::Number(2.26));
        assert_eq!(layout(&mut pill, "answer").value_text, "2.3");
        let mut pill = Pill::new(PillStyle::Timer, Value::Number(2.26));
        assert_eq!(layout(&mut pill, "timer").value_text, "2.3");
        let mut pill = Pill::new(PillStyle::Simple, Value::Number(2.26));
        assert_eq!(layout(&mut pill, "score").value_text, "2.26");
    }

    #[test]
    fn test_timer_paints_outlined_background() {
        let mut pill = Pill::new(PillStyle::Timer, Value::Number(1.0));
        let l = layout(&mut pill, "timer");
        let theme = theme();
        let mut scope = DrawScope::new();
        l.paint(&mut scope, &theme);
        let mut scene = Scene::new();
        scope.flush(&mut scene, Vec2::ZERO);

        assert!(matches!(
            scene.nodes[0],
            SceneNode::Rect { radius: 4.0, color, .. } if color == theme.timer_background
        ));
        let texts: Vec<_> = scene.texts().collect();
        assert_eq!(texts, ["timer", "1"]);
    }

    #[test]
    fn test_auto_position_wraps_columns() {
        let pill = Pill::new(PillStyle::Simple, Value::default());
        let first = pill.auto_position(Placement { index: 0, siblings: 0 });
        assert_eq!(first, Vec2::new(-230.0, -115.0));
        let twelfth = pill.auto_position(Placement { index: 11, siblings: 11 });
        assert_eq!(twelfth, Vec2::new(-150.0, -115.0));
    }
}
