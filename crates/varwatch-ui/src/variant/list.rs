use varwatch_core::{Rect, Theme, Vec2};

use super::{LayoutCx, Placement, WatchStrategy, stacked_y};
use crate::fit::{CellFitter, fit_title};
use crate::model::{ListItem, Value, VariableModel};
use crate::paint::DrawScope;
use crate::virtualizer::{
    DEFAULT_LIST_HEIGHT, DEFAULT_LIST_WIDTH, ListWindow, MIN_LIST_SIZE, PADDING, ROW_TOP,
    THUMB_HEIGHT, THUMB_WIDTH, cell_width,
};

const TITLE_Y: f32 = 6.0;
const INDEX_COLUMN: f32 = 20.0;
const VALUE_BOX_HEIGHT: f32 = 17.0;

/// A resizable panel of rows with its own scrollbar.
#[derive(Clone, Debug, PartialEq)]
pub struct ListWatch {
    pub items: Vec<ListItem>,
    /// Kept for the serialized shape; rows come from `items`.
    pub value: Value,
    pub width: f32,
    pub height: f32,
    pub scroll_thumb_y: f32,
    /// First visible row, as of the last layout pass.
    pub scroll_offset: usize,
}

impl ListWatch {
    pub fn from_model(model: &VariableModel) -> Self {
        Self {
            items: model.items.clone().unwrap_or_default(),
            value: model.value.clone(),
            width: model.width.unwrap_or(DEFAULT_LIST_WIDTH).max(MIN_LIST_SIZE),
            height: model.height.unwrap_or(DEFAULT_LIST_HEIGHT).max(MIN_LIST_SIZE),
            scroll_thumb_y: ROW_TOP,
            scroll_offset: 0,
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(MIN_LIST_SIZE);
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(MIN_LIST_SIZE);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub label: String,
    pub text: String,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListLayout {
    pub title: String,
    pub title_width: f32,
    pub width: f32,
    pub height: f32,
    pub window: ListWindow,
    pub cell_width: f32,
    pub rows: Vec<RowView>,
}

impl ListLayout {
    pub fn scrollbar(&self) -> Option<Rect> {
        self.window.overflow.then(|| {
            Rect::new(
                self.width - 12.0,
                self.window.thumb_y,
                THUMB_WIDTH,
                THUMB_HEIGHT,
            )
        })
    }

    pub fn resize_anchor(&self) -> Vec2 {
        Vec2::new(self.width - 2.0, self.height - 2.0)
    }

    pub fn paint(&self, scope: &mut DrawScope, theme: &Theme) {
        let size = theme.font.px;
        scope.draw_nine_patch(
            Rect::new(0.0, 0.0, self.width, self.height),
            theme.list_texture,
            2.0,
        );
        scope.draw_text(
            self.title.clone(),
            Vec2::new((self.width - self.title_width) / 2.0, TITLE_Y),
            theme.label,
            size,
        );

        for row in &self.rows {
            scope.draw_text(
                row.label.clone(),
                Vec2::new(PADDING, row.y + 1.0),
                theme.row_index,
                size,
            );
            scope.draw_nine_patch(
                Rect::new(
                    PADDING + INDEX_COLUMN,
                    row.y - 2.0,
                    self.cell_width,
                    VALUE_BOX_HEIGHT,
                ),
                theme.list_value_texture,
                3.0,
            );
            scope.draw_text(
                row.text.clone(),
                Vec2::new(PADDING + INDEX_COLUMN + 4.0, row.y + 1.0),
                theme.row_value,
                size,
            );
        }

        if let Some(thumb) = self.scrollbar() {
            scope.draw_rect(thumb, theme.scrollbar_thumb, THUMB_WIDTH / 2.0);
        }
        scope.draw_sprite(self.resize_anchor(), theme.resize_handle_sprite);
    }
}

impl WatchStrategy for ListWatch {
    type Layout = ListLayout;

    fn layout(&mut self, cx: &mut LayoutCx<'_>) -> ListLayout {
        let theme = cx.theme;
        let measure = cx.measure;
        let font = &theme.font;

        let window = ListWindow::compute(self.items.len(), self.height, self.scroll_thumb_y);
        self.scroll_thumb_y = window.thumb_y;
        self.scroll_offset = window.offset;

        let full_width = cx.metrics.name.width(cx.label, measure, font);
        let (title, title_width) = if full_width <= self.width {
            (cx.label.to_string(), full_width)
        } else {
            let title = fit_title(cx.label, self.width, measure, font);
            let w = measure.text_width(&title, font);
            (title, w)
        };

        let cell_width = cell_width(self.width, window.overflow);
        let mut fitter = CellFitter::new(measure, font, cell_width);
        let rows = window
            .rows(self.items.len())
            .map(|i| RowView {
                index: i,
                label: cx.index_base.label(i),
                text: fitter.fit(&self.items[i].data),
                y: window.row_y(i),
            })
            .collect();

        ListLayout {
            title,
            title_width,
            width: self.width,
            height: self.height,
            window,
            cell_width,
            rows,
        }
    }

    fn write_model(&self, model: &mut VariableModel) {
        model.value = self.value.clone();
        model.width = Some(self.width);
        model.height = Some(self.height);
        model.items = Some(self.items.clone());
    }

    fn restore(&mut self, model: &VariableModel) {
        self.value = model.value.clone();
        if let Some(items) = &model.items {
            self.items = items.clone();
        }
        if let Some(w) = model.width {
            self.set_width(w);
        }
        if let Some(h) = model.height {
            self.set_height(h);
        }
    }

    fn auto_position(&self, placement: Placement) -> Vec2 {
        let s = placement.siblings;
        Vec2::new(
            120.0 - ((s % 24) / 6) as f32 * 110.0,
            stacked_y(placement.index, s, 6, 145.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::IndexBase;
    use crate::metrics::MetricsCache;
    use crate::model::VariantKind;
    use varwatch_core::theme;
    use varwatch_text::FixedMeasure;

    fn list(n: usize, height: f32) -> ListWatch {
        let model = VariableModel::new("bag", VariantKind::List)
            .with_items((0..n).map(|i| format!("item {i}")))
            .with_size(200.0, height);
        ListWatch::from_model(&model)
    }

    fn layout(list: &mut ListWatch, base: IndexBase) -> ListLayout {
        let measure = FixedMeasure::new(6.0);
        let theme = theme();
        let mut metrics = MetricsCache::default();
        let mut cx = LayoutCx {
            label: "Sprite1:bag",
            metrics: &mut metrics,
            measure: &measure,
            theme: &theme,
            index_base: base,
        };
        list.layout(&mut cx)
    }

    #[test]
    fn test_defaults_and_floor() {
        let l = ListWatch::from_model(&VariableModel::new("l", VariantKind::List));
        assert_eq!((l.width, l.height), (100.0, 120.0));
        let l = ListWatch::from_model(
            &VariableModel::new("l", VariantKind::List).with_size(20.0, 99.0),
        );
        assert_eq!((l.width, l.height), (100.0, 100.0));
    }

    #[test]
    fn test_rows_follow_thumb() {
        let mut l = list(10, 140.0);
        let out = layout(&mut l, IndexBase::One);
        assert_eq!(out.rows.len(), 6);
        assert_eq!(out.rows[0].label, "1");
        assert!(out.scrollbar().is_some());

        l.scroll_thumb_y = 1000.0;
        let out = layout(&mut l, IndexBase::Zero);
        assert_eq!(l.scroll_offset, 4);
        assert_eq!(l.scroll_thumb_y, 100.0);
        assert_eq!(out.rows[0].label, "4");
        assert_eq!(out.rows[0].text, "item 4");
        assert_eq!(out.rows[0].y, ROW_TOP);
    }

    #[test]
    fn test_title_centered_and_fitted() {
        let mut l = list(0, 120.0);
        let out = layout(&mut l, IndexBase::One);
        assert_eq!(out.title, "Sprite1:bag");
        assert_eq!(out.title_width, 66.0);
        assert!(out.scrollbar().is_none());

        l.set_width(60.0);
        assert_eq!(l.width, 100.0);

        // below the floor only through direct field access
        l.width = 50.0;
        let out = layout(&mut l, IndexBase::One);
        assert!(out.title.ends_with(".."));
        assert!(out.title_width <= 50.0);
    }
}
