//! Per-widget text width memo.
//!
//! Measuring text is the expensive part of a layout pass, and most passes are
//! triggered by a drag that changes nothing but position. Each slot remembers
//! the text it measured; a setter that changes the source text calls
//! `invalidate_*`, and the layout pass is the only reader.

use varwatch_core::Font;
use varwatch_text::TextMeasure;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidthSlot {
    text: String,
    width: Option<f32>,
}

impl WidthSlot {
    /// Cached width for `text`, measuring on a miss. A slot asked about
    /// different text than it holds re-measures even without invalidation.
    pub fn width(&mut self, text: &str, measure: &dyn TextMeasure, font: &Font) -> f32 {
        match self.width {
            Some(w) if self.text == text => w,
            _ => {
                let w = measure.text_width(text, font);
                self.text.clear();
                self.text.push_str(text);
                self.width = Some(w);
                w
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.width = None;
    }

    pub fn cached(&self) -> Option<f32> {
        self.width
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsCache {
    pub name: WidthSlot,
    pub value: WidthSlot,
}

impl MetricsCache {
    pub fn invalidate_name(&mut self) {
        self.name.invalidate();
    }

    pub fn invalidate_value(&mut self) {
        self.value.invalidate();
    }

    pub fn clear(&mut self) {
        self.name.invalidate();
        self.value.invalidate();
    }
}
