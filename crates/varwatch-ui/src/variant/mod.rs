//! The three widget families.
//!
//! A watcher picks its family once, at construction, from
//! [`VariantKind`](crate::VariantKind); nothing ever moves it to another one.
//! Each family owns the state only it needs (a slider's bounds, a list's items
//! and scroll thumb) and implements [`WatchStrategy`].

pub mod list;
pub mod pill;
pub mod slider;

pub use list::*;
pub use pill::*;
pub use slider::*;

use varwatch_core::{Theme, Vec2};
use varwatch_text::TextMeasure;

use crate::host::IndexBase;
use crate::metrics::MetricsCache;
use crate::model::{Value, VariableModel, VariantKind};
use crate::paint::DrawScope;

/// Where a new widget sits among its family, for auto-placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub siblings: usize,
}

/// Everything a layout pass reads besides the family's own state.
pub struct LayoutCx<'a> {
    /// Display label, owner prefix included.
    pub label: &'a str,
    pub metrics: &'a mut MetricsCache,
    pub measure: &'a dyn TextMeasure,
    pub theme: &'a Theme,
    pub index_base: IndexBase,
}

pub trait WatchStrategy {
    type Layout;

    fn layout(&mut self, cx: &mut LayoutCx<'_>) -> Self::Layout;

    /// Writes the family's fields into a serializable model.
    fn write_model(&self, model: &mut VariableModel);

    /// Takes the family's value-like fields back from a saved model.
    fn restore(&mut self, model: &VariableModel);

    fn auto_position(&self, placement: Placement) -> Vec2;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    Pill(Pill),
    Slider(SliderWatch),
    List(ListWatch),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    Pill(PillLayout),
    Slider(SliderLayout),
    List(ListLayout),
}

impl Variant {
    pub fn from_model(model: &VariableModel) -> Self {
        match model.variant {
            VariantKind::Simple => Variant::Pill(Pill::new(PillStyle::Simple, model.value.clone())),
            VariantKind::Timer => Variant::Pill(Pill::new(PillStyle::Timer, model.value.clone())),
            VariantKind::Answer => Variant::Pill(Pill::new(PillStyle::Answer, model.value.clone())),
            VariantKind::Slider => Variant::Slider(SliderWatch::from_model(model)),
            VariantKind::List => Variant::List(ListWatch::from_model(model)),
        }
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Pill(p) => p.style.kind(),
            Variant::Slider(_) => VariantKind::Slider,
            Variant::List(_) => VariantKind::List,
        }
    }

    pub fn value(&self) -> Value {
        match self {
            Variant::Pill(p) => p.value.clone(),
            Variant::Slider(s) => Value::Number(s.value),
            Variant::List(l) => l.value.clone(),
        }
    }

    /// Sliders clamp; everything else stores the value as given.
    pub fn set_value(&mut self, value: Value) {
        match self {
            Variant::Pill(p) => p.value = value,
            Variant::Slider(s) => s.set_value(&value),
            Variant::List(l) => l.value = value,
        }
    }

    pub fn layout(&mut self, cx: &mut LayoutCx<'_>) -> Layout {
        match self {
            Variant::Pill(p) => Layout::Pill(p.layout(cx)),
            Variant::Slider(s) => Layout::Slider(s.layout(cx)),
            Variant::List(l) => Layout::List(l.layout(cx)),
        }
    }

    pub fn write_model(&self, model: &mut VariableModel) {
        match self {
            Variant::Pill(p) => p.write_model(model),
            Variant::Slider(s) => s.write_model(model),
            Variant::List(l) => l.write_model(model),
        }
    }

    pub fn restore(&mut self, model: &VariableModel) {
        match self {
            Variant::Pill(p) => p.restore(model),
            Variant::Slider(s) => s.restore(model),
            Variant::List(l) => l.restore(model),
        }
    }

    pub fn auto_position(&self, placement: Placement) -> Vec2 {
        match self {
            Variant::Pill(p) => p.auto_position(placement),
            Variant::Slider(s) => s.auto_position(placement),
            Variant::List(l) => l.auto_position(placement),
        }
    }

    pub fn as_slider(&self) -> Option<&SliderWatch> {
        match self {
            Variant::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut SliderWatch> {
        match self {
            Variant::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListWatch> {
        match self {
            Variant::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListWatch> {
        match self {
            Variant::List(l) => Some(l),
            _ => None,
        }
    }
}

impl Layout {
    pub fn paint(&self, scope: &mut DrawScope, theme: &Theme) {
        match self {
            Layout::Pill(l) => l.paint(scope, theme),
            Layout::Slider(l) => l.paint(scope, theme),
            Layout::List(l) => l.paint(scope, theme),
        }
    }
}

/// Stacks rows of 24 below y = -115, starting a new column after `per_column`.
fn stacked_y(index: usize, siblings: usize, per_column: usize, column_shift: f32) -> f32 {
    index as f32 * 24.0 + 20.0 - 135.0 - (siblings / per_column) as f32 * column_shift
}
