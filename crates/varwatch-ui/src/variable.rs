//! A single watcher: model state, its view and the setters that keep both in
//! step.
//!
//! Every setter re-runs the layout pass before returning, so a `Variable` is
//! never observed with a stale view.
//!
//! ```rust
//! use std::rc::Rc;
//! use varwatch_text::ApproxMeasure;
//! use varwatch_ui::*;
//!
//! let env = Env::new(Rc::new(ApproxMeasure::default()), Rc::new(StaticHost::new()));
//! let model = VariableModel::new("speed", VariantKind::Slider).with_bounds(0.0, 10.0);
//! let mut speed = Variable::new(model, env);
//! speed.generate_view(Placement::default());
//!
//! speed.set_value(42);
//! assert_eq!(speed.value(), Value::Number(10.0));
//! ```

use log::debug;
use varwatch_core::{
    Cursor, Scene, Vec2, WatchError, request_redraw, request_redraw_twice, theme,
};

use crate::drag::{DragSession, Interaction};
use crate::host::Env;
use crate::metrics::MetricsCache;
use crate::model::{Family, ListItem, Value, VariableModel, VariantKind};
use crate::paint::DrawScope;
use crate::variant::{Layout, LayoutCx, Placement, Variant};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetView {
    /// `None` while hidden.
    pub layout: Option<Layout>,
    pub cursor: Cursor,
}

pub struct Variable {
    id: String,
    name: String,
    owner: Option<String>,
    cloud: bool,
    visible: bool,
    position: Option<Vec2>,
    pub(crate) variant: Variant,
    metrics: MetricsCache,
    pub(crate) view: Option<WidgetView>,
    pub(crate) interaction: Interaction,
    pub(crate) session: Option<DragSession>,
    pub(crate) snapshot: Option<VariableModel>,
    pub(crate) env: Env,
}

impl Variable {
    pub fn new(model: VariableModel, env: Env) -> Self {
        let variant = Variant::from_model(&model);
        let position = match (model.x, model.y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        };
        Self {
            id: model
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string()),
            name: model.name,
            owner: model.owner_object_id,
            cloud: model.is_cloud_synced,
            visible: model.visible,
            position,
            variant,
            metrics: MetricsCache::default(),
            view: None,
            interaction: Interaction::empty(),
            session: None,
            snapshot: None,
            env,
        }
    }

    pub fn from_json(json: serde_json::Value, env: Env) -> Result<Self, WatchError> {
        Ok(Self::new(VariableModel::from_json(json)?, env))
    }

    /// Places the widget (auto-placing when it has no position yet), creates
    /// its view and runs the first layout pass.
    pub fn generate_view(&mut self, placement: Placement) {
        if self.position.is_none() {
            self.position = Some(self.variant.auto_position(placement));
        }
        self.view = Some(WidgetView::default());
        self.env.host.register_for_redraw(&self.id);
        debug!(
            "generated {:?} view for {} at {:?}",
            self.kind(),
            self.id,
            self.position
        );
        self.update_view();
    }

    /// Re-runs the layout pass. A no-op until the view exists.
    pub fn update_view(&mut self) {
        let label = self.label();
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if !self.visible {
            view.layout = None;
            request_redraw();
            return;
        }

        let theme = theme();
        let mut cx = LayoutCx {
            label: &label,
            metrics: &mut self.metrics,
            measure: self.env.measure.as_ref(),
            theme: &theme,
            index_base: self.env.host.index_base(),
        };
        let layout = self.variant.layout(&mut cx);
        log::trace!("layout {}: {:?}", self.id, layout);
        view.layout = Some(layout);
        request_redraw();
    }

    /// Name as displayed: prefixed with `<owner>:` when the owner resolves.
    pub fn label(&self) -> String {
        match self
            .owner
            .as_deref()
            .and_then(|id| self.env.host.object_name(id))
        {
            Some(owner) => format!("{owner}:{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Paints into `scene` at the widget's stage position. Hidden or
    /// unplaced widgets paint nothing.
    pub fn paint(&self, scene: &mut Scene) {
        let (Some(layout), Some(origin)) = (self.layout(), self.position) else {
            return;
        };
        let mut scope = DrawScope::new();
        layout.paint(&mut scope, &theme());
        scope.flush(scene, origin);
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.view.as_ref().and_then(|v| v.layout.as_ref())
    }

    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    pub fn cursor(&self) -> Cursor {
        self.view.as_ref().map(|v| v.cursor).unwrap_or_default()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn kind(&self) -> VariantKind {
        self.variant.kind()
    }

    pub fn family(&self) -> Family {
        self.kind().family()
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.metrics.invalidate_name();
        self.update_view();
        request_redraw_twice();
    }

    pub fn value(&self) -> Value {
        self.variant.value()
    }

    /// Sliders clamp into their bounds; non-numeric input lands on the minimum.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.variant.set_value(value.into());
        self.metrics.invalidate_value();
        self.update_view();
        request_redraw_twice();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.update_view();
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn x(&self) -> Option<f32> {
        self.position.map(|p| p.x)
    }

    pub fn y(&self) -> Option<f32> {
        self.position.map(|p| p.y)
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.get_or_insert(Vec2::ZERO).x = x;
        self.update_view();
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.get_or_insert(Vec2::ZERO).y = y;
        self.update_view();
    }

    pub(crate) fn set_position(&mut self, p: Vec2) {
        self.position = Some(p);
        self.update_view();
    }

    pub fn owner_object_id(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn is_cloud_synced(&self) -> bool {
        self.cloud
    }

    pub fn set_cloud_synced(&mut self, cloud: bool) {
        self.cloud = cloud;
    }

    /// List width, floored at the minimum list size. Ignored for other families.
    pub fn set_width(&mut self, width: f32) {
        if let Some(list) = self.variant.as_list_mut() {
            list.set_width(width);
            self.update_view();
        }
    }

    pub fn set_height(&mut self, height: f32) {
        if let Some(list) = self.variant.as_list_mut() {
            list.set_height(height);
            self.update_view();
        }
    }

    pub fn width(&self) -> Option<f32> {
        self.variant.as_list().map(|l| l.width)
    }

    pub fn height(&self) -> Option<f32> {
        self.variant.as_list().map(|l| l.height)
    }

    pub fn items(&self) -> &[ListItem] {
        self.variant
            .as_list()
            .map(|l| l.items.as_slice())
            .unwrap_or_default()
    }

    pub fn set_items(&mut self, items: Vec<ListItem>) {
        if let Some(list) = self.variant.as_list_mut() {
            list.items = items;
            self.update_view();
        }
    }

    pub fn push_item(&mut self, data: impl Into<String>) {
        if let Some(list) = self.variant.as_list_mut() {
            list.items.push(ListItem::new(data));
            self.update_view();
        }
    }

    /// First visible list row; 0 for other families.
    pub fn scroll_offset(&self) -> usize {
        self.variant.as_list().map_or(0, |l| l.scroll_offset)
    }

    pub fn min_value(&self) -> Option<f64> {
        self.variant.as_slider().map(|s| s.range.min)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.variant.as_slider().map(|s| s.range.max)
    }

    /// Moves the lower bound and re-clamps the current value.
    pub fn set_min_value(&mut self, min: f64) {
        if let Some(slider) = self.variant.as_slider_mut() {
            slider.range.min = min;
            let value = self.value();
            self.set_value(value);
        }
    }

    pub fn set_max_value(&mut self, max: f64) {
        if let Some(slider) = self.variant.as_slider_mut() {
            slider.range.max = max;
            let value = self.value();
            self.set_value(value);
        }
    }

    pub fn is_float_mode(&self) -> bool {
        self.variant.as_slider().is_some_and(|s| s.is_float_mode())
    }

    pub fn cached_name_width(&self) -> Option<f32> {
        self.metrics.name.cached()
    }

    pub fn cached_value_width(&self) -> Option<f32> {
        self.metrics.value.cached()
    }

    pub fn to_serializable(&self) -> VariableModel {
        let mut model = VariableModel::new(self.name.clone(), self.kind());
        model.id = Some(self.id.clone());
        model.visible = self.visible;
        model.is_cloud_synced = self.cloud;
        model.owner_object_id = self.owner.clone();
        model.x = self.x();
        model.y = self.y();
        self.variant.write_model(&mut model);
        model
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.to_serializable().to_json()
    }

    /// An unplaced copy: same model, no view, no position or visibility
    /// overrides, nothing cached.
    pub fn clone_template(&self) -> Variable {
        let mut model = self.to_serializable();
        model.x = None;
        model.y = None;
        model.visible = true;
        Variable::new(model, self.env.clone())
    }

    /// Drops the view along with any list rows and drag session.
    pub fn remove(&mut self) {
        if self.view.take().is_some() {
            debug!("removed view for {}", self.id);
            request_redraw();
        }
        self.session = None;
        self.interaction = Interaction::empty();
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut MetricsCache {
        &mut self.metrics
    }

    pub(crate) fn restore_common(&mut self, model: &VariableModel) {
        self.name = model.name.clone();
        self.visible = model.visible;
        self.cloud = model.is_cloud_synced;
        if let (Some(x), Some(y)) = (model.x, model.y) {
            self.position = Some(Vec2::new(x, y));
        }
    }
}
