//! The owner of every watcher on a stage.
//!
//! Widgets live in a slot map so keys stay valid across removals. The board
//! counts siblings for auto-placement, paints everything into one `Scene`,
//! and routes pointer events, bubbling from a child part to the body.

use log::{debug, warn};
use slotmap::SlotMap;
use varwatch_core::{PointerEvent, Scene, WatchError};

use crate::drag::{HitTarget, Propagation};
use crate::host::Env;
use crate::model::{Family, VariableModel};
use crate::variable::Variable;
use crate::variant::Placement;

slotmap::new_key_type! {
    pub struct WidgetKey;
}

pub struct Board {
    widgets: SlotMap<WidgetKey, Variable>,
    env: Env,
}

impl Board {
    pub fn new(env: Env) -> Self {
        Self {
            widgets: SlotMap::with_key(),
            env,
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Adds a watcher and generates its view, placing it after its siblings.
    pub fn create(&mut self, model: VariableModel) -> WidgetKey {
        let siblings = self.count(model.variant.family());
        let variable = Variable::new(model, self.env.clone());
        let key = self.widgets.insert(variable);
        if let Some(v) = self.widgets.get_mut(key) {
            v.generate_view(Placement {
                index: siblings,
                siblings,
            });
        }
        key
    }

    pub fn create_from_json(&mut self, json: serde_json::Value) -> Result<WidgetKey, WatchError> {
        let model = VariableModel::from_json(json)?;
        Ok(self.create(model))
    }

    /// Creates one watcher per entry of a JSON array of models.
    pub fn load_json(&mut self, json: serde_json::Value) -> Result<Vec<WidgetKey>, WatchError> {
        let entries: Vec<serde_json::Value> = serde_json::from_value(json)?;
        entries
            .into_iter()
            .map(|e| self.create_from_json(e))
            .collect()
    }

    pub fn load(&mut self, models: impl IntoIterator<Item = VariableModel>) -> Vec<WidgetKey> {
        models.into_iter().map(|m| self.create(m)).collect()
    }

    pub fn get(&self, key: WidgetKey) -> Option<&Variable> {
        self.widgets.get(key)
    }

    pub fn get_mut(&mut self, key: WidgetKey) -> Option<&mut Variable> {
        self.widgets.get_mut(key)
    }

    pub fn find(&self, id: &str) -> Option<WidgetKey> {
        self.widgets
            .iter()
            .find_map(|(k, v)| (v.id() == id).then_some(k))
    }

    pub fn remove(&mut self, key: WidgetKey) -> Option<Variable> {
        let mut removed = self.widgets.remove(key)?;
        removed.remove();
        debug!("removed widget {}", removed.id());
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn count(&self, family: Family) -> usize {
        self.widgets
            .values()
            .filter(|v| v.family() == family)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WidgetKey, &Variable)> {
        self.widgets.iter()
    }

    /// Re-lays out every widget, e.g. after the host renamed an object or
    /// switched the row numbering.
    pub fn update_all(&mut self) {
        for v in self.widgets.values_mut() {
            v.update_view();
        }
    }

    pub fn paint(&self) -> Scene {
        let mut scene = Scene::new();
        for v in self.widgets.values() {
            v.paint(&mut scene);
        }
        scene
    }

    pub fn to_serializable(&self) -> Vec<VariableModel> {
        self.widgets.values().map(Variable::to_serializable).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.widgets.values().map(Variable::to_json).collect())
    }

    pub fn take_snapshots(&mut self) {
        for v in self.widgets.values_mut() {
            v.take_snapshot();
        }
    }

    pub fn load_snapshots(&mut self) {
        for v in self.widgets.values_mut() {
            v.load_snapshot();
        }
    }

    /// Delivers a pointer event. Events a child part passes on go to the
    /// widget body next.
    pub fn dispatch(
        &mut self,
        key: WidgetKey,
        target: HitTarget,
        event: &PointerEvent,
    ) -> Result<Propagation, WatchError> {
        let Some(widget) = self.widgets.get_mut(key) else {
            warn!("pointer event for unknown widget {key:?}");
            return Err(WatchError::UnknownWidget(format!("{key:?}")));
        };
        let result = widget.handle_pointer(target, event);
        if result == Propagation::Continue && target != HitTarget::Body {
            return Ok(widget.handle_pointer(HitTarget::Body, event));
        }
        Ok(result)
    }
}
