//! Save and roll back a watcher around a program run.

use log::debug;
use varwatch_core::request_redraw_twice;

use crate::variable::Variable;

impl Variable {
    /// Stores a detached copy of the serializable state, replacing any
    /// earlier snapshot.
    pub fn take_snapshot(&mut self) {
        self.snapshot = Some(self.to_serializable());
        debug!("snapshot taken for {}", self.id());
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Restores the snapshot and discards it. Cloud-synced values (and list
    /// contents and size) belong to the server and stay as they are; the
    /// check uses the cloud flag at restore time.
    pub fn load_snapshot(&mut self) {
        let Some(saved) = self.snapshot.take() else {
            return;
        };
        if !self.is_cloud_synced() {
            self.variant.restore(&saved);
        }
        self.restore_common(&saved);
        self.metrics_mut().clear();
        debug!("snapshot restored for {}", self.id());
        self.update_view();
        request_redraw_twice();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Env, StaticHost};
    use crate::model::{Value, VariableModel, VariantKind};
    use crate::variant::Placement;
    use std::rc::Rc;
    use varwatch_core::Vec2;
    use varwatch_text::FixedMeasure;

    fn widget(model: VariableModel) -> Variable {
        let env = Env::new(Rc::new(FixedMeasure::new(6.0)), Rc::new(StaticHost::new()));
        let mut v = Variable::new(model, env);
        v.generate_view(Placement::default());
        v
    }

    #[test]
    fn test_round_trip_restores_value() {
        let mut v = widget(VariableModel::new("a", VariantKind::Simple).with_value(1).at(5.0, 5.0));
        v.take_snapshot();
        v.set_value(99);
        v.set_name("renamed");
        v.set_x(50.0);
        v.load_snapshot();

        assert_eq!(v.value(), Value::Number(1.0));
        assert_eq!(v.name(), "a");
        assert_eq!(v.position(), Some(Vec2::new(5.0, 5.0)));
        assert!(!v.has_snapshot());
    }

    #[test]
    fn test_cloud_value_survives_rollback() {
        let mut v = widget(
            VariableModel::new("c", VariantKind::Simple)
                .with_value(1)
                .cloud(true),
        );
        v.take_snapshot();
        v.set_value(2);
        v.set_name("other");
        v.load_snapshot();

        assert_eq!(v.value(), Value::Number(2.0));
        assert_eq!(v.name(), "c");
    }

    #[test]
    fn test_list_size_and_items_roll_back() {
        let mut v = widget(
            VariableModel::new("l", VariantKind::List)
                .with_items(["a", "b"])
                .with_size(150.0, 150.0),
        );
        v.take_snapshot();
        v.push_item("c");
        v.set_width(300.0);
        v.load_snapshot();

        assert_eq!(v.items().len(), 2);
        assert_eq!(v.width(), Some(150.0));
    }

    #[test]
    fn test_load_without_snapshot_is_noop() {
        let mut v = widget(VariableModel::new("a", VariantKind::Simple).with_value(3));
        v.load_snapshot();
        assert_eq!(v.value(), Value::Number(3.0));
    }
}
