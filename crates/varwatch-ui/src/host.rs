use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use varwatch_text::TextMeasure;

/// How list rows number themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// `1, 2, 3…` in the block editor.
    #[default]
    One,
    /// `0, 1, 2…` while the workspace shows text code.
    Zero,
}

impl IndexBase {
    pub fn label(self, index: usize) -> String {
        match self {
            IndexBase::One => (index + 1).to_string(),
            IndexBase::Zero => index.to_string(),
        }
    }
}

/// What a watcher needs from the editor that owns it.
pub trait Host {
    /// Display name of a sprite/object, if it still exists.
    fn object_name(&self, object_id: &str) -> Option<String>;

    /// The editable workspace is showing (as opposed to a player/minimized view).
    fn is_workspace(&self) -> bool {
        true
    }

    /// The program is running.
    fn is_running(&self) -> bool {
        false
    }

    fn index_base(&self) -> IndexBase {
        IndexBase::One
    }

    /// Called once when a watcher generates its view.
    fn register_for_redraw(&self, _widget_id: &str) {}
}

/// Everything a watcher borrows from its surroundings.
#[derive(Clone)]
pub struct Env {
    pub measure: Rc<dyn TextMeasure>,
    pub host: Rc<dyn Host>,
}

impl Env {
    pub fn new(measure: Rc<dyn TextMeasure>, host: Rc<dyn Host>) -> Self {
        Self { measure, host }
    }
}

/// In-memory [`Host`] for headless boards and tests.
#[derive(Default)]
pub struct StaticHost {
    objects: RefCell<HashMap<String, String>>,
    presenting: Cell<bool>,
    running: Cell<bool>,
    index_base: Cell<IndexBase>,
    registered: RefCell<Vec<String>>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.objects.borrow_mut().insert(id.into(), name.into());
        self
    }

    pub fn rename_object(&self, id: &str, name: impl Into<String>) {
        self.objects.borrow_mut().insert(id.to_string(), name.into());
    }

    /// Switches between the editable workspace and a presentation view.
    pub fn set_workspace(&self, on: bool) {
        self.presenting.set(!on);
    }

    pub fn set_running(&self, on: bool) {
        self.running.set(on);
    }

    pub fn set_index_base(&self, base: IndexBase) {
        self.index_base.set(base);
    }

    pub fn registered(&self) -> Vec<String> {
        self.registered.borrow().clone()
    }
}

impl Host for StaticHost {
    fn object_name(&self, object_id: &str) -> Option<String> {
        self.objects.borrow().get(object_id).cloned()
    }

    fn is_workspace(&self) -> bool {
        !self.presenting.get()
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }

    fn index_base(&self) -> IndexBase {
        self.index_base.get()
    }

    fn register_for_redraw(&self, widget_id: &str) {
        self.registered.borrow_mut().push(widget_id.to_string());
    }
}
