//! Variable, slider and list watchers drawn on the stage.
//!
//! A [`Board`] owns the watchers. Each [`Variable`] keeps its model, a width
//! memo and, once placed, a [`WidgetView`] holding the last layout pass. The
//! board paints every view into one retained `Scene`.
//!
//! ```rust
//! use std::rc::Rc;
//! use varwatch_core::{PointerEvent, take_redraw};
//! use varwatch_text::ApproxMeasure;
//! use varwatch_ui::*;
//!
//! let env = Env::new(Rc::new(ApproxMeasure::default()), Rc::new(StaticHost::new()));
//! let mut board = Board::new(env);
//!
//! let score = board.create(VariableModel::new("score", VariantKind::Simple).with_value(10));
//! let bag = board.create(
//!     VariableModel::new("bag", VariantKind::List).with_items(["apple", "pear"]),
//! );
//! assert_eq!(board.get(bag).and_then(|v| v.position()).map(|p| p.x), Some(120.0));
//! assert!(take_redraw());
//!
//! // drag the score pill 60 stage units to the right
//! board.dispatch(score, HitTarget::Body, &PointerEvent::down(320.0, 180.0)).unwrap();
//! board.dispatch(score, HitTarget::Body, &PointerEvent::moved(400.0, 180.0)).unwrap();
//! board.dispatch(score, HitTarget::Body, &PointerEvent::up(400.0, 180.0)).unwrap();
//! assert_eq!(board.get(score).and_then(|v| v.x()), Some(-170.0));
//!
//! let scene = board.paint();
//! assert!(scene.texts().any(|t| t == "apple"));
//! ```

pub mod board;
pub mod drag;
pub mod fit;
pub mod format;
pub mod host;
pub mod metrics;
pub mod model;
pub mod paint;
pub mod slider_map;
pub mod snapshot;
pub mod variable;
pub mod variant;
pub mod virtualizer;

pub use board::*;
pub use drag::*;
pub use fit::*;
pub use format::*;
pub use host::*;
pub use metrics::*;
pub use model::*;
pub use paint::*;
pub use slider_map::*;
pub use variable::*;
pub use variant::*;
pub use virtualizer::*;
