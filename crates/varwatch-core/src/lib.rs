//! # Core types for stage watchers
//!
//! `varwatch-core` holds the small, dependency-light pieces every other crate
//! in the workspace shares:
//!
//! - `Vec2`, `Rect` and `Transform`, plus the fixed [`STAGE`]
//!   transform that maps raw pointer coordinates into model space.
//! - Pointer input (`PointerEvent`) and hover `Cursor` hints.
//! - The retained `Scene` a widget paints into. An external renderer walks the
//!   nodes; nothing here touches a GPU.
//! - `Theme` and `Font`, provided as composition locals (`theme()`,
//!   `with_theme`).
//! - The coalesced "needs redraw" flag (`request_redraw`, `take_redraw`).
//! - `WatchError`.
//!
//! ```rust
//! use varwatch_core::*;
//!
//! // Pointer (320, 180) is the stage origin in model space.
//! let p = STAGE.apply_to_point(Vec2 { x: 320.0, y: 180.0 });
//! assert_eq!(p, Vec2 { x: 0.0, y: 0.0 });
//!
//! request_redraw();
//! request_redraw();
//! assert!(take_redraw());
//! assert!(!take_redraw());
//! ```

pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod input;
pub mod locals;
pub mod redraw;
pub mod view;

pub use color::*;
pub use error::*;
pub use font::*;
pub use geometry::*;
pub use input::*;
pub use locals::*;
pub use redraw::*;
pub use view::*;
