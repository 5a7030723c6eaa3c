//! Pointer handling: moving widgets, resizing lists, adjusting sliders and
//! scrolling list rows.
//!
//! Hit-testing happens in the renderer; events arrive tagged with the part of
//! the widget they landed on. A widget tracks one pointer at a time.

use bitflags::bitflags;
use log::warn;
use varwatch_core::{Cursor, PointerEvent, PointerEventKind, PointerId, STAGE, Vec2};

use crate::variable::Variable;
use crate::virtualizer::clamp_thumb;

bitflags! {
    /// What the active pointer is doing to the widget.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Interaction: u8 {
        const DRAGGING = 1 << 0;
        const RESIZING = 1 << 1;
        const ADJUSTING = 1 << 2;
        const SCROLLING = 1 << 3;
    }
}

/// Interactions owned by a child part; the body stays put while any is active.
const CHILD_INTERACTIONS: Interaction = Interaction::RESIZING
    .union(Interaction::ADJUSTING)
    .union(Interaction::SCROLLING);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Body,
    ResizeHandle,
    SliderThumb,
    ScrollThumb,
}

impl HitTarget {
    pub fn cursor(self) -> Cursor {
        match self {
            HitTarget::Body => Cursor::Move,
            HitTarget::ResizeHandle => Cursor::NwseResize,
            HitTarget::SliderThumb | HitTarget::ScrollThumb => Cursor::Pointer,
        }
    }

    fn interaction(self) -> Interaction {
        match self {
            HitTarget::Body => Interaction::DRAGGING,
            HitTarget::ResizeHandle => Interaction::RESIZING,
            HitTarget::SliderThumb => Interaction::ADJUSTING,
            HitTarget::ScrollThumb => Interaction::SCROLLING,
        }
    }
}

/// Whether an event should bubble from a child part to the widget body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub pointer: PointerId,
    pub target: HitTarget,
    /// Whatever is being dragged minus the pointer's stage position at the start.
    pub grab: Vec2,
    /// Last thumb offset reported to the slider mapper.
    pub last_offset: Option<f32>,
}

impl Variable {
    pub fn handle_pointer(&mut self, target: HitTarget, event: &PointerEvent) -> Propagation {
        let p = STAGE.apply_to_point(event.position);
        match event.event {
            PointerEventKind::Down => self.pointer_down(target, event.id, p),
            PointerEventKind::Move => self.pointer_move(event.id, p),
            PointerEventKind::Up | PointerEventKind::Cancel => self.pointer_up(event.id),
            PointerEventKind::Enter => {
                self.set_cursor(target.cursor());
                Propagation::Stop
            }
            PointerEventKind::Leave => {
                self.set_cursor(Cursor::Default);
                Propagation::Stop
            }
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if let Some(view) = self.view.as_mut() {
            view.cursor = cursor;
        }
    }

    fn begin(&mut self, pointer: PointerId, target: HitTarget, grab: Vec2) {
        self.interaction.insert(target.interaction());
        self.session = Some(DragSession {
            pointer,
            target,
            grab,
            last_offset: None,
        });
    }

    fn pointer_down(&mut self, target: HitTarget, pointer: PointerId, p: Vec2) -> Propagation {
        if self.session.is_some() {
            return Propagation::Stop;
        }
        let host = self.env.host.clone();
        match target {
            HitTarget::Body => {
                if !host.is_workspace() || self.interaction.intersects(CHILD_INTERACTIONS) {
                    return Propagation::Continue;
                }
                let origin = self.position().unwrap_or(Vec2::ZERO);
                self.begin(pointer, target, origin - p);
                Propagation::Stop
            }
            HitTarget::ResizeHandle => {
                let Some(list) = self.variant.as_list() else {
                    return Propagation::Continue;
                };
                if !host.is_workspace() {
                    return Propagation::Continue;
                }
                let size = Vec2::new(list.width, list.height);
                self.begin(pointer, target, size - p);
                // The body sees the session and leaves the widget where it is.
                Propagation::Continue
            }
            HitTarget::SliderThumb => {
                if self.variant.as_slider().is_none() || !host.is_running() {
                    return Propagation::Continue;
                }
                self.begin(pointer, target, Vec2::ZERO);
                Propagation::Stop
            }
            HitTarget::ScrollThumb => {
                let Some(list) = self.variant.as_list() else {
                    return Propagation::Continue;
                };
                let grab = Vec2::new(0.0, list.scroll_thumb_y - p.y);
                self.begin(pointer, target, grab);
                Propagation::Stop
            }
        }
    }

    fn pointer_move(&mut self, pointer: PointerId, p: Vec2) -> Propagation {
        let Some(session) = self.session.clone() else {
            return Propagation::Continue;
        };
        if session.pointer != pointer {
            warn!(
                "{}: ignoring move from {:?} during a drag by {:?}",
                self.id(),
                pointer,
                session.pointer
            );
            return Propagation::Stop;
        }

        match session.target {
            HitTarget::Body => self.set_position(p + session.grab),
            HitTarget::ResizeHandle => {
                let size = p + session.grab;
                if let Some(list) = self.variant.as_list_mut() {
                    list.set_width(size.x);
                    list.set_height(size.y);
                }
                self.update_view();
            }
            HitTarget::SliderThumb => {
                let offset = p.x - self.position().map_or(0.0, |o| o.x);
                if session.last_offset == Some(offset) {
                    return Propagation::Stop;
                }
                if let Some(s) = self.session.as_mut() {
                    s.last_offset = Some(offset);
                }
                if let Some(value) = self
                    .variant
                    .as_slider()
                    .map(|s| s.range.position_to_value(offset, s.track_len))
                {
                    self.set_value(value);
                }
            }
            HitTarget::ScrollThumb => {
                if let Some(list) = self.variant.as_list_mut() {
                    list.scroll_thumb_y = clamp_thumb(p.y + session.grab.y, list.height);
                }
                self.update_view();
            }
        }
        Propagation::Stop
    }

    fn pointer_up(&mut self, pointer: PointerId) -> Propagation {
        let Some(session) = self.session.as_ref() else {
            return Propagation::Continue;
        };
        if session.pointer != pointer {
            warn!(
                "{}: ignoring release from {:?} during a drag by {:?}",
                self.id(),
                pointer,
                session.pointer
            );
            return Propagation::Stop;
        }
        let target = session.target;
        self.interaction.remove(target.interaction());
        self.session = None;
        Propagation::Stop
    }
}
