use crate::{Color, Rect, Vec2};

/// Retained output of a paint pass. The renderer owns textures, glyphs and
/// hit-testing; it only ever sees these nodes.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Ellipse {
        rect: Rect,
        color: Color,
    },
    EllipseBorder {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    /// Nine-slice panel from a named texture. Insets are left, top, right, bottom.
    NinePatch {
        rect: Rect,
        texture: &'static str,
        insets: [f32; 4],
    },
    /// Sprite whose bottom-right corner sits at `anchor`.
    Sprite {
        anchor: Vec2,
        texture: &'static str,
    },
}
