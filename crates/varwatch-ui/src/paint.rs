//! Widget-local drawing.
//!
//! Layouts record commands against their own origin; `flush` moves them into
//! the shared [`Scene`] at the widget's stage position.

use varwatch_core::{Color, Rect, Scene, SceneNode, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
        stroke: Option<(f32, Color)>,
    },
    Ellipse {
        center: Vec2,
        rx: f32,
        ry: f32,
        color: Color,
        stroke: Option<(f32, Color)>,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Color,
        size: f32,
    },
    NinePatch {
        rect: Rect,
        texture: &'static str,
        inset: f32,
    },
    Sprite {
        anchor: Vec2,
        texture: &'static str,
    },
}

#[derive(Default)]
pub struct DrawScope {
    pub commands: Vec<DrawCommand>,
}

impl DrawScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            radius,
            stroke: None,
        });
    }

    /// Filled rect with an outline in a second color.
    pub fn draw_rect_outlined(
        &mut self,
        rect: Rect,
        color: Color,
        radius: f32,
        width: f32,
        outline: Color,
    ) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            radius,
            stroke: Some((width.max(0.0), outline)),
        });
    }

    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            rx: radius.max(0.0),
            ry: radius.max(0.0),
            color,
            stroke: None,
        });
    }

    pub fn draw_circle_outlined(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        width: f32,
        outline: Color,
    ) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            rx: radius.max(0.0),
            ry: radius.max(0.0),
            color,
            stroke: Some((width.max(0.0), outline)),
        });
    }

    pub fn draw_text(&mut self, text: impl Into<String>, pos: Vec2, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            color,
            size,
        });
    }

    pub fn draw_nine_patch(&mut self, rect: Rect, texture: &'static str, inset: f32) {
        self.commands.push(DrawCommand::NinePatch {
            rect,
            texture,
            inset,
        });
    }

    pub fn draw_sprite(&mut self, anchor: Vec2, texture: &'static str) {
        self.commands.push(DrawCommand::Sprite { anchor, texture });
    }

    /// Emits every recorded command into `scene`, offset by `origin`.
    pub fn flush(self, scene: &mut Scene, origin: Vec2) {
        let to_global = |r: Rect| r.offset(origin);
        for cmd in self.commands {
            match cmd {
                DrawCommand::Rect {
                    rect,
                    color,
                    radius,
                    stroke,
                } => {
                    scene.nodes.push(SceneNode::Rect {
                        rect: to_global(rect),
                        color,
                        radius,
                    });
                    if let Some((width, c)) = stroke {
                        scene.nodes.push(SceneNode::Border {
                            rect: to_global(rect),
                            color: c,
                            width,
                            radius,
                        });
                    }
                }
                DrawCommand::Ellipse {
                    center,
                    rx,
                    ry,
                    color,
                    stroke,
                } => {
                    let r = to_global(Rect::new(center.x - rx, center.y - ry, 2.0 * rx, 2.0 * ry));
                    scene.nodes.push(SceneNode::Ellipse { rect: r, color });
                    if let Some((width, c)) = stroke {
                        scene.nodes.push(SceneNode::EllipseBorder {
                            rect: r,
                            color: c,
                            width,
                        });
                    }
                }
                DrawCommand::Text {
                    text,
                    pos,
                    color,
                    size,
                } => {
                    scene.nodes.push(SceneNode::Text {
                        rect: to_global(Rect::new(pos.x, pos.y, 0.0, size)),
                        text,
                        color,
                        size,
                    });
                }
                DrawCommand::NinePatch {
                    rect,
                    texture,
                    inset,
                } => {
                    scene.nodes.push(SceneNode::NinePatch {
                        rect: to_global(rect),
                        texture,
                        insets: [inset; 4],
                    });
                }
                DrawCommand::Sprite { anchor, texture } => {
                    scene.nodes.push(SceneNode::Sprite {
                        anchor: anchor + origin,
                        texture,
                    });
                }
            }
        }
    }
}
