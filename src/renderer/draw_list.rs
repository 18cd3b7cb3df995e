//! Recording renderer
//!
//! Collects draw commands for one frame so a host (or a test) can inspect,
//! replay or serialize them.

use serde::{Deserialize, Serialize};

use super::{Color, Renderer, SpriteId};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Sprite {
        id: SpriteId,
        x: i32,
        y: i32,
    },
    RectFill {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    Text {
        font: u8,
        x: i32,
        y: i32,
        text: String,
    },
}

/// Commands issued since the last [`DrawList::begin_frame`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    /// Drop the previous frame's commands, keeping the allocation
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sprites drawn this frame, in order
    pub fn sprites(&self) -> impl Iterator<Item = (SpriteId, i32, i32)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Sprite { id, x, y } => Some((*id, *x, *y)),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn sprite(&mut self, id: SpriteId, x: i32, y: i32) {
        self.commands.push(DrawCommand::Sprite { id, x, y });
    }

    fn rect_fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.commands.push(DrawCommand::RectFill {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn text(&mut self, font: u8, x: i32, y: i32, text: &str) {
        self.commands.push(DrawCommand::Text {
            font,
            x,
            y,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.clear();
        list.sprite(49, 128, 100);
        list.text(0, 20, 50, "hi");

        assert_eq!(list.len(), 3);
        assert_eq!(list.commands[0], DrawCommand::Clear);
        assert_eq!(list.sprites().collect::<Vec<_>>(), vec![(49, 128, 100)]);

        list.begin_frame();
        assert!(list.is_empty());
    }

    #[test]
    fn test_serializes_tagged() {
        let mut list = DrawList::new();
        list.rect_fill(0, 0, 4, 4, 7);
        let json = serde_json::to_string(&list.commands).unwrap();
        assert_eq!(
            json,
            r#"[{"op":"rect_fill","x0":0,"y0":0,"x1":4,"y1":4,"color":7}]"#
        );
    }
}
