use crate::game::BoundingBox;

/// Semantic color role of a draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Player,
    Collectible,
    Apple,
    SnakeBody,
    SnakeHead,
    Text,
    Debug,
}

/// Which end of a text run sits at the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

/// 2D drawing target owned by the UI shell.
///
/// Coordinates are world units of the game being drawn; the implementation
/// decides how they map to its pixels or cells.
pub trait Surface {
    /// Erase everything and set the world size for the coming frame
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: BoundingBox, paint: Paint);
    fn stroke_rect(&mut self, rect: BoundingBox, paint: Paint);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, anchor: TextAnchor, paint: Paint);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { rect: BoundingBox, paint: Paint },
    StrokeRect { rect: BoundingBox, paint: Paint },
    FillText {
        text: String,
        x: f32,
        y: f32,
        anchor: TextAnchor,
        paint: Paint,
    },
}

/// Surface that keeps the commands of the last frame
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles filled with the given paint
    pub fn filled(&self, paint: Paint) -> Vec<BoundingBox> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, paint: p } if *p == paint => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Text runs drawn this frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: BoundingBox, paint: Paint) {
        self.commands.push(DrawCommand::FillRect { rect, paint });
    }

    fn stroke_rect(&mut self, rect: BoundingBox, paint: Paint) {
        self.commands.push(DrawCommand::StrokeRect { rect, paint });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, anchor: TextAnchor, paint: Paint) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            anchor,
            paint,
        });
    }
}
