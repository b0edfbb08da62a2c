//! Drawable, updatable game objects
//!
//! The set of object kinds is closed: every kind a game needs is a variant of
//! [`Entity`], and the games drive them through [`Entity::update`] and
//! [`Entity::render`] without knowing which variant they hold.

use super::action::Direction;
use super::body::Cell;
use super::collision::BoundingBox;
use crate::render::{Paint, Surface, TextAnchor};

/// Stable handle of an object inside a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Per-tick inputs shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateContext {
    /// Milliseconds since the previous tick
    pub elapsed_ms: f64,
    /// Latched steering input
    pub heading: Option<Direction>,
    pub field_width: f32,
    pub field_height: f32,
}

/// The input-driven rectangle of the collect game
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Units per millisecond
    pub speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, w: f32, h: f32, speed: f32) -> Self {
        Self { x, y, w, h, speed }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.w, self.h)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        let Some(heading) = ctx.heading else {
            return;
        };

        let (dx, dy) = heading.delta();
        let step = self.speed * ctx.elapsed_ms as f32;
        self.x = (self.x + dx as f32 * step).clamp(0.0, (ctx.field_width - self.w).max(0.0));
        self.y = (self.y + dy as f32 * step).clamp(0.0, (ctx.field_height - self.h).max(0.0));
    }
}

/// Something to pick up
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub paint: Paint,
}

impl Collectible {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            paint: Paint::Collectible,
        }
    }

    /// An apple occupying one grid cell
    pub fn apple(cell: Cell) -> Self {
        Self {
            x: cell.x as f32,
            y: cell.y as f32,
            w: 1.0,
            h: 1.0,
            paint: Paint::Apple,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.w, self.h)
    }
}

/// Running point total
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDisplay {
    pub x: f32,
    pub y: f32,
    pub anchor: TextAnchor,
    pub label: &'static str,
    points: u32,
}

impl ScoreDisplay {
    pub fn new(x: f32, y: f32, anchor: TextAnchor, label: &'static str) -> Self {
        Self {
            x,
            y,
            anchor,
            label,
            points: 0,
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn increase(&mut self) {
        self.points += 1;
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.label, self.points)
    }
}

/// One grid cell of a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeSegment {
    pub cell: Cell,
    pub head: bool,
}

impl SnakeSegment {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.cell.x as f32, self.cell.y as f32, 1.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Player(Player),
    Collectible(Collectible),
    ScoreDisplay(ScoreDisplay),
    SnakeSegment(SnakeSegment),
}

impl Entity {
    pub fn update(&mut self, ctx: &UpdateContext) {
        match self {
            Entity::Player(player) => player.update(ctx),
            Entity::Collectible(_) | Entity::ScoreDisplay(_) | Entity::SnakeSegment(_) => {}
        }
    }

    /// Draw the entity; `debug` also outlines its bounding box
    pub fn render(&self, surface: &mut dyn Surface, debug: bool) {
        match self {
            Entity::Player(player) => surface.fill_rect(player.bounding_box(), Paint::Player),
            Entity::Collectible(collectible) => {
                surface.fill_rect(collectible.bounding_box(), collectible.paint)
            }
            Entity::ScoreDisplay(score) => {
                surface.fill_text(&score.text(), score.x, score.y, score.anchor, Paint::Text)
            }
            Entity::SnakeSegment(segment) => {
                let paint = if segment.head {
                    Paint::SnakeHead
                } else {
                    Paint::SnakeBody
                };
                surface.fill_rect(segment.bounding_box(), paint);
            }
        }

        if debug {
            if let Some(bounds) = self.bounding_box() {
                surface.stroke_rect(bounds, Paint::Debug);
            }
        }
    }

    /// Collision box, for the kinds that take part in collisions
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Entity::Player(player) => Some(player.bounding_box()),
            Entity::Collectible(collectible) => Some(collectible.bounding_box()),
            Entity::SnakeSegment(segment) => Some(segment.bounding_box()),
            Entity::ScoreDisplay(_) => None,
        }
    }
}
