//! Core game logic for the collect and snake games
//!
//! This module contains all the game logic without any terminal or I/O
//! dependencies. Drawing goes through the [`Surface`](crate::render::Surface)
//! trait and sound through [`AudioSink`](crate::audio::AudioSink), so sessions
//! can be driven headless from tests.

pub mod action;
pub mod body;
pub mod clock;
pub mod collect;
pub mod collision;
pub mod config;
pub mod engine;
pub mod entity;
pub mod phase;
pub mod snake;
pub mod spawner;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use body::{Cell, SnakeBody, StepSnake, TrailSnake};
pub use clock::{Clock, FrameTimer, ManualClock, MonotonicClock};
pub use collect::{CollectGame, GameObject};
pub use collision::{BoundingBox, overlaps};
pub use config::{ArcadeConfig, CollectConfig, SnakeConfig, SnakeVariant};
pub use engine::{Command, Game};
pub use entity::{Entity, EntityId};
pub use phase::Phase;
pub use snake::{CollisionType, SnakeGame, StepSnakeGame, TrailSnakeGame};
pub use spawner::Spawner;
