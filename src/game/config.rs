use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the collect-the-dot game, in canvas units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Width of the play field
    pub width: f32,
    /// Height of the play field
    pub height: f32,
    /// Player starting position and size
    pub player_x: f32,
    pub player_y: f32,
    pub player_size: f32,
    /// Player speed in units per millisecond
    pub player_speed: f32,
    /// Edge length of a collectible
    pub collectible_size: f32,
    /// Collectibles spawn at least this far from the field edges
    pub spawn_margin: f32,
    /// Bounds of the randomized spawn interval
    pub spawn_min_ms: f64,
    pub spawn_max_ms: f64,
    /// Target time between frames
    pub frame_ms: u64,
    /// Outline every bounding box
    pub debug: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_x: 100.0,
            player_y: 100.0,
            player_size: 100.0,
            player_speed: 0.4,
            collectible_size: 50.0,
            spawn_margin: 50.0,
            spawn_min_ms: 500.0,
            spawn_max_ms: 5000.0,
            frame_ms: 16,
            debug: false,
        }
    }
}

/// Which body implementation the snake uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakeVariant {
    /// Head coordinates plus a trimmed head history
    #[default]
    Trail,
    /// Body vector advanced by the velocity, head first
    Step,
}

/// Configuration for the snake game, in grid cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Cells per side of the square grid
    pub tile_count: i32,
    /// Ticks per second
    pub speed: u32,
    /// Starting head cell
    pub start_x: i32,
    pub start_y: i32,
    /// Target length before anything is eaten
    pub initial_length: usize,
    /// Cell of the first apple
    pub apple_x: i32,
    pub apple_y: i32,
    pub variant: SnakeVariant,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            speed: 7,
            start_x: 10,
            start_y: 10,
            initial_length: 2,
            apple_x: 5,
            apple_y: 5,
            variant: SnakeVariant::Trail,
        }
    }
}

impl SnakeConfig {
    /// Milliseconds between ticks
    pub fn tick_ms(&self) -> u64 {
        1000 / u64::from(self.speed.max(1))
    }
}

/// Configuration for both games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub collect: CollectConfig,
    pub snake: SnakeConfig,
}

impl ArcadeConfig {
    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: ArcadeConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config.sanitized())
    }

    /// Clamp values the games cannot run with
    pub fn sanitized(mut self) -> Self {
        let collect = &mut self.collect;
        collect.spawn_min_ms = collect.spawn_min_ms.max(0.0);
        collect.spawn_max_ms = collect.spawn_max_ms.max(0.0);
        if collect.spawn_max_ms < collect.spawn_min_ms {
            std::mem::swap(&mut collect.spawn_min_ms, &mut collect.spawn_max_ms);
        }
        collect.width = collect.width.max(1.0);
        collect.height = collect.height.max(1.0);
        collect.frame_ms = collect.frame_ms.max(1);

        let snake = &mut self.snake;
        snake.tile_count = snake.tile_count.max(1);
        snake.speed = snake.speed.max(1);
        snake.initial_length = snake.initial_length.max(1);

        self
    }
}
