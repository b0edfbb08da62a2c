use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

use super::action::Velocity;
use super::body::{Cell, SnakeBody, StepSnake, TrailSnake};
use super::config::SnakeConfig;
use super::engine::{Command, Game};
use super::entity::{Collectible, Entity, ScoreDisplay, SnakeSegment};
use super::phase::Phase;
use crate::audio::{AudioCue, AudioSink};
use crate::render::{Surface, TextAnchor};

pub type TrailSnakeGame = SnakeGame<TrailSnake>;
pub type StepSnakeGame = SnakeGame<StepSnake>;

/// Why a snake session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// One session of grid Snake, generic over the body implementation
pub struct SnakeGame<B: SnakeBody> {
    config: SnakeConfig,
    phase: Phase,
    body: B,
    apple: Cell,
    score: ScoreDisplay,
    /// Most recent steering input, consumed by the next tick
    latched: Velocity,
    /// Velocity applied on the last tick
    velocity: Velocity,
    collision: Option<CollisionType>,
    rng: StdRng,
}

impl<B: SnakeBody> SnakeGame<B> {
    pub fn new(config: SnakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: SnakeConfig, rng: StdRng) -> Self {
        Self {
            body: B::new(
                Cell::new(config.start_x, config.start_y),
                config.initial_length,
            ),
            apple: Cell::new(config.apple_x, config.apple_y),
            score: Self::score_display(),
            phase: Phase::Init,
            latched: Velocity::ZERO,
            velocity: Velocity::ZERO,
            collision: None,
            config,
            rng,
        }
    }

    fn score_display() -> ScoreDisplay {
        ScoreDisplay::new(0.5, 0.5, TextAnchor::Start, "Pts: ")
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    /// Move the apple, e.g. to set up a scenario
    pub fn place_apple(&mut self, cell: Cell) {
        self.apple = cell;
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn collision(&self) -> Option<CollisionType> {
        self.collision
    }

    /// Current head position ends the game.
    ///
    /// A snake that has not started moving is never over, wherever it is.
    pub fn is_game_over(&self) -> bool {
        self.check_collision().is_some()
    }

    fn check_collision(&self) -> Option<CollisionType> {
        if self.velocity.is_zero() {
            return None;
        }

        let head = self.body.head();
        let tiles = self.config.tile_count;
        if head.x < 0 || head.x >= tiles || head.y < 0 || head.y >= tiles {
            return Some(CollisionType::Wall);
        }

        if self.body.hits_itself() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Uniformly random cell anywhere on the grid, including under the snake
    fn random_cell(&mut self) -> Cell {
        let tiles = self.config.tile_count;
        Cell::new(self.rng.gen_range(0..tiles), self.rng.gen_range(0..tiles))
    }

    fn reset(&mut self) {
        self.body = B::new(
            Cell::new(self.config.start_x, self.config.start_y),
            self.config.initial_length,
        );
        self.apple = Cell::new(self.config.apple_x, self.config.apple_y);
        self.score = Self::score_display();
        self.phase = Phase::Init;
        self.latched = Velocity::ZERO;
        self.velocity = Velocity::ZERO;
        self.collision = None;
        info!("snake session reset");
    }
}

impl<B: SnakeBody> Game for SnakeGame<B> {
    fn title(&self) -> &'static str {
        " Snake "
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score.points()
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_ms())
    }

    fn field_size(&self) -> (f32, f32) {
        let tiles = self.config.tile_count as f32;
        (tiles, tiles)
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Steer(direction) => self.latched = Velocity::from(direction),
            Command::Halt => {}
            Command::Start => {
                if self.phase.start() {
                    info!(variant = ?self.config.variant, "snake session started");
                }
            }
            Command::Restart => self.reset(),
        }
    }

    fn tick(&mut self, _elapsed_ms: f64, audio: &mut dyn AudioSink) {
        if !self.phase.is_running() {
            return;
        }

        self.velocity = self.velocity.guarded(self.latched);
        self.body.advance(self.velocity);

        if let Some(collision) = self.check_collision() {
            self.collision = Some(collision);
            self.phase.finish();
            audio.play(AudioCue::GameOver);
            info!(
                ?collision,
                score = self.score.points(),
                head = ?self.body.head(),
                "game over"
            );
            return;
        }

        if self.body.head() == self.apple {
            self.apple = self.random_cell();
            self.body.grow();
            self.score.increase();
            audio.play(AudioCue::Eat);
            debug!(score = self.score.points(), apple = ?self.apple, "apple eaten");
        }

        self.body.settle();
    }

    fn render(&self, surface: &mut dyn Surface) {
        let (width, height) = self.field_size();
        surface.clear(width, height);

        Entity::Collectible(Collectible::apple(self.apple)).render(surface, false);
        for cell in self.body.segments() {
            Entity::SnakeSegment(SnakeSegment { cell, head: false }).render(surface, false);
        }
        Entity::SnakeSegment(SnakeSegment {
            cell: self.body.head(),
            head: true,
        })
        .render(surface, false);
        Entity::ScoreDisplay(self.score.clone()).render(surface, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingSink, Silent};
    use crate::game::Direction;
    use crate::game::collision::BoundingBox;
    use crate::render::{Paint, RecordingSurface};

    fn running<B: SnakeBody>() -> SnakeGame<B> {
        let mut game = SnakeGame::<B>::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(9));
        game.handle(Command::Start);
        game
    }

    fn ticks<B: SnakeBody>(game: &mut SnakeGame<B>, n: usize) {
        for _ in 0..n {
            game.tick(142.0, &mut Silent);
        }
    }

    #[test]
    fn test_waits_for_start() {
        let mut game = TrailSnakeGame::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(1));
        game.handle(Command::Steer(Direction::Right));
        ticks(&mut game, 3);

        assert_eq!(game.phase(), Phase::Init);
        assert_eq!(game.body().head(), Cell::new(10, 10));
    }

    #[test]
    fn test_resting_snake_is_never_over() {
        let mut game: TrailSnakeGame = running();
        ticks(&mut game, 50);

        assert_eq!(game.phase(), Phase::Running);
        assert!(!game.is_game_over());
        assert_eq!(game.body().head(), Cell::new(10, 10));

        let config = SnakeConfig {
            start_x: -5,
            ..Default::default()
        };
        let mut game = StepSnakeGame::with_rng(config, StdRng::seed_from_u64(1));
        game.handle(Command::Start);
        ticks(&mut game, 3);
        assert!(!game.is_game_over());
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut game: TrailSnakeGame = running();
        game.handle(Command::Steer(Direction::Right));
        ticks(&mut game, 1);

        game.handle(Command::Steer(Direction::Left));
        ticks(&mut game, 1);

        assert_eq!(game.velocity(), Velocity::new(1, 0));
        assert_eq!(game.body().head(), Cell::new(12, 10));
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_latched_input_last_writer_wins() {
        let mut game: StepSnakeGame = running();
        game.handle(Command::Steer(Direction::Up));
        game.handle(Command::Steer(Direction::Right));
        ticks(&mut game, 1);

        assert_eq!(game.body().head(), Cell::new(11, 10));
    }

    #[test]
    fn test_left_wall() {
        let mut game: TrailSnakeGame = running();
        game.handle(Command::Steer(Direction::Left));
        ticks(&mut game, 10);
        assert_eq!(game.body().head(), Cell::new(0, 10));
        assert_eq!(game.phase(), Phase::Running);

        let mut audio = RecordingSink::default();
        game.tick(142.0, &mut audio);
        assert_eq!(game.body().head(), Cell::new(-1, 10));
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.collision(), Some(CollisionType::Wall));
        assert_eq!(audio.cues, vec![AudioCue::GameOver]);
    }

    #[test]
    fn test_far_walls_at_tile_count() {
        let mut game: StepSnakeGame = running();
        game.handle(Command::Steer(Direction::Right));
        ticks(&mut game, 9);
        assert_eq!(game.phase(), Phase::Running);
        ticks(&mut game, 1);
        assert_eq!(game.body().head(), Cell::new(20, 10));
        assert_eq!(game.phase(), Phase::GameOver);

        let mut game: TrailSnakeGame = running();
        game.handle(Command::Steer(Direction::Down));
        ticks(&mut game, 10);
        assert_eq!(game.body().head(), Cell::new(10, 20));
        assert!(game.phase().is_over());
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut game: TrailSnakeGame = running();
        game.handle(Command::Steer(Direction::Right));
        ticks(&mut game, 3);
        assert_eq!(game.body().len(), 2);

        game.place_apple(Cell::new(14, 10));
        let mut audio = RecordingSink::default();
        game.tick(142.0, &mut audio);

        assert_eq!(game.score(), 1);
        assert_eq!(game.body().target_len(), 3);
        assert_eq!(game.body().len(), 3);
        assert_eq!(audio.cues, vec![AudioCue::Eat]);

        let apple = game.apple();
        assert!((0..20).contains(&apple.x) && (0..20).contains(&apple.y));
    }

    fn feed_and_circle<B: SnakeBody>() -> SnakeGame<B> {
        let mut game: SnakeGame<B> = running();
        game.handle(Command::Steer(Direction::Right));
        for x in 11..14 {
            game.place_apple(Cell::new(x, 10));
            ticks(&mut game, 1);
        }
        game.place_apple(Cell::new(0, 0));
        assert_eq!(game.score(), 3);

        ticks(&mut game, 2);
        for direction in [Direction::Down, Direction::Left, Direction::Up] {
            game.handle(Command::Steer(direction));
            ticks(&mut game, 1);
        }
        game
    }

    #[test]
    fn test_self_collision_trail() {
        let game: TrailSnakeGame = feed_and_circle();
        assert_eq!(game.body().head(), Cell::new(14, 10));
        assert_eq!(game.collision(), Some(CollisionType::SelfCollision));
        assert!(game.phase().is_over());
    }

    #[test]
    fn test_self_collision_step() {
        let game: StepSnakeGame = feed_and_circle();
        assert_eq!(game.collision(), Some(CollisionType::SelfCollision));
        assert!(game.phase().is_over());
    }

    #[test]
    fn test_game_over_is_terminal_until_restart() {
        let mut game: TrailSnakeGame = running();
        game.handle(Command::Steer(Direction::Up));
        ticks(&mut game, 11);
        assert!(game.phase().is_over());

        let head = game.body().head();
        game.handle(Command::Start);
        ticks(&mut game, 5);
        assert_eq!(game.body().head(), head);

        game.handle(Command::Restart);
        assert_eq!(game.phase(), Phase::Init);
        assert_eq!(game.score(), 0);
        assert_eq!(game.body().head(), Cell::new(10, 10));
        assert_eq!(game.apple(), Cell::new(5, 5));
        assert_eq!(game.velocity(), Velocity::ZERO);
        assert_eq!(game.collision(), None);
    }

    #[test]
    fn test_render() {
        let mut game: TrailSnakeGame = running();
        game.handle(Command::Steer(Direction::Right));
        ticks(&mut game, 2);

        let mut surface = RecordingSurface::new();
        game.render(&mut surface);

        assert_eq!(
            surface.filled(Paint::Apple),
            vec![BoundingBox::new(5.0, 5.0, 1.0, 1.0)]
        );
        assert_eq!(
            surface.filled(Paint::SnakeHead),
            vec![BoundingBox::new(12.0, 10.0, 1.0, 1.0)]
        );
        assert_eq!(surface.filled(Paint::SnakeBody).len(), 2);
        assert_eq!(surface.texts(), vec!["Pts: 0"]);
    }
}
