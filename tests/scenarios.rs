use rand::SeedableRng;
use rand::rngs::StdRng;
use tui_arcade::audio::{AudioCue, RecordingSink, Silent};
use tui_arcade::game::{
    BoundingBox, Cell, CollectConfig, CollectGame, Command, Direction, Entity, FrameTimer, Game,
    ManualClock, Phase, SnakeBody, SnakeConfig, SnakeGame, Spawner, StepSnake, TrailSnake,
    overlaps,
};
use tui_arcade::render::{CellCanvas, Paint, RecordingSurface};

const TICK_MS: f64 = 142.0;

fn snake<B: SnakeBody>(seed: u64) -> SnakeGame<B> {
    let mut game = SnakeGame::<B>::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(seed));
    game.handle(Command::Start);
    game
}

#[test]
fn overlap_is_symmetric_and_ignores_touching_edges() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, b));
    assert!(!overlaps(b, a));

    let c = BoundingBox::new(9.5, 9.5, 1.0, 1.0);
    assert!(overlaps(a, c));
    assert!(overlaps(c, a));
}

#[test]
fn spawner_intervals_over_a_thousand_firings() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut spawner = Spawner::new(500.0, 5000.0);
    spawner.arm(&mut rng);

    let mut seen = Vec::new();
    while seen.len() < 1000 {
        let interval = spawner.current_interval_ms();
        seen.push(interval);
        let fired = spawner.tick(interval, &mut rng);
        assert_eq!(fired, 1);
    }

    assert!(seen.iter().all(|ms| (500.0..=5000.0).contains(ms)));
    let min = seen.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = seen.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(max > min);
}

#[test]
fn collectible_on_player_is_picked_up_in_one_tick() {
    let mut game = CollectGame::with_rng(CollectConfig::default(), StdRng::seed_from_u64(1));
    game.handle(Command::Start);

    let player_box = game.player().map(|player| player.bounding_box()).unwrap();
    let id = game.spawn_collectible_at(player_box.x, player_box.y);
    assert!(game.collectibles().contains(&id));
    assert!(game.entity(id).is_some());

    let mut clock = FrameTimer::new(ManualClock::new());
    clock.clock().advance(16.0);
    game.tick(clock.lap(), &mut Silent);

    assert!(!game.collectibles().contains(&id));
    assert!(game.objects().iter().all(|object| object.id != id));
    assert_eq!(game.score(), 1);
}

#[test]
fn collect_session_spawns_and_collects_over_time() {
    let config = CollectConfig {
        spawn_min_ms: 100.0,
        spawn_max_ms: 100.0,
        ..Default::default()
    };
    let mut game = CollectGame::with_rng(config, StdRng::seed_from_u64(77));
    game.handle(Command::Start);

    for _ in 0..10 {
        game.tick(50.0, &mut Silent);
    }
    let spawned = game.collectibles().len() as u32 + game.score();
    assert_eq!(spawned, 5);

    for id in game.collectibles() {
        assert!(matches!(game.entity(*id), Some(Entity::Collectible(_))));
    }
}

#[test]
fn resting_snake_is_never_game_over() {
    let mut game: SnakeGame<TrailSnake> = snake(1);
    assert_eq!(game.body().head(), Cell::new(10, 10));

    for _ in 0..100 {
        game.tick(TICK_MS, &mut Silent);
        assert!(!game.is_game_over());
    }
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn snake_reversal_is_ignored() {
    let mut game: SnakeGame<StepSnake> = snake(1);
    game.handle(Command::Steer(Direction::Right));
    game.tick(TICK_MS, &mut Silent);
    game.handle(Command::Steer(Direction::Left));
    game.tick(TICK_MS, &mut Silent);

    assert_eq!(game.body().head(), Cell::new(12, 10));
    assert_eq!(game.phase(), Phase::Running);
}

fn leaves_grid<B: SnakeBody>(direction: Direction, ticks: usize, exit: Cell) {
    let mut game: SnakeGame<B> = snake(3);
    game.handle(Command::Steer(direction));
    for _ in 0..ticks - 1 {
        game.tick(TICK_MS, &mut Silent);
    }
    assert_eq!(game.phase(), Phase::Running);

    let mut audio = RecordingSink::default();
    game.tick(TICK_MS, &mut audio);
    assert_eq!(game.body().head(), exit);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(audio.cues, vec![AudioCue::GameOver]);
}

#[test]
fn snake_dies_at_each_wall() {
    leaves_grid::<TrailSnake>(Direction::Left, 11, Cell::new(-1, 10));
    leaves_grid::<TrailSnake>(Direction::Right, 10, Cell::new(20, 10));
    leaves_grid::<StepSnake>(Direction::Down, 10, Cell::new(10, 20));
    leaves_grid::<StepSnake>(Direction::Up, 11, Cell::new(10, -1));
}

fn grows_after_eating<B: SnakeBody>() {
    let mut game: SnakeGame<B> = snake(5);
    game.handle(Command::Steer(Direction::Down));
    for _ in 0..3 {
        game.tick(TICK_MS, &mut Silent);
    }
    let target = game.body().target_len();

    game.place_apple(Cell::new(10, 14));
    let mut audio = RecordingSink::default();
    game.tick(TICK_MS, &mut audio);

    assert_eq!(audio.cues, vec![AudioCue::Eat]);
    assert_eq!(game.score(), 1);
    assert_eq!(game.body().target_len(), target + 1);
    assert_eq!(game.body().len(), game.body().target_len());
}

#[test]
fn snake_grows_by_one_per_apple() {
    grows_after_eating::<TrailSnake>();
    grows_after_eating::<StepSnake>();
}

#[test]
fn restart_after_game_over_builds_fresh_session() {
    let mut game: SnakeGame<TrailSnake> = snake(8);
    game.handle(Command::Steer(Direction::Left));
    for _ in 0..11 {
        game.tick(TICK_MS, &mut Silent);
    }
    assert!(game.phase().is_over());

    game.handle(Command::Restart);
    assert_eq!(game.phase(), Phase::Init);
    game.handle(Command::Start);
    game.tick(TICK_MS, &mut Silent);
    assert!(!game.is_game_over());
    assert_eq!(game.body().head(), Cell::new(10, 10));
}

#[test]
fn snake_frame_on_a_cell_canvas() {
    let mut game: SnakeGame<TrailSnake> = snake(4);
    game.handle(Command::Steer(Direction::Right));
    game.tick(TICK_MS, &mut Silent);

    let mut canvas = CellCanvas::new(40, 20);
    game.render(&mut canvas);
    assert_eq!(canvas.get(22, 10).map(|glyph| glyph.paint), Some(Paint::SnakeHead));
    assert_eq!(canvas.get(10, 5).map(|glyph| glyph.paint), Some(Paint::Apple));

    let mut surface = RecordingSurface::new();
    game.render(&mut surface);
    assert_eq!(surface.filled(Paint::SnakeHead), vec![BoundingBox::new(11.0, 10.0, 1.0, 1.0)]);
}
