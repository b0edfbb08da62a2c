use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info};

use super::action::Direction;
use super::collision::overlaps;
use super::config::CollectConfig;
use super::engine::{Command, Game};
use super::entity::{Collectible, Entity, EntityId, Player, ScoreDisplay, UpdateContext};
use super::phase::Phase;
use super::spawner::{Spawner, spawn_position};
use crate::audio::AudioSink;
use crate::render::{Surface, TextAnchor};

/// Element of the generic game-object set
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    pub id: EntityId,
    pub entity: Entity,
}

/// One session of the collect-the-dot game.
///
/// `objects` holds every entity in draw order; `collectibles` indexes the
/// ones the player can pick up. Both are only changed together.
pub struct CollectGame {
    config: CollectConfig,
    phase: Phase,
    objects: Vec<GameObject>,
    collectibles: Vec<EntityId>,
    heading: Option<Direction>,
    spawner: Spawner,
    next_id: u64,
    rng: StdRng,
}

impl CollectGame {
    pub fn new(config: CollectConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: CollectConfig, rng: StdRng) -> Self {
        let spawner = Spawner::new(config.spawn_min_ms, config.spawn_max_ms);
        let mut game = Self {
            config,
            phase: Phase::Init,
            objects: Vec::new(),
            collectibles: Vec::new(),
            heading: None,
            spawner,
            next_id: 0,
            rng,
        };
        game.populate();
        game
    }

    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn collectibles(&self) -> &[EntityId] {
        &self.collectibles
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn player(&self) -> Option<&Player> {
        self.objects.iter().find_map(|object| match &object.entity {
            Entity::Player(player) => Some(player),
            _ => None,
        })
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.objects
            .iter()
            .find(|object| object.id == id)
            .map(|object| &object.entity)
    }

    /// Add a collectible with its top-left corner at `(x, y)`
    pub fn spawn_collectible_at(&mut self, x: f32, y: f32) -> EntityId {
        let size = self.config.collectible_size;
        let id = self.insert(Entity::Collectible(Collectible::new(x, y, size, size)));
        self.collectibles.push(id);
        debug!(id = id.0, x, y, "collectible spawned");
        id
    }

    fn spawn_random(&mut self) -> EntityId {
        let (x, y) = spawn_position(
            &mut self.rng,
            self.config.width,
            self.config.height,
            self.config.spawn_margin,
        );
        self.spawn_collectible_at(x, y)
    }

    fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.objects.push(GameObject { id, entity });
        id
    }

    /// Fresh player and score display, nothing to collect
    fn populate(&mut self) {
        self.objects.clear();
        self.collectibles.clear();
        self.next_id = 0;

        let size = self.config.player_size;
        self.insert(Entity::Player(Player::new(
            self.config.player_x,
            self.config.player_y,
            size,
            size,
            self.config.player_speed,
        )));
        self.insert(Entity::ScoreDisplay(ScoreDisplay::new(
            self.config.width - 30.0,
            30.0,
            TextAnchor::End,
            "",
        )));
    }

    fn reset(&mut self) {
        self.spawner.cancel();
        self.phase = Phase::Init;
        self.heading = None;
        self.populate();
        info!("collect session reset");
    }

    fn score_display_mut(&mut self) -> Option<&mut ScoreDisplay> {
        self.objects
            .iter_mut()
            .find_map(|object| match &mut object.entity {
                Entity::ScoreDisplay(score) => Some(score),
                _ => None,
            })
    }

    /// Collectibles under the player, gathered before anything is removed
    fn pending_pickups(&self) -> Vec<EntityId> {
        let Some(player_box) = self.player().map(Player::bounding_box) else {
            return Vec::new();
        };

        self.collectibles
            .iter()
            .copied()
            .filter(|id| {
                self.entity(*id)
                    .and_then(Entity::bounding_box)
                    .is_some_and(|bounds| overlaps(player_box, bounds))
            })
            .collect()
    }

    fn remove_collectibles(&mut self, ids: &[EntityId]) {
        self.objects.retain(|object| !ids.contains(&object.id));
        self.collectibles.retain(|id| !ids.contains(id));
    }
}

impl Game for CollectGame {
    fn title(&self) -> &'static str {
        " Collect "
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.objects
            .iter()
            .find_map(|object| match &object.entity {
                Entity::ScoreDisplay(score) => Some(score.points()),
                _ => None,
            })
            .unwrap_or(0)
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_ms)
    }

    fn field_size(&self) -> (f32, f32) {
        (self.config.width, self.config.height)
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Steer(direction) => self.heading = Some(direction),
            Command::Halt => self.heading = None,
            Command::Start => {
                if self.phase.start() {
                    self.spawner.arm(&mut self.rng);
                    info!(
                        next_spawn_ms = self.spawner.current_interval_ms(),
                        "collect session started"
                    );
                }
            }
            Command::Restart => self.reset(),
        }
    }

    fn tick(&mut self, elapsed_ms: f64, _audio: &mut dyn AudioSink) {
        if !self.phase.is_running() {
            return;
        }

        let ctx = UpdateContext {
            elapsed_ms,
            heading: self.heading,
            field_width: self.config.width,
            field_height: self.config.height,
        };
        for object in &mut self.objects {
            object.entity.update(&ctx);
        }

        let picked = self.pending_pickups();
        if !picked.is_empty() {
            if let Some(score) = self.score_display_mut() {
                for _ in &picked {
                    score.increase();
                }
            }
            self.remove_collectibles(&picked);
            debug!(count = picked.len(), score = self.score(), "collectibles picked up");
        }

        let fired = self.spawner.tick(elapsed_ms, &mut self.rng);
        for _ in 0..fired {
            self.spawn_random();
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.width, self.config.height);
        for object in &self.objects {
            object.entity.render(surface, self.config.debug);
        }
    }
}
