use std::time::Duration;

use super::action::Direction;
use super::phase::Phase;
use crate::audio::AudioSink;
use crate::render::Surface;

/// Commands a game session accepts between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Latch a steering direction for the next tick
    Steer(Direction),
    /// Stop the player where it stands
    Halt,
    /// Leave `Init` and begin ticking
    Start,
    /// Discard the session and return to `Init`
    Restart,
}

/// A game session driven by the terminal runner.
///
/// Input only latches state through [`handle`](Game::handle); all movement,
/// collision and scoring happens inside [`tick`](Game::tick), and
/// [`render`](Game::render) draws the current state without changing it.
pub trait Game {
    fn title(&self) -> &'static str;

    fn phase(&self) -> Phase;

    fn score(&self) -> u32;

    /// Time the runner waits between ticks
    fn tick_interval(&self) -> Duration;

    /// Width and height of the play field in world units
    fn field_size(&self) -> (f32, f32);

    fn handle(&mut self, command: Command);

    /// Advance by `elapsed_ms`; does nothing unless the phase is `Running`
    fn tick(&mut self, elapsed_ms: f64, audio: &mut dyn AudioSink);

    /// Clear the surface and draw every entity
    fn render(&self, surface: &mut dyn Surface);
}
