use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::audio::AudioSink;
use crate::game::{Command, FrameTimer, Game, MonotonicClock, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Plays one game in the terminal with keyboard controls
pub struct PlayMode<G: Game> {
    game: G,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Box<dyn AudioSink>,
    timer: FrameTimer<MonotonicClock>,
    should_quit: bool,
}

impl<G: Game> PlayMode<G> {
    pub fn new(game: G, audio: Box<dyn AudioSink>) -> Self {
        Self {
            game,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            timer: FrameTimer::new(MonotonicClock::new()),
            should_quit: false,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.game.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            game = self.game.title().trim(),
            tick_ms = self.game.tick_interval().as_millis() as u64,
            "game loop started"
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                        self.draw(terminal)?;
                    }
                }

                // Update, then redraw
                _ = tick_timer.tick() => {
                    self.update_game();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games_played = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "game loop stopped"
        );
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.game, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(command) => self.apply(command),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn apply(&mut self, command: Command) {
        let before = self.game.phase();

        if command == Command::Restart && before == Phase::Running {
            self.metrics.on_game_over(self.game.score());
        }

        self.game.handle(command);

        if before == Phase::Init && self.game.phase() == Phase::Running {
            self.metrics.on_game_start();
            self.timer.reset();
        }
        debug!(?command, phase = ?self.game.phase(), "command applied");
    }

    fn update_game(&mut self) {
        let elapsed_ms = self.timer.lap();
        if !self.game.phase().is_running() {
            return;
        }

        self.game.tick(elapsed_ms, self.audio.as_mut());

        if self.game.phase().is_over() {
            self.metrics.on_game_over(self.game.score());
        } else {
            self.metrics.observe_score(self.game.score());
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
