use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::CellCanvas;
use super::surface::Paint;
use crate::game::{Game, Phase};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &dyn Game, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(game, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the play field horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match game.phase() {
            Phase::Init => frame.render_widget(self.render_start(game), game_area),
            Phase::Running => frame.render_widget(self.render_field(game_area, game), game_area),
            Phase::GameOver => frame.render_widget(self.render_game_over(game), game_area),
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn field_block(&self, game: &dyn Game) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(game.title())
    }

    fn render_field(&self, area: Rect, game: &dyn Game) -> Paragraph<'static> {
        let block = self.field_block(game);
        let inner = block.inner(area);

        let mut canvas = CellCanvas::new(inner.width, inner.height);
        game.render(&mut canvas);

        Paragraph::new(canvas_lines(&canvas)).block(block)
    }

    fn render_stats(&self, game: &dyn Game, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start(&self, game: &dyn Game) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                game.title().trim().to_uppercase(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(self.field_block(game))
    }

    fn render_game_over(&self, game: &dyn Game) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    game.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("X", Style::default().fg(Color::Cyan)),
            Span::raw(" to stop | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" to start | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn paint_style(paint: Paint) -> Style {
    match paint {
        Paint::Player => Style::default().fg(Color::Cyan),
        Paint::Collectible => Style::default().fg(Color::Yellow),
        Paint::Apple => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Paint::SnakeBody => Style::default().fg(Color::Green),
        Paint::SnakeHead => Style::default()
            .fg(Color::Rgb(255, 165, 0))
            .add_modifier(Modifier::BOLD),
        Paint::Text => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Paint::Debug => Style::default().fg(Color::DarkGray),
    }
}

/// One styled line per canvas row
fn canvas_lines(canvas: &CellCanvas) -> Vec<Line<'static>> {
    (0..canvas.rows())
        .map(|row| {
            let spans: Vec<Span<'static>> = canvas
                .row(row)
                .iter()
                .map(|cell| match cell {
                    Some(glyph) => Span::styled(glyph.symbol.to_string(), paint_style(glyph.paint)),
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoundingBox, Command, SnakeConfig, TrailSnakeGame};
    use crate::render::Surface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_canvas_lines() {
        let mut canvas = CellCanvas::new(3, 2);
        canvas.clear(3.0, 2.0);
        canvas.fill_rect(BoundingBox::new(1.0, 1.0, 1.0, 1.0), Paint::Apple);

        let lines = canvas_lines(&canvas);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[1].content, "█");
        assert_eq!(lines[1].spans[1].style, paint_style(Paint::Apple));
        assert_eq!(lines[0].spans[0].content, " ");
    }

    #[test]
    fn test_phase_screens() {
        let mut game = TrailSnakeGame::with_rng(SnakeConfig::default(), StdRng::seed_from_u64(2));
        let metrics = GameMetrics::new();
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, &game, &metrics))
            .unwrap();
        assert!(buffer_text(&terminal).contains("SNAKE"));

        game.handle(Command::Start);
        terminal
            .draw(|frame| renderer.render(frame, &game, &metrics))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Pts: 0"));
        assert!(text.contains("█"));
    }
}
