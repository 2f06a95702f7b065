use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::commands::{DrawCommand, RenderFrame};
use crate::metrics::GameMetrics;

/// What occupies one terminal grid cell after painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Outside,
    Empty,
    Food,
    Body,
    Head,
}

/// Terminal renderer that consumes [`RenderFrame`] draw commands
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &RenderFrame, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(scene, metrics);
        frame.render_widget(stats, chunks[0]);

        let grid = self.render_grid(scene);
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Paint the draw commands, in order, onto a tile map of the grid
    pub fn paint(scene: &RenderFrame) -> Vec<Vec<Tile>> {
        let width = scene.grid_width.max(0) as usize;
        let height = scene.grid_height.max(0) as usize;
        let mut tiles = vec![vec![Tile::Outside; width]; height];

        let mut put = |x: i32, y: i32, tile: Tile| {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                if let Some(slot) = tiles.get_mut(y).and_then(|row| row.get_mut(x)) {
                    *slot = tile;
                }
            }
        };

        for command in &scene.commands {
            match command {
                DrawCommand::Background { width, height } => {
                    for y in 0..*height {
                        for x in 0..*width {
                            put(x, y, Tile::Empty);
                        }
                    }
                }
                DrawCommand::Food(cell) => put(cell.x, cell.y, Tile::Food),
                DrawCommand::Segment { cell, head } => {
                    put(cell.x, cell.y, if *head { Tile::Head } else { Tile::Body })
                }
                DrawCommand::Text { .. } => {}
            }
        }

        tiles
    }

    fn render_grid(&self, scene: &RenderFrame) -> Paragraph<'_> {
        let mut lines: Vec<Line> = Self::paint(scene)
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(tile_span).collect::<Vec<_>>()))
            .collect();

        for text in scene.texts() {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Color::White),
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, scene: &RenderFrame, metrics: &GameMetrics) -> Paragraph<'_> {
        let length = scene.segments().count();
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Eaten: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.food_eaten.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Resets: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.resets.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.longest_snake.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
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

fn tile_span(tile: Tile) -> Span<'static> {
    match tile {
        Tile::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Tile::Body => Span::styled("□ ", Style::default().fg(Color::Red)),
        Tile::Food => Span::styled(
            "● ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Tile::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        Tile::Outside => Span::raw("  "),
    }
}
