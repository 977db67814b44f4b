use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::Rgb;
use crate::metrics::GameMetrics;

use super::surface::Canvas;

/// Terminal columns used for one grid cell, so cells look square
const COLUMNS_PER_CELL: u16 = 2;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &Canvas, length: usize, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(length, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = self.board_area(chunks[1], canvas);
        frame.render_widget(self.render_board(canvas), board_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Center the board, bordered, inside the available area
    fn board_area(&self, area: Rect, canvas: &Canvas) -> Rect {
        let width = u16::try_from(canvas.columns())
            .unwrap_or(u16::MAX)
            .saturating_mul(COLUMNS_PER_CELL)
            .saturating_add(2);
        let height = u16::try_from(canvas.rows())
            .unwrap_or(u16::MAX)
            .saturating_add(2);

        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width),
                Constraint::Fill(1),
            ])
            .split(area)[1];

        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(height), Constraint::Fill(1)])
            .split(column)[0]
    }

    fn render_board(&self, canvas: &Canvas) -> Paragraph<'static> {
        let lines: Vec<Line> = canvas
            .rows_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell.border {
                        // One-eighth blocks on both sides stand in for the outline
                        Some(border) => Span::styled(
                            "▏▕",
                            Style::default().fg(color(border)).bg(color(cell.fill)),
                        ),
                        None => Span::styled("  ", Style::default().bg(color(cell.fill))),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, length: usize, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.longest.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Resets: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.resets.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
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
