use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::surface::{CellCanvas, CellColor};
use crate::metrics::SessionMetrics;

/// Draws a painted [`CellCanvas`] into the terminal
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &CellCanvas, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(metrics), chunks[0]);
        frame.render_widget(self.render_board(canvas), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, canvas: &CellCanvas) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..canvas.rows())
            .map(|row| {
                let spans: Vec<Span> = (0..canvas.cols())
                    .map(|col| cell_span(canvas.get(col, row)))
                    .collect();
                Line::from(spans)
            })
            .collect();

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

    fn render_stats(&self, metrics: &SessionMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                metrics.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Longest: ", label),
            Span::styled(metrics.longest.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(metrics.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to turn | "),
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

// The trailing space is the terminal's version of the one-unit cell gap.
fn cell_span(color: Option<CellColor>) -> Span<'static> {
    match color {
        Some(CellColor::Actor) => Span::styled("■ ", Style::default().fg(Color::Green)),
        Some(CellColor::Target) => Span::styled(
            "■ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GridCell;
    use crate::render::RenderSurface;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_draws_board_into_buffer() {
        let mut canvas = CellCanvas::new(20);
        canvas.clear(100, 60);
        canvas.draw_filled_cell(GridCell::new(0, 0), 19, CellColor::Actor);
        canvas.draw_filled_cell(GridCell::new(80, 40), 19, CellColor::Target);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let renderer = Renderer::new();
        let metrics = SessionMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, &canvas, &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert_eq!(text.matches('■').count(), 2);
        assert!(text.contains("Snake"));
        assert!(text.contains("Resets: 0"));
    }

    #[test]
    fn test_cell_span_symbols() {
        assert_eq!(cell_span(None).content, ". ");
        assert_eq!(cell_span(Some(CellColor::Actor)).content, "■ ");
    }
}
