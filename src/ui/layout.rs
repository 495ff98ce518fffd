use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use super::{
    components::{centered_rect, render_counters, render_footer, render_header},
    table::render_signals_table,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header with clock and countdown
            Constraint::Length(3), // Counters
            Constraint::Min(10),   // Signals table
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_counters(f, app, chunks[1]);
    render_signals_table(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    // Error overlay; the stale table stays visible underneath
    if let Some(ref error) = app.error_message {
        let area = centered_rect(60, 20, f.area());
        f.render_widget(Clear, area);
        let error_block = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Error")
                    .style(Style::default().fg(Color::Red)),
            );
        f.render_widget(error_block, area);
    }
}
