use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::config::TOTAL_ASSETS;
use crate::utils::{format_clock, format_countdown};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header_info = format!(
        "Signalboard | Server time: {clock} UTC | Next refresh: {countdown}",
        clock = format_clock(Utc::now()),
        countdown = format_countdown(app.countdown.remaining),
    );

    let header = Paragraph::new(header_info)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// Buy/sell and hold/exit counter blocks, each carrying the fixed
/// total-assets figure the source page shows in both slots.
pub fn render_counters(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let buy_sell = format!(
        "Buy: {buy} | Sell: {sell} | Total assets: {TOTAL_ASSETS}",
        buy = app.counts.buy,
        sell = app.counts.sell,
    );
    let buy_sell_block = Paragraph::new(buy_sell)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Buy / Sell"));
    f.render_widget(buy_sell_block, chunks[0]);

    let hold_exit = format!(
        "Hold: {hold} | Exit: {exit} | Total assets: {TOTAL_ASSETS}",
        hold = app.counts.hold,
        exit = app.counts.exit,
    );
    let hold_exit_block = Paragraph::new(hold_exit)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Hold / Exit"));
    f.render_widget(hold_exit_block, chunks[1]);
}

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let refreshed = app
        .last_refreshed
        .map(|ts| ts.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    let footer_text = format!("Last refresh: {refreshed} | r: Refresh now | q: Quit");

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
