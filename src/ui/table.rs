use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::PriceDirection;
use crate::utils::format_signal_time;

pub fn render_signals_table(f: &mut Frame, app: &App, area: Rect) {
    if app.rows.is_empty() {
        let placeholder = Paragraph::new("Waiting for signals...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Signals"));
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec!["#", "Symbol", "Signal", "Price", "Updated"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let price_style = match row.direction {
                PriceDirection::Up => Style::default().fg(Color::Green),
                PriceDirection::Down => Style::default().fg(Color::Red),
                PriceDirection::Flat => Style::default(),
            };
            let price_text = match row.direction {
                PriceDirection::Flat => format!("{}", row.signal.current_price),
                _ => format!("{} {}", row.signal.current_price, row.direction.arrow()),
            };

            Row::new(vec![
                Cell::from(format!("{}.", i + 1)),
                Cell::from(row.signal.symbol.clone()),
                Cell::from(row.signal.signal_type.clone()),
                Cell::from(price_text).style(price_style),
                Cell::from(format_signal_time(&row.signal.signal_update_time)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Signals"));

    f.render_widget(table, area);
}
