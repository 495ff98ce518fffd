//! Core application state and the fetch-and-render cycle

use anyhow::Result;
use chrono::{DateTime, Utc};
use cli_log::*;

use crate::client::SignalsClient;
use crate::data::{PriceBook, Signal, SignalCounts, SignalRow};
use super::countdown::Countdown;

pub struct App {
    // Core client and data
    pub client: SignalsClient,
    pub rows: Vec<SignalRow>,
    pub counts: SignalCounts,
    pub price_book: PriceBook,

    // Timing and updates
    pub countdown: Countdown,
    pub last_refreshed: Option<DateTime<Utc>>,

    // UI state
    pub error_message: Option<String>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(host: &str, interval_secs: u64) -> Self {
        Self {
            client: SignalsClient::new(host),
            rows: Vec::new(),
            counts: SignalCounts::default(),
            price_book: PriceBook::new(),
            countdown: Countdown::new(interval_secs),
            last_refreshed: None,
            error_message: None,
            needs_redraw: true,
        }
    }

    /// Fetch the signal list and rebuild the table state. A failed fetch
    /// keeps the previous rows and counts on screen and records the error
    /// for the overlay instead of propagating it.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.client.get_signals().await {
            Ok(signals) => {
                info!("Loaded {} signals", signals.len());
                self.apply_signals(signals);
            }
            Err(e) => {
                warn!("Failed to load signals: {e:#}");
                self.error_message = Some(format!("Failed to load signals: {e:#}"));
                self.needs_redraw = true;
            }
        }
        Ok(())
    }

    /// Replace the table contents with a freshly fetched signal list, in
    /// returned order, computing each row's direction against the price book.
    pub fn apply_signals(&mut self, signals: Vec<Signal>) {
        self.counts = SignalCounts::tally(&signals);
        self.rows = signals
            .into_iter()
            .map(|signal| {
                let direction = self
                    .price_book
                    .observe(&signal.symbol, signal.current_price);
                SignalRow { signal, direction }
            })
            .collect();
        self.error_message = None;
        self.last_refreshed = Some(Utc::now());
        self.needs_redraw = true;
    }

    /// One-second tick: advance the countdown and report whether a refresh
    /// is due. The clock display is driven separately by the render pass.
    pub fn tick_countdown(&mut self) -> bool {
        self.needs_redraw = true;
        self.countdown.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PriceDirection;

    fn signal(symbol: &str, signal_type: &str, price: f64) -> Signal {
        Signal {
            symbol: symbol.to_string(),
            signal_type: signal_type.to_string(),
            current_price: price,
            signal_update_time: "2024-03-05T07:08:09Z".to_string(),
        }
    }

    fn app() -> App {
        App::new("http://127.0.0.1:0", 30)
    }

    #[test]
    fn directions_are_recomputed_across_renders() {
        let mut app = app();

        app.apply_signals(vec![signal("BTC/USDT", "buy", 64000.0)]);
        assert_eq!(app.rows[0].direction, PriceDirection::Flat);

        app.apply_signals(vec![signal("BTC/USDT", "buy", 64100.0)]);
        assert_eq!(app.rows[0].direction, PriceDirection::Up);

        app.apply_signals(vec![signal("BTC/USDT", "buy", 64050.0)]);
        assert_eq!(app.rows[0].direction, PriceDirection::Down);
    }

    #[test]
    fn apply_replaces_rows_and_retallies_counts() {
        let mut app = app();
        app.apply_signals(vec![
            signal("A", "buy", 1.0),
            signal("B", "SELL", 2.0),
            signal("C", "hold", 3.0),
        ]);
        assert_eq!(app.rows.len(), 3);
        assert_eq!(app.counts.buy, 1);
        assert_eq!(app.counts.sell, 1);

        app.apply_signals(vec![signal("D", "exit", 4.0)]);
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.counts.buy, 0);
        assert_eq!(app.counts.exit, 1);
        // The price book remembers symbols from earlier renders
        assert_eq!(app.price_book.len(), 4);
    }

    #[test]
    fn successful_apply_clears_a_previous_error() {
        let mut app = app();
        app.error_message = Some("Failed to load signals: boom".to_string());
        app.apply_signals(vec![signal("A", "buy", 1.0)]);
        assert!(app.error_message.is_none());
        assert!(app.last_refreshed.is_some());
    }

    #[test]
    fn countdown_tick_requests_redraw() {
        let mut app = app();
        app.needs_redraw = false;
        let fired = app.tick_countdown();
        assert!(!fired);
        assert!(app.needs_redraw);
        assert_eq!(app.countdown.remaining, 29);
    }
}
