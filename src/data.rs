use serde::Deserialize;
use std::collections::HashMap;
use strum::EnumString;

/// One signal row as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub signal_type: String,
    pub current_price: f64,
    pub signal_update_time: String,
}

impl Signal {
    /// The recognized signal category, if any. Matching is case-insensitive;
    /// anything outside the four known types yields `None`.
    pub fn kind(&self) -> Option<SignalType> {
        self.signal_type.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceDirection {
    Up,
    Down,
    #[default]
    Flat,
}

impl PriceDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "",
        }
    }
}

/// Last observed price per symbol. Owned by the `App` rather than living in
/// a global; grows with distinct symbols and is never pruned.
#[derive(Debug, Default)]
pub struct PriceBook {
    last_prices: HashMap<String, f64>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a price against the last one seen for the symbol and record
    /// the new price. A strictly higher price moves up, equal-or-lower moves
    /// down, and a first sighting has no direction.
    pub fn observe(&mut self, symbol: &str, price: f64) -> PriceDirection {
        let direction = match self.last_prices.get(symbol) {
            Some(&previous) if price > previous => PriceDirection::Up,
            Some(_) => PriceDirection::Down,
            None => PriceDirection::Flat,
        };
        self.last_prices.insert(symbol.to_string(), price);
        direction
    }

    pub fn len(&self) -> usize {
        self.last_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_prices.is_empty()
    }
}

/// Render model for one table row: the signal plus its computed direction.
#[derive(Debug, Clone)]
pub struct SignalRow {
    pub signal: Signal,
    pub direction: PriceDirection,
}

/// Aggregate counts per signal category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalCounts {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
    pub exit: usize,
}

impl SignalCounts {
    pub fn tally(signals: &[Signal]) -> Self {
        let mut counts = Self::default();
        for signal in signals {
            match signal.kind() {
                Some(SignalType::Buy) => counts.buy += 1,
                Some(SignalType::Sell) => counts.sell += 1,
                Some(SignalType::Hold) => counts.hold += 1,
                Some(SignalType::Exit) => counts.exit += 1,
                None => {}
            }
        }
        counts
    }
}
