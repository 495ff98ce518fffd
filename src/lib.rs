// Library exports for the signalboard dashboard
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod data;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, Countdown};
pub use cli::Cli;
pub use client::SignalsClient;
pub use data::{PriceBook, PriceDirection, Signal, SignalCounts, SignalRow, SignalType};
pub use ui::render_ui;
pub use utils::*;
