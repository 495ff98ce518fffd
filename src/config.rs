// Configuration constants for the application

/// API endpoints
pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:5000";
pub const SIGNALS_PATH: &str = "/api/signals";

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 50;
pub const COUNTDOWN_TICK_MS: u64 = 1000;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Dashboard figures
pub const TOTAL_ASSETS: u64 = 245;

/// Default CLI values
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
