use clap::Parser;
use crate::config::{DEFAULT_API_HOST, DEFAULT_REFRESH_INTERVAL_SECS};

#[derive(Parser)]
#[command(name = "signalboard")]
#[command(about = "Terminal dashboard for live trading signals")]
pub struct Cli {
    /// Base URL of the signal API (e.g. "http://127.0.0.1:5000")
    #[arg(long, default_value = DEFAULT_API_HOST)]
    pub host: String,

    /// Refresh interval in seconds (1-59, so it fits the 0:SS display)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_REFRESH_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..=59)
    )]
    pub interval: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_must_fit_the_countdown_display() {
        assert!(Cli::try_parse_from(["signalboard", "--interval", "45"]).is_ok());
        assert!(Cli::try_parse_from(["signalboard", "--interval", "0"]).is_err());
        assert!(Cli::try_parse_from(["signalboard", "--interval", "120"]).is_err());
    }

    #[test]
    fn interval_defaults_to_a_full_countdown() {
        let cli = Cli::try_parse_from(["signalboard"]).unwrap();
        assert_eq!(cli.interval, DEFAULT_REFRESH_INTERVAL_SECS);
    }
}
