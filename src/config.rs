//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "A countdown timer served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial countdown duration in seconds
    #[arg(short, long)]
    pub duration: Option<u64>,

    /// Milliseconds between ticks
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["countdown-timer"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.duration, None);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "countdown-timer", "--host", "127.0.0.1", "-p", "8080", "-d", "90", "--tick-ms", "250", "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.duration, Some(90));
        assert_eq!(config.tick_period(), Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_tick_period() {
        assert!(Config::try_parse_from(["countdown-timer", "--tick-ms", "0"]).is_err());
    }
}
