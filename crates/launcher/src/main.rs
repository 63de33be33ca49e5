//! Desktop entry point: parses flags, installs logging and runs the game.
//!
//! Usage:
//!   platformer                     # 800x600 window, 60 ticks/s
//!   platformer --scale 1.5         # bigger window, same field
//!   platformer --inspector --log-level debug

use anyhow::{Context, Result};
use clap::Parser;
use engine_core::{logging, App, AppConfig};
use platformer_game::tunables::TICK_RATE;
use platformer_game::Game;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "platformer")]
#[command(about = "Two-level 2D platformer")]
struct Cli {
    /// Initial window size as a multiple of the 800x600 field
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    scale: f64,

    /// Simulation ticks per second
    #[arg(
        long,
        default_value_t = TICK_RATE,
        value_parser = clap::value_parser!(u32).range(10..=240)
    )]
    tick_rate: u32,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// Open the inspector window on start (F1 toggles it)
    #[arg(long)]
    inspector: bool,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.25..=4.0).contains(&scale) {
        Ok(scale)
    } else {
        Err(format!("{scale} is outside 0.25..=4.0"))
    }
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            title: "Platformer".to_string(),
            scale: self.scale,
            tick_rate: self.tick_rate,
            inspector: self.inspector,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let config = cli.app_config();
    tracing::debug!(?config, "launching");

    App::new(config, Game::new())
        .run()
        .context("the game host stopped with an error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let cli = Cli::parse_from(["platformer"]);
        let config = cli.app_config();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(TICK_RATE, 60);
        assert!(!config.inspector);
        assert_eq!(cli.log_level, Level::INFO);
    }

    #[test]
    fn flags_reach_the_config() {
        let cli = Cli::parse_from([
            "platformer",
            "--scale",
            "1.5",
            "--tick-rate",
            "30",
            "--log-level",
            "debug",
            "--inspector",
        ]);
        let config = cli.app_config();
        assert_eq!(config.scale, 1.5);
        assert_eq!(config.tick_rate, 30);
        assert!(config.inspector);
        assert_eq!(cli.log_level, Level::DEBUG);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Cli::try_parse_from(["platformer", "--scale", "9"]).is_err());
        assert!(Cli::try_parse_from(["platformer", "--tick-rate", "1000"]).is_err());
        assert!(Cli::try_parse_from(["platformer", "--log-level", "loud"]).is_err());
    }
}
