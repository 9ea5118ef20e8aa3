use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::games::unscramble::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "🔤 Unscramble the word in your terminal")]
#[command(version)]
pub struct Cli {
    /// JSON file with game rules (e.g. {"max_words": 10, "score_increase": 20})
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of words in a session (overrides the config file)
    #[arg(short, long)]
    pub max_words: Option<usize>,

    /// Seed for a repeatable word order
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write logs to this file; the terminal is busy with the game
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config file (if any) with flag overrides applied
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(max_words) = self.max_words {
            config.max_words = max_words;
        }
        Ok(config)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Install the tracing subscriber when a log file was requested
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["unscramble"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("unscramble-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_words": 4, "score_increase": 7}"#).unwrap();

        let cli = Cli::parse_from([
            "unscramble",
            "--config",
            path.to_str().unwrap(),
            "--max-words",
            "6",
        ]);
        let config = cli.game_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.max_words, 6);
        assert_eq!(config.score_increase, 7);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["unscramble", "-c", "/nonexistent/unscramble.json"]);
        assert!(cli.game_config().is_err());
    }

    #[test]
    fn test_seed_gives_repeatable_rng() {
        use rand::Rng;
        let cli = Cli::parse_from(["unscramble", "--seed", "99"]);
        let a: u64 = cli.rng().random();
        let b: u64 = cli.rng().random();
        assert_eq!(a, b);
    }
}
