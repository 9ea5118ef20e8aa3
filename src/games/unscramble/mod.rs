//! Unscramble game module
pub mod config;
pub mod error;
pub mod game;
pub mod renderer;
pub mod scramble;
pub mod state;
pub mod words;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::UnscrambleGame;
pub use renderer::UnscrambleRenderer;
pub use state::{GameState, Phase};
pub use words::WordBank;
