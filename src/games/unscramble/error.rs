use thiserror::Error;

/// Startup configuration failures. A game never starts with any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word bank is empty")]
    EmptyWordBank,

    #[error("word '{0}' needs at least two distinct characters to be scrambled")]
    DegenerateWord(String),

    #[error("a session of {needed} words needs {needed} distinct words, the bank has {available}")]
    NotEnoughWords { needed: usize, available: usize },

    #[error("max_words must be at least 1")]
    ZeroMaxWords,
}
