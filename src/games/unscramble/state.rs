use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, error, info};

use super::config::GameConfig;
use super::error::ConfigError;
use super::scramble::scramble;
use super::words::WordBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Finished,
}

/// One presented word: the answer and the letters shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub current_word: String,
    pub scrambled: String,
}

/// Session state of the word-scramble game: word selection, scoring and
/// round progression. No UI concerns live here.
pub struct GameState<R: Rng = StdRng> {
    bank: WordBank,
    config: GameConfig,
    rng: R,
    score: u32,
    word_count: usize,
    used_words: HashSet<String>,
    round: Round,
    phase: Phase,
}

impl<R: Rng> GameState<R> {
    /// Validate the configuration and start the first session
    pub fn new(bank: WordBank, config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        bank.validate(config.max_words)?;

        let mut state = Self {
            bank,
            config,
            rng,
            score: 0,
            word_count: 0,
            used_words: HashSet::new(),
            round: Round {
                current_word: String::new(),
                scrambled: String::new(),
            },
            phase: Phase::InProgress,
        };
        state.reinitialize_data();
        Ok(state)
    }

    /// Reset the session and present the first word
    pub fn reinitialize_data(&mut self) {
        self.score = 0;
        self.word_count = 0;
        self.used_words.clear();
        self.phase = Phase::InProgress;
        self.select_next_word();
        info!(max_words = self.config.max_words, "new session started");
    }

    /// Case-insensitive check of the player's guess. Scores on a match,
    /// never advances.
    pub fn submit_guess(&mut self, player_word: &str) -> bool {
        if self.phase == Phase::Finished {
            debug!("guess submitted after the session finished, ignoring");
            return false;
        }
        if !equals_ignore_case(player_word, &self.round.current_word) {
            return false;
        }
        self.score = self.score.saturating_add(self.config.score_increase);
        debug!(score = self.score, "correct guess");
        true
    }

    /// Move to the next word. Returns `false` once the session is over.
    pub fn advance(&mut self) -> bool {
        if self.phase == Phase::Finished {
            return false;
        }
        if self.word_count >= self.config.max_words || !self.select_next_word() {
            self.phase = Phase::Finished;
            info!(score = self.score, word_count = self.word_count, "session finished");
            return false;
        }
        true
    }

    fn select_next_word(&mut self) -> bool {
        let fresh: Vec<&String> = self
            .bank
            .words()
            .iter()
            .filter(|w| !self.used_words.contains(w.as_str()))
            .collect();
        let Some(word) = fresh.choose(&mut self.rng).map(|w| (*w).clone()) else {
            error!(used = self.used_words.len(), "word bank exhausted");
            return false;
        };

        let scrambled = match scramble(&word, &mut self.rng) {
            Ok(scrambled) => scrambled,
            Err(e) => {
                error!(error = %e, "cannot scramble word");
                return false;
            }
        };

        self.word_count += 1;
        self.used_words.insert(word.clone());
        debug!(word_count = self.word_count, %scrambled, "next word selected");
        self.round = Round {
            current_word: word,
            scrambled,
        };
        true
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn scrambled_word(&self) -> &str {
        &self.round.scrambled
    }

    pub fn max_words(&self) -> usize {
        self.config.max_words
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The answer for the current round. Not for display while the round is live.
    pub fn current_word(&self) -> &str {
        &self.round.current_word
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }
}

/// Character-by-character case-insensitive comparison. Whole-string
/// lowercasing applies context rules (Greek final sigma) and can reject a
/// matching guess.
fn equals_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_match(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_match(x: char, y: char) -> bool {
    x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
}
