use std::collections::HashSet;

use tracing::warn;

use super::error::ConfigError;

/// Built-in word list
pub const ALL_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
    "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
    "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
    "cookie", "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream",
    "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish", "flowers", "follow",
    "fox", "frame", "free", "frequent", "funnel", "green", "guitar", "grocery", "glass", "great",
    "giggle", "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred", "ice",
    "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump", "join",
    "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope", "landscape", "late",
    "laugh", "learning", "lemon", "letter", "lily", "magazine", "marine", "marshmallow", "maze",
    "meditate", "melody", "minute", "monument", "moon", "motorcycle", "mountain", "music",
    "north", "nose", "night", "name", "never", "negotiate", "number", "opposite", "octopus",
    "oak", "order", "open", "polar", "pack", "painting", "person", "picnic", "pillow", "pizza",
    "podcast", "presentation", "puppy", "puzzle", "recipe", "release", "restaurant", "revolve",
    "rewind", "room", "run", "secret", "seed", "ship", "shirt", "should", "small", "spaceship",
    "stargazing", "skill", "street", "style", "sunrise", "taxi", "tidy", "timer", "together",
    "tooth", "tourist", "travel", "truck", "under", "useful", "unicorn", "unique", "uplift",
    "uniform", "vase", "violin", "visitor", "vision", "volume", "view", "walrus", "wander",
    "world", "winter", "well", "whirlwind", "x-ray", "xylophone", "yoga", "yogurt", "yoyo",
    "you", "year", "yummy", "zebra", "zigzag", "zoology", "zone", "zeal",
];

/// Immutable, duplicate-free list of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new(ALL_WORDS.iter().copied())
    }
}

impl WordBank {
    /// Build a bank, keeping the first occurrence of each word
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for word in words {
            let word = word.into();
            if seen.insert(word.clone()) {
                kept.push(word);
            } else {
                warn!(%word, "dropping duplicate word from word bank");
            }
        }
        Self { words: kept }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check the bank can feed a full session of `max_words` rounds
    pub fn validate(&self, max_words: usize) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }
        if let Some(word) = self.words.iter().find(|w| !is_scramblable(w)) {
            return Err(ConfigError::DegenerateWord(word.clone()));
        }
        if self.words.len() < max_words {
            return Err(ConfigError::NotEnoughWords {
                needed: max_words,
                available: self.words.len(),
            });
        }
        Ok(())
    }
}

/// A word can only be scrambled into something different if it has
/// at least two distinct characters
pub fn is_scramblable(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}
