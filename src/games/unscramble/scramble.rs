use rand::seq::SliceRandom;
use rand::Rng;

use super::error::ConfigError;
use super::words::is_scramblable;

/// Shuffles tried before falling back to a rotation
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Shuffle the characters of `word` until the result differs from it
/// (case-sensitive).
///
/// The loop is capped; if every shuffle happens to reproduce the word, the
/// characters are rotated left by one instead, which always changes a word
/// with at least two distinct characters.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, ConfigError> {
    if !is_scramblable(word) {
        return Err(ConfigError::DegenerateWord(word.to_string()));
    }

    let mut chars: Vec<char> = word.chars().collect();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return Ok(candidate);
        }
    }

    let mut chars: Vec<char> = word.chars().collect();
    chars.rotate_left(1);
    Ok(chars.into_iter().collect())
}
