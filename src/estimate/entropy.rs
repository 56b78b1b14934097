//! Keyspace and brute-force duration estimates.
//!
//! Assumes the attacker knows the word list and the word count, and on
//! average succeeds after searching half of the keyspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wordlist::{WordListIndex, ROLL_SPACE};

/// "Assume that your adversary is capable of a trillion guesses per second."
pub const SNOWDEN_GUESS_RATE: f64 = 1e12;

/// Average human lifespan in years.
pub const HUMAN_LIFESPAN_YEARS: f64 = 67.2;

/// Age of the universe in years.
pub const UNIVERSE_AGE_YEARS: f64 = 13_798_000_000.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;
// No leap-year correction.
const DAYS_PER_YEAR: f64 = 365.0;
const YEARS_PER_MILLENNIUM: f64 = 1000.0;

/// Invalid estimator input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("word count must be positive")]
    InvalidWordCount,
    #[error("guess rate must be a positive finite number, got {0}")]
    InvalidGuessRate(f64),
    #[error("word list must contain at least two words, got {0}")]
    InvalidListSize(usize),
}

/// Strength of a passphrase of a given length against exhaustive search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    pub word_count: u32,
    pub guesses_per_second: f64,
    /// Total entropy in bits.
    pub entropy_bits: f64,
    /// Number of distinct passphrases.
    pub key_space: f64,
    /// Keyspace an attacker is expected to search.
    pub half_key_space: f64,
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
    pub millennia: f64,
    pub human_lifetimes: f64,
    pub universe_lifetimes: f64,
}

/// Computes [`EntropyReport`]s for a word list of fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimator {
    list_size: usize,
    bits_per_word: f64,
}

impl EntropyEstimator {
    /// Creates an estimator for a list of `list_size` words.
    pub fn new(list_size: usize) -> Result<Self, EstimateError> {
        if list_size < 2 {
            return Err(EstimateError::InvalidListSize(list_size));
        }
        // Two decimals, as quoted for diceware (12.92 bits/word for 7776 words).
        let bits_per_word = ((list_size as f64).log2() * 100.0).round() / 100.0;
        Ok(Self {
            list_size,
            bits_per_word,
        })
    }

    /// Creates an estimator sized to `index`.
    pub fn for_index(index: &WordListIndex) -> Result<Self, EstimateError> {
        Self::new(index.len())
    }

    pub fn list_size(&self) -> usize {
        self.list_size
    }

    /// Entropy contributed by each uniformly drawn word.
    pub fn bits_per_word(&self) -> f64 {
        self.bits_per_word
    }

    /// Estimates strength of `word_count` words against `guesses_per_second`.
    pub fn estimate(&self, word_count: u32, guesses_per_second: f64) -> Result<EntropyReport, EstimateError> {
        if word_count == 0 {
            return Err(EstimateError::InvalidWordCount);
        }
        if !(guesses_per_second.is_finite() && guesses_per_second > 0.0) {
            return Err(EstimateError::InvalidGuessRate(guesses_per_second));
        }

        let words = f64::from(word_count);
        let entropy_bits = self.bits_per_word * words;
        let key_space = (self.list_size as f64).powf(words);
        let half_key_space = key_space / 2.0;

        let seconds = half_key_space / guesses_per_second;
        let minutes = seconds / SECONDS_PER_MINUTE;
        let hours = minutes / MINUTES_PER_HOUR;
        let days = hours / HOURS_PER_DAY;
        let years = days / DAYS_PER_YEAR;

        let report = EntropyReport {
            word_count,
            guesses_per_second,
            entropy_bits,
            key_space,
            half_key_space,
            seconds,
            minutes,
            hours,
            days,
            years,
            millennia: years / YEARS_PER_MILLENNIUM,
            human_lifetimes: years / HUMAN_LIFESPAN_YEARS,
            universe_lifetimes: years / UNIVERSE_AGE_YEARS,
        };

        tracing::debug!(
            word_count,
            guesses_per_second,
            entropy_bits = report.entropy_bits,
            years = report.years,
            "Computed entropy estimate"
        );

        Ok(report)
    }
}

impl Default for EntropyEstimator {
    fn default() -> Self {
        Self {
            list_size: ROLL_SPACE,
            bits_per_word: 12.92,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-12;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected:e}, got {actual:e}"
        );
    }

    #[test]
    fn test_bits_per_word_derived_from_list_size() {
        assert_eq!(EntropyEstimator::new(7776).unwrap(), EntropyEstimator::default());
        assert_eq!(EntropyEstimator::new(7776).unwrap().bits_per_word(), 12.92);
        assert_eq!(EntropyEstimator::new(1024).unwrap().bits_per_word(), 10.0);
        assert!(matches!(
            EntropyEstimator::new(1),
            Err(EstimateError::InvalidListSize(1))
        ));
    }

    #[test]
    fn test_eight_words_at_a_trillion_guesses() {
        let report = EntropyEstimator::default().estimate(8, SNOWDEN_GUESS_RATE).unwrap();

        assert_eq!(report.entropy_bits, 103.36);
        assert_close(report.half_key_space, 6.683747269421867e30);
        assert_close(report.seconds, 6.683747269421867e18);
        assert_close(report.minutes, 1.1139578782369778e17);
        assert_close(report.hours, 1.8565964637282962e15);
        assert_close(report.days, 7.735818598867902e13);
        assert_close(report.years, 2.1194023558542197e11);
        assert_close(report.human_lifetimes, 3.1538725533544936e9);
        assert_close(report.millennia, 2.1194023558542198e8);
        assert_close(report.universe_lifetimes, 15.360214203900707);
    }

    #[test]
    fn test_single_word_is_well_formed() {
        let report = EntropyEstimator::default().estimate(1, 1.0).unwrap();
        assert_eq!(report.key_space, 7776.0);
        assert_eq!(report.half_key_space, 3888.0);
        assert_eq!(report.seconds, 3888.0);
        assert_close(report.hours, 1.08);
        assert!(report.universe_lifetimes > 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let estimator = EntropyEstimator::default();
        assert_eq!(estimator.estimate(0, 1e12), Err(EstimateError::InvalidWordCount));
        assert!(matches!(
            estimator.estimate(6, 0.0),
            Err(EstimateError::InvalidGuessRate(_))
        ));
        assert!(estimator.estimate(6, -1.0).is_err());
        assert!(estimator.estimate(6, f64::NAN).is_err());
        assert!(estimator.estimate(6, f64::INFINITY).is_err());
    }

    proptest! {
        #[test]
        fn durations_positive_and_ordered(words in 1u32..=12, rate in 1e-3f64..1e15) {
            let r = EntropyEstimator::default().estimate(words, rate).unwrap();
            prop_assert!(r.seconds > 0.0);
            prop_assert!(r.seconds > r.minutes && r.minutes > r.hours && r.hours > r.days);
            prop_assert!(r.days > r.years && r.years > r.millennia);
            prop_assert!(r.human_lifetimes > r.universe_lifetimes);
            prop_assert_eq!(r.half_key_space * 2.0, r.key_space);
        }
    }
}
