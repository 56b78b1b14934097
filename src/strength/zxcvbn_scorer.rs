//! Pattern-matching scorer backed by the `zxcvbn` crate.

use super::{CrackTimeBucket, Score, StrengthError, StrengthResult, StrengthScorer};
use crate::estimate::round_half_even;
use zxcvbn::time_estimates::CrackTimeSeconds;

/// Scores passphrases with zxcvbn, timing against offline slow hashing
/// at 10^4 guesses per second.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl ZxcvbnScorer {
    pub fn new() -> Self {
        Self
    }
}

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, passphrase: &str, exclusions: &[String]) -> Result<StrengthResult, StrengthError> {
        if passphrase.is_empty() {
            return Err(StrengthError::EmptyPassphrase);
        }

        let inputs: Vec<&str> = exclusions.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(passphrase, &inputs)
            .map_err(|e| StrengthError::Scorer(e.to_string()))?;

        let crack_time_seconds = match entropy.crack_times().offline_slow_hashing_1e4_per_second() {
            CrackTimeSeconds::Integer(s) => s as f64,
            CrackTimeSeconds::Float(s) => s,
        };

        let result = StrengthResult {
            entropy_bits: entropy.guesses_log10() * std::f64::consts::LOG2_10,
            crack_time_seconds,
            crack_time_display: CrackTimeBucket::from_seconds(crack_time_seconds),
            score: Score::new(entropy.score())?,
            calc_time_seconds: round_half_even(entropy.calculation_time().as_secs_f64(), 3),
        };

        tracing::debug!(
            score = result.score.value(),
            entropy_bits = result.entropy_bits,
            exclusions = exclusions.len(),
            "Scored passphrase"
        );

        Ok(result)
    }
}
