//! Passphrase strength scoring.
//!
//! Scoring is a capability behind [`StrengthScorer`]; the crate only
//! republishes what a scorer reports. [`ZxcvbnScorer`] is the stock
//! implementation.

mod result;
mod zxcvbn_scorer;

pub use result::{CrackTimeBucket, Score, StrengthResult};
pub use zxcvbn_scorer::ZxcvbnScorer;

use thiserror::Error;

/// Errors reported by a scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrengthError {
    #[error("cannot score an empty passphrase")]
    EmptyPassphrase,
    #[error("score {0} is outside 0-4")]
    ScoreOutOfRange(u8),
    #[error("strength scorer failed: {0}")]
    Scorer(String),
}

/// Scores a finished passphrase.
///
/// `exclusions` are extra terms the scorer should treat as known, for
/// example the user's name.
pub trait StrengthScorer {
    fn score(&self, passphrase: &str, exclusions: &[String]) -> Result<StrengthResult, StrengthError>;
}

impl<T: StrengthScorer + ?Sized> StrengthScorer for &T {
    fn score(&self, passphrase: &str, exclusions: &[String]) -> Result<StrengthResult, StrengthError> {
        (**self).score(passphrase, exclusions)
    }
}
