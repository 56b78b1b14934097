//! Scorer output types.

use super::StrengthError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MINUTE: f64 = 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const MONTH: f64 = DAY * 31.0;
const YEAR: f64 = MONTH * 12.0;
const CENTURY: f64 = YEAR * 100.0;

/// Coarse label for an estimated crack time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrackTimeBucket {
    Instant,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    Centuries,
}

impl CrackTimeBucket {
    /// Buckets a duration in seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        match seconds {
            s if s < 1.0 => Self::Instant,
            s if s < MINUTE => Self::Seconds,
            s if s < HOUR => Self::Minutes,
            s if s < DAY => Self::Hours,
            s if s < MONTH => Self::Days,
            s if s < YEAR => Self::Months,
            s if s < CENTURY => Self::Years,
            _ => Self::Centuries,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
            Self::Centuries => "centuries",
        }
    }
}

impl fmt::Display for CrackTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative score in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, StrengthError> {
        if value > Self::MAX {
            return Err(StrengthError::ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// What the score means for an attacker.
    pub fn describe(&self) -> &'static str {
        match self.0 {
            0 => "too guessable: risky password",
            1 => "very guessable: protection from throttled online attacks",
            2 => "somewhat guessable: protection from unthrottled online attacks",
            3 => "safely unguessable: moderate protection from offline slow-hash scenario",
            _ => "very unguessable: strong protection from offline slow-hash scenario",
        }
    }

    /// Every score, weakest first.
    pub fn all() -> impl Iterator<Item = Score> {
        (0..=Self::MAX).map(Score)
    }
}

impl TryFrom<u8> for Score {
    type Error = StrengthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a scorer reports for one passphrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub entropy_bits: f64,
    pub crack_time_seconds: f64,
    pub crack_time_display: CrackTimeBucket,
    pub score: Score,
    /// Time the scorer spent, in seconds.
    pub calc_time_seconds: f64,
}
