//! Roll codes: one throw of five six-sided dice.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of dice thrown per roll.
pub const DICE_PER_ROLL: usize = 5;

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// Number of distinct roll codes (6^5).
pub const ROLL_SPACE: usize = 7776;

/// Errors produced when validating a roll code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollCodeError {
    #[error("you must input exactly {expected} digits, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("each digit must be between 1 and 6, found {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// A validated roll of five dice, each face in `1..=6`.
///
/// Stored as ASCII digits so it can be used as a lookup key and
/// rendered without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollCode([u8; DICE_PER_ROLL]);

impl RollCode {
    /// Creates a roll code from face values.
    pub fn from_dice(dice: [u8; DICE_PER_ROLL]) -> Result<Self, RollCodeError> {
        let mut digits = [0u8; DICE_PER_ROLL];
        for (position, (&face, slot)) in dice.iter().zip(digits.iter_mut()).enumerate() {
            if face == 0 || face > FACES {
                return Err(RollCodeError::InvalidDigit {
                    position,
                    found: char::from_digit(u32::from(face), 10).unwrap_or('?'),
                });
            }
            *slot = b'0' + face;
        }
        Ok(Self(digits))
    }

    /// Creates the roll code at `ordinal` in lexicographic order.
    ///
    /// Returns `None` if `ordinal >= ROLL_SPACE`.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal >= ROLL_SPACE {
            return None;
        }
        let mut digits = [b'1'; DICE_PER_ROLL];
        let mut rest = ordinal;
        for slot in digits.iter_mut().rev() {
            *slot = b'1' + (rest % FACES as usize) as u8;
            rest /= FACES as usize;
        }
        Some(Self(digits))
    }

    /// Position of this code among all 7776 codes, `11111` being 0.
    pub fn ordinal(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, &d| acc * FACES as usize + (d - b'1') as usize)
    }

    /// Face values of the five dice.
    pub fn dice(&self) -> [u8; DICE_PER_ROLL] {
        self.0.map(|d| d - b'0')
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Digits are always ASCII '1'..='6'.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Iterates every roll code in lexicographic order.
    pub fn all() -> impl Iterator<Item = RollCode> {
        (0..ROLL_SPACE).filter_map(Self::from_ordinal)
    }
}

impl FromStr for RollCode {
    type Err = RollCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != DICE_PER_ROLL {
            return Err(RollCodeError::WrongLength {
                expected: DICE_PER_ROLL,
                found,
            });
        }

        let mut digits = [0u8; DICE_PER_ROLL];
        for (position, (c, slot)) in s.chars().zip(digits.iter_mut()).enumerate() {
            if !('1'..='6').contains(&c) {
                return Err(RollCodeError::InvalidDigit { position, found: c });
            }
            *slot = c as u8;
        }
        Ok(Self(digits))
    }
}

impl TryFrom<&str> for RollCode {
    type Error = RollCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RollCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
