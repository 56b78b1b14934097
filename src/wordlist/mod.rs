//! Word lists and roll resolution.
//!
//! A diceware word list maps each of the 7776 possible five-dice rolls to
//! one word. This module parses those tables, guarantees they are complete,
//! and turns rolls into passphrases.

mod asset;
pub(crate) mod index;
mod roll;

pub use asset::{WordListAsset, WordListVariant};
pub use index::{BuildOptions, Passphrase, WordListError, WordListIndex};
pub use roll::{RollCode, RollCodeError, DICE_PER_ROLL, FACES, ROLL_SPACE};
