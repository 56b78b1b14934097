//! Diceware Passphrase Library
//!
//! Turns physical dice rolls into passphrases drawn from a 7776-word
//! list, and estimates how long an attacker would need to guess them.
//! Physical dice are the entropy source; this crate never generates
//! random rolls itself.
//!
//! # Architecture
//!
//! ```text
//! prompt → wordlist (RollCode → word) → passphrase → strength
//!                  estimate (word count → EntropyReport) → report
//! ```
//!
//! The word-list index and the entropy estimator are independent and
//! hold no shared mutable state. An index is immutable once built and
//! may be shared read-only between threads.
//!
//! # Example
//!
//! ```no_run
//! use diceware::{
//!     estimate::{EntropyEstimator, SNOWDEN_GUESS_RATE},
//!     wordlist::{BuildOptions, RollCode, WordListAsset, WordListVariant},
//! };
//!
//! let asset = WordListAsset::from_path(WordListVariant::Default, "wordlists/diceware.tsv").unwrap();
//! let index = asset.build_index(BuildOptions::default()).unwrap();
//!
//! let rolls: Vec<RollCode> = ["64122", "56666", "65546"]
//!     .iter()
//!     .map(|r| r.parse().unwrap())
//!     .collect();
//! let passphrase = index.resolve(&rolls).unwrap();
//! println!("{}", passphrase);
//!
//! let report = EntropyEstimator::for_index(&index)
//!     .unwrap()
//!     .estimate(rolls.len() as u32, SNOWDEN_GUESS_RATE)
//!     .unwrap();
//! println!("{} bits", report.entropy_bits);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod estimate;
pub mod metrics;
pub mod prompt;
pub mod report;
pub mod strength;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use config::FileConfig;
pub use estimate::{EntropyEstimator, EntropyReport};
pub use strength::{StrengthResult, StrengthScorer, ZxcvbnScorer};
pub use wordlist::{BuildOptions, Passphrase, RollCode, WordListAsset, WordListIndex, WordListVariant};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
