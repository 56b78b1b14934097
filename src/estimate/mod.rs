//! Entropy and brute-force time estimation.
//!
//! Pure computations over a word count and an assumed guess rate. Raw
//! reports are exact; the helpers in [`format`] are applied only when a
//! report is displayed.

mod entropy;
pub mod format;

pub use entropy::{
    EntropyEstimator, EntropyReport, EstimateError, HUMAN_LIFESPAN_YEARS, SNOWDEN_GUESS_RATE,
    UNIVERSE_AGE_YEARS,
};
pub use format::{group_thousands, round_half_even, truncate_to_whole};
