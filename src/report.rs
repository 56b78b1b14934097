//! Human-readable reports.
//!
//! Every figure goes through [`truncate_to_whole`] and
//! [`group_thousands`] before it is printed.

use crate::estimate::{group_thousands, truncate_to_whole, EntropyReport};
use crate::strength::{Score, StrengthResult};
use crate::wordlist::WordListVariant;

fn display(value: f64) -> String {
    group_thousands(truncate_to_whole(value))
}

/// Header naming the word list in use.
pub fn render_banner(variant: WordListVariant) -> String {
    format!(
        "diceware v{}\nUsing the {} word list ...\n",
        crate::VERSION,
        variant.describe()
    )
}

/// Explains an [`EntropyReport`].
pub fn render_entropy(report: &EntropyReport) -> String {
    let mut lines = vec![
        format!(
            "You chose to create a password of {} words, which is ~{} bits of entropy.",
            report.word_count,
            display(report.entropy_bits)
        ),
        format!(
            "That many words equates to an effective keyspace of ~{} possible keys,",
            display(report.half_key_space)
        ),
        format!(
            "50% of the total keyspace of ~{}, since on average a key is found in that reduced keyspace.",
            display(report.key_space)
        ),
        format!(
            "Assuming an adversary can guess {} keys/second, an exhaustive brute-force search on half the total keyspace might take:",
            display(report.guesses_per_second)
        ),
        String::new(),
    ];

    let rows = [
        (report.seconds, "seconds"),
        (report.minutes, "minutes"),
        (report.hours, "hours"),
        (report.days, "days"),
        (report.years, "years"),
        (report.human_lifetimes, "x avg. lifespan"),
        (report.millennia, "millennia"),
        (report.universe_lifetimes, "x age Universe"),
    ];
    lines.extend(rows.iter().map(|(value, unit)| format!("~{} {}", display(*value), unit)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Republishes a scorer's verdict with the score key.
pub fn render_strength(result: &StrengthResult) -> String {
    let mut lines = vec![
        format!("Entropy: {:.6}", result.entropy_bits),
        format!("Crack Time: {:.6} seconds", result.crack_time_seconds),
        format!("Alternate Crack Time: {}", result.crack_time_display),
        format!("Score: {}", result.score),
        String::new(),
        "Key for score:".to_string(),
    ];
    lines.extend(Score::all().map(|score| format!("{} = {}", score, score.describe())));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
