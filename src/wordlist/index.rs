//! Roll code to word lookup.
//!
//! The index is built once from a complete tab-separated table and is
//! immutable afterwards, so it can be shared read-only between callers.

use super::roll::{RollCode, RollCodeError, ROLL_SPACE};
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use thiserror::Error;

/// Errors raised while building or querying a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("malformed word list, line {line}: expected 2 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("malformed word list, line {line}: {source}")]
    BadRollCode {
        line: usize,
        #[source]
        source: RollCodeError,
    },
    #[error("malformed word list, line {line}: empty word")]
    EmptyWord { line: usize },
    #[error("malformed word list, failed reading after line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("duplicate roll code {code} at line {line}")]
    DuplicateRoll { line: usize, code: RollCode },
    #[error("expected exactly {expected} words in word list, but found {found}")]
    Incomplete { expected: usize, found: usize },
    #[error("roll {0} has no entry in the word list")]
    UnresolvedRoll(RollCode),
    #[error("failed to open word list {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("word list digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },
}

impl WordListError {
    /// Returns true for structural violations of the two-column format.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::FieldCount { .. }
                | Self::BadRollCode { .. }
                | Self::EmptyWord { .. }
                | Self::Read { .. }
        )
    }
}

/// Options controlling how a table is turned into an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fail on a repeated roll code instead of letting the later row win.
    pub strict: bool,
}

impl BuildOptions {
    /// Options that reject duplicate roll codes.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Complete mapping from every roll code to a word.
#[derive(Debug, Clone)]
pub struct WordListIndex {
    words: HashMap<RollCode, String>,
}

impl WordListIndex {
    /// Builds an index from a tab-separated table using lenient options.
    pub fn build<R: BufRead>(source: R) -> Result<Self, WordListError> {
        Self::build_with(source, BuildOptions::default())
    }

    /// Builds an index from a tab-separated table.
    ///
    /// Each non-blank line must hold exactly a roll code and a word. The
    /// whole stream is consumed before the entry count is checked; anything
    /// other than exactly 7776 distinct codes fails the build.
    pub fn build_with<R: BufRead>(source: R, options: BuildOptions) -> Result<Self, WordListError> {
        let mut words = HashMap::with_capacity(ROLL_SPACE);
        let mut overwritten = 0usize;
        let mut line_no = 0usize;

        for line in source.lines() {
            let line = line.map_err(|source| WordListError::Read {
                line: line_no,
                source,
            })?;
            line_no += 1;

            let record = line.strip_suffix('\r').unwrap_or(&line);
            if record.is_empty() {
                continue;
            }

            let (code, word) = parse_record(record, line_no)?;
            if words.contains_key(&code) {
                if options.strict {
                    return Err(WordListError::DuplicateRoll {
                        line: line_no,
                        code,
                    });
                }
                overwritten += 1;
            }
            words.insert(code, word.to_owned());
        }

        if overwritten > 0 {
            tracing::warn!(overwritten, "Word list repeats roll codes; later rows won");
        }

        if words.len() != ROLL_SPACE {
            return Err(WordListError::Incomplete {
                expected: ROLL_SPACE,
                found: words.len(),
            });
        }

        tracing::debug!(entries = words.len(), lines = line_no, "Built word list index");
        Ok(Self { words })
    }

    /// Looks up a single roll code.
    pub fn word(&self, code: &RollCode) -> Option<&str> {
        self.words.get(code).map(String::as_str)
    }

    /// Resolves rolls to words, keeping their order.
    pub fn resolve(&self, rolls: &[RollCode]) -> Result<Passphrase, WordListError> {
        let words = rolls
            .iter()
            .map(|code| {
                self.word(code)
                    .map(str::to_owned)
                    .ok_or(WordListError::UnresolvedRoll(*code))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rolls = rolls.len(), "Resolved rolls to words");
        Ok(Passphrase { words })
    }

    /// Number of entries (always 7776 for a built index).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a built index.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates entries in roll code order.
    pub fn entries(&self) -> impl Iterator<Item = (RollCode, &str)> + '_ {
        RollCode::all().filter_map(move |code| self.word(&code).map(|w| (code, w)))
    }
}

fn parse_record(record: &str, line: usize) -> Result<(RollCode, &str), WordListError> {
    let fields: Vec<&str> = record.split('\t').collect();
    let [code, word] = fields[..] else {
        return Err(WordListError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let code = code
        .parse::<RollCode>()
        .map_err(|source| WordListError::BadRollCode { line, source })?;
    if word.is_empty() {
        return Err(WordListError::EmptyWord { line });
    }
    Ok((code, word))
}

/// Resolved words in roll order. The order is the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<String>,
}

impl Passphrase {
    /// The words, one per roll.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no rolls were resolved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Joins the words with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }

    /// Consumes the passphrase, returning its words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" "))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) const GOLDEN_ROLLS: [&str; 8] = [
        "64122", "56666", "65546", "25231", "41321", "23656", "21361", "61243",
    ];

    /// Full table with a synthetic word per code, overridden by `fixed`.
    pub(crate) fn synthetic_table(fixed: &[(&str, &str)]) -> String {
        let fixed: HashMap<&str, &str> = fixed.iter().copied().collect();
        RollCode::all()
            .map(|code| {
                let word = fixed
                    .get(code.as_str())
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| format!("w{}", code.ordinal()));
                format!("{}\t{}\n", code, word)
            })
            .collect()
    }

    fn rolls(codes: &[&str]) -> Vec<RollCode> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_build_complete_table() {
        let index = WordListIndex::build(synthetic_table(&[]).as_bytes()).unwrap();
        assert_eq!(index.len(), ROLL_SPACE);
        assert_eq!(index.word(&"11111".parse().unwrap()), Some("w0"));
        assert_eq!(index.word(&"66666".parse().unwrap()), Some("w7775"));
    }

    #[test]
    fn test_resolve_default_golden_words() {
        let expected = ["whim", "the", "44", "far", "lw", "dyke", "coot", "tift"];
        let fixed: Vec<(&str, &str)> = GOLDEN_ROLLS.iter().copied().zip(expected).collect();
        let index = WordListIndex::build(synthetic_table(&fixed).as_bytes()).unwrap();

        let passphrase = index.resolve(&rolls(&GOLDEN_ROLLS)).unwrap();
        assert_eq!(passphrase.words(), expected);
        assert_eq!(passphrase.to_string(), "whim the 44 far lw dyke coot tift");
    }

    #[test]
    fn test_resolve_alternate_golden_words() {
        let expected = ["wm", "tile", "222", "faze", "madam", "ears", "coral", "toni"];
        let fixed: Vec<(&str, &str)> = GOLDEN_ROLLS.iter().copied().zip(expected).collect();
        let index = WordListIndex::build(synthetic_table(&fixed).as_bytes()).unwrap();

        let passphrase = index.resolve(&rolls(&GOLDEN_ROLLS)).unwrap();
        assert_eq!(passphrase.into_words(), expected);
    }

    #[test]
    fn test_resolve_keeps_order_and_repeats() {
        let index = WordListIndex::build(synthetic_table(&[]).as_bytes()).unwrap();
        let passphrase = index.resolve(&rolls(&["66666", "11111", "66666"])).unwrap();
        assert_eq!(passphrase.words(), ["w7775", "w0", "w7775"]);
    }

    #[test]
    fn test_absent_code_is_unresolved() {
        let index = WordListIndex {
            words: HashMap::new(),
        };
        let code: RollCode = "11111".parse().unwrap();
        assert!(matches!(
            index.resolve(&[code]),
            Err(WordListError::UnresolvedRoll(missing)) if missing == code
        ));
    }

    #[test]
    fn test_missing_entry_is_incomplete() {
        let table: String = synthetic_table(&[]).lines().skip(1).map(|l| format!("{l}\n")).collect();
        assert!(matches!(
            WordListIndex::build(table.as_bytes()),
            Err(WordListError::Incomplete {
                expected: 7776,
                found: 7775
            })
        ));
    }

    #[test]
    fn test_duplicate_last_write_wins() {
        let mut table = synthetic_table(&[]);
        table.push_str("11111\toverride\n");
        let index = WordListIndex::build(table.as_bytes()).unwrap();
        assert_eq!(index.word(&"11111".parse().unwrap()), Some("override"));
    }

    #[test]
    fn test_duplicate_rejected_in_strict_mode() {
        let mut table = synthetic_table(&[]);
        table.push_str("11111\toverride\n");
        let err = WordListIndex::build_with(table.as_bytes(), BuildOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            WordListError::DuplicateRoll { line: 7777, .. }
        ));
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let mut table = synthetic_table(&[]);
        table.insert_str(0, "11111\ta\tb\n");
        let err = WordListIndex::build(table.as_bytes()).unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(err, WordListError::FieldCount { line: 1, found: 3 }));

        let err = WordListIndex::build("11111 word\n".as_bytes()).unwrap_err();
        assert!(matches!(err, WordListError::FieldCount { line: 1, found: 1 }));
    }

    #[test]
    fn test_non_roll_key_is_malformed() {
        let err = WordListIndex::build("70000\tword\n".as_bytes()).unwrap_err();
        assert!(matches!(err, WordListError::BadRollCode { line: 1, .. }));
    }

    #[test]
    fn test_empty_word_is_malformed() {
        let err = WordListIndex::build("11111\t\n".as_bytes()).unwrap_err();
        assert!(matches!(err, WordListError::EmptyWord { line: 1 }));
    }

    #[test]
    fn test_crlf_and_blank_lines_accepted() {
        let table = synthetic_table(&[]).replace('\n', "\r\n\n");
        let index = WordListIndex::build(table.as_bytes()).unwrap();
        assert_eq!(index.word(&"12345".parse().unwrap()), Some("w310"));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut bytes = synthetic_table(&[]).into_bytes();
        bytes.extend_from_slice(b"11111\t\xff\xfe\n");
        let err = WordListIndex::build(&bytes[..]).unwrap_err();
        assert!(matches!(err, WordListError::Read { line: 7776, .. }));
    }

    #[test]
    fn test_entries_in_roll_order() {
        let index = WordListIndex::build(synthetic_table(&[]).as_bytes()).unwrap();
        let first: Vec<_> = index.entries().take(2).collect();
        assert_eq!(first[0].0.as_str(), "11111");
        assert_eq!(first[1], ("11112".parse().unwrap(), "w1"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn dropping_codes_fails_build(drop in 1usize..50) {
            let table: String = synthetic_table(&[])
                .lines()
                .skip(drop)
                .map(|l| format!("{l}\n"))
                .collect();
            let is_incomplete = matches!(
                WordListIndex::build(table.as_bytes()),
                Err(WordListError::Incomplete { found, .. }) if found == ROLL_SPACE - drop
            );
            prop_assert!(is_incomplete);
        }

        #[test]
        fn resolve_is_deterministic(ordinals in proptest::collection::vec(0usize..ROLL_SPACE, 0..12)) {
            let index = WordListIndex::build(synthetic_table(&[]).as_bytes()).unwrap();
            let codes: Vec<RollCode> = ordinals.iter().filter_map(|&o| RollCode::from_ordinal(o)).collect();

            let first = index.resolve(&codes).unwrap();
            let second = index.resolve(&codes).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), codes.len());
            for (word, ordinal) in first.words().iter().zip(&ordinals) {
                prop_assert_eq!(word, &format!("w{ordinal}"));
            }
        }
    }
}
