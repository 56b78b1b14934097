//! Word-list assets.
//!
//! A word list is held as owned, immutable bytes with a BLAKE3
//! fingerprint. Indexes are built from an asset explicitly; there is no
//! process-wide list.

use super::index::{BuildOptions, WordListError, WordListIndex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which of the two interchangeable word lists is in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordListVariant {
    /// Arnold Reinhold's original list.
    #[default]
    Default,
    /// Alan Beale's alternate list.
    Alternate,
}

impl WordListVariant {
    /// Human-readable name for banners.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Alternate => "alternate Alan Beale's",
        }
    }
}

impl fmt::Display for WordListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// An immutable word-list table and its fingerprint.
#[derive(Debug, Clone)]
pub struct WordListAsset {
    variant: WordListVariant,
    bytes: Vec<u8>,
    digest: blake3::Hash,
    loaded_at: DateTime<Utc>,
}

impl WordListAsset {
    /// Wraps table bytes already in memory.
    pub fn from_bytes(variant: WordListVariant, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let digest = blake3::hash(&bytes);
        Self {
            variant,
            bytes,
            digest,
            loaded_at: Utc::now(),
        }
    }

    /// Reads a table from disk.
    pub fn from_path(variant: WordListVariant, path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| WordListError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let asset = Self::from_bytes(variant, bytes);
        tracing::info!(
            variant = %variant,
            path = %path.display(),
            digest = %asset.digest_hex(),
            "Loaded word list"
        );
        Ok(asset)
    }

    /// Fails unless the asset's BLAKE3 digest equals `expected` (hex, case-insensitive).
    pub fn verify_digest(&self, expected: &str) -> Result<(), WordListError> {
        let actual = self.digest_hex();
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            return Err(WordListError::DigestMismatch {
                expected: expected.trim().to_owned(),
                actual,
            });
        }
        Ok(())
    }

    /// Builds a lookup index from this asset.
    pub fn build_index(&self, options: BuildOptions) -> Result<WordListIndex, WordListError> {
        let index = WordListIndex::build_with(self.bytes.as_slice(), options)?;
        tracing::debug!(variant = %self.variant, digest = %self.digest_hex(), "Word list index ready");
        Ok(index)
    }

    pub fn variant(&self) -> WordListVariant {
        self.variant
    }

    /// Hex BLAKE3 digest identifying this version of the list.
    pub fn digest_hex(&self) -> String {
        self.digest.to_hex().to_string()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }
}
