//! Prometheus counters for passphrase generation.
//!
//! The binary runs once per passphrase, so metrics are written out in
//! text exposition format (for a node-exporter textfile collector)
//! rather than served.
//!
//! # Metrics Exposed
//!
//! - `diceware_wordlists_built_total` - Word list indexes built
//! - `diceware_rolls_resolved_total` - Rolls resolved to words
//! - `diceware_passphrases_generated_total` - Passphrases produced
//! - `diceware_estimates_total` - Entropy estimates computed
//! - `diceware_strength_checks_total` - Passphrases sent to the scorer
//! - `diceware_last_estimate_entropy_bits` - Entropy of the latest estimate

use prometheus::{Encoder, Gauge, IntCounter, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("metrics output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Prometheus registry holding the diceware counters.
pub struct MetricsRegistry {
    registry: Registry,
    wordlists_built: IntCounter,
    rolls_resolved: IntCounter,
    passphrases_generated: IntCounter,
    estimates: IntCounter,
    strength_checks: IntCounter,
    last_entropy_bits: Gauge,
}

impl MetricsRegistry {
    /// Creates a registry with every metric registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let wordlists_built = IntCounter::new(
            "diceware_wordlists_built_total",
            "Total word list indexes built",
        )?;
        let rolls_resolved = IntCounter::new(
            "diceware_rolls_resolved_total",
            "Total dice rolls resolved to words",
        )?;
        let passphrases_generated = IntCounter::new(
            "diceware_passphrases_generated_total",
            "Total passphrases generated",
        )?;
        let estimates = IntCounter::new(
            "diceware_estimates_total",
            "Total entropy estimates computed",
        )?;
        let strength_checks = IntCounter::new(
            "diceware_strength_checks_total",
            "Total passphrases scored for strength",
        )?;
        let last_entropy_bits = Gauge::new(
            "diceware_last_estimate_entropy_bits",
            "Entropy in bits of the most recent estimate",
        )?;

        registry.register(Box::new(wordlists_built.clone()))?;
        registry.register(Box::new(rolls_resolved.clone()))?;
        registry.register(Box::new(passphrases_generated.clone()))?;
        registry.register(Box::new(estimates.clone()))?;
        registry.register(Box::new(strength_checks.clone()))?;
        registry.register(Box::new(last_entropy_bits.clone()))?;

        Ok(Self {
            registry,
            wordlists_built,
            rolls_resolved,
            passphrases_generated,
            estimates,
            strength_checks,
            last_entropy_bits,
        })
    }

    pub fn record_wordlist_built(&self) {
        self.wordlists_built.inc();
    }

    /// Records one passphrase of `words` resolved rolls.
    pub fn record_passphrase(&self, words: usize) {
        self.rolls_resolved.inc_by(words as u64);
        self.passphrases_generated.inc();
    }

    pub fn record_estimate(&self, entropy_bits: f64) {
        self.estimates.inc();
        self.last_entropy_bits.set(entropy_bits);
    }

    pub fn record_strength_check(&self) {
        self.strength_checks.inc();
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = MetricsRegistry::new();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_counters_accumulate() {
        let registry = MetricsRegistry::new().unwrap();
        registry.record_wordlist_built();
        registry.record_passphrase(6);
        registry.record_passphrase(8);
        registry.record_estimate(103.36);
        registry.record_strength_check();

        let output = registry.encode().unwrap();
        assert!(output.contains("diceware_wordlists_built_total 1"));
        assert!(output.contains("diceware_rolls_resolved_total 14"));
        assert!(output.contains("diceware_passphrases_generated_total 2"));
        assert!(output.contains("diceware_last_estimate_entropy_bits 103.36"));
        assert!(output.contains("diceware_strength_checks_total 1"));
    }
}
