//! Marketplace configuration.
//!
//! Configuration is plain data with sensible defaults. Every field may be
//! omitted from the JSON representation, in which case the default applies.
//!
//! # Examples
//!
//! ```
//! use jetcare::config::MarketplaceConfig;
//! use std::time::Duration;
//!
//! let config = MarketplaceConfig::from_json_str(
//!     r#"{ "simulation": { "payment_delay_ms": 10 } }"#,
//! ).expect("valid configuration");
//!
//! assert_eq!(config.simulation.payment_delay(), Duration::from_millis(10));
//! assert_eq!(config.simulation.certification_delay(), Duration::from_millis(2500));
//! ```

use crate::account::domain::DemoDirectory;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level marketplace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    /// Timing and outcomes of the simulated external collaborators.
    pub simulation: SimulationConfig,
    /// Demo accounts accepted at sign-in.
    pub directory: DemoDirectory,
    /// Language used when no explicit language is requested.
    pub language: Language,
}

impl MarketplaceConfig {
    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// does not match the configuration shape.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Creates a configuration whose simulated collaborators respond
    /// without delay.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            simulation: SimulationConfig::immediate(),
            ..Self::default()
        }
    }
}

/// Settings for the simulated inspection and payment collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delay before the quality inspection reports, in milliseconds.
    pub certification_delay_ms: u64,
    /// Checklist position the simulated inspection flags, if any.
    pub flagged_checklist_index: Option<usize>,
    /// Delay before the simulated charge succeeds, in milliseconds.
    pub payment_delay_ms: u64,
    /// Payment method recorded on paid invoices.
    pub payment_method_label: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            certification_delay_ms: 2_500,
            flagged_checklist_index: Some(1),
            payment_delay_ms: 2_000,
            payment_method_label: "Visa **** 1234".to_owned(),
        }
    }
}

impl SimulationConfig {
    /// Creates settings with zero delays and the default outcomes.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            certification_delay_ms: 0,
            payment_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Returns the inspection delay.
    #[must_use]
    pub const fn certification_delay(&self) -> Duration {
        Duration::from_millis(self.certification_delay_ms)
    }

    /// Returns the payment delay.
    #[must_use]
    pub const fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MarketplaceConfig, SimulationConfig};
    use crate::i18n::Language;

    #[test]
    fn empty_document_yields_defaults() {
        let config = MarketplaceConfig::from_json_str("{}").expect("defaults apply");
        assert_eq!(config, MarketplaceConfig::default());
        assert_eq!(config.simulation.flagged_checklist_index, Some(1));
    }

    #[test]
    fn language_can_be_overridden() {
        let config =
            MarketplaceConfig::from_json_str(r#"{ "language": "nl" }"#).expect("valid language");
        assert_eq!(config.language, Language::Nl);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = MarketplaceConfig::from_json_str("{ simulation: }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn immediate_preset_keeps_outcomes() {
        let simulation = SimulationConfig::immediate();
        assert_eq!(simulation.certification_delay_ms, 0);
        assert_eq!(simulation.payment_delay_ms, 0);
        assert_eq!(
            simulation.payment_method_label,
            SimulationConfig::default().payment_method_label
        );
    }
}
