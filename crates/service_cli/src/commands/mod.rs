//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod evaluate;

use std::path::Path;

use anyhow::Context;
use capital_core::types::Exposure;
use tracing::debug;

use crate::{CliError, Result};

/// Read and deserialize one exposure record.
pub(crate) fn load_exposure(path: &Path) -> Result<Exposure> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read exposure file {}", path.display()))?;
    let exposure = parse_exposure(&content)
        .with_context(|| format!("Failed to parse exposure file {}", path.display()))?;
    debug!(
        product = ?exposure.product,
        counterparty = ?exposure.counterparty,
        "exposure loaded"
    );
    Ok(exposure)
}

pub(crate) fn parse_exposure(content: &str) -> serde_json::Result<Exposure> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capital_core::types::{CounterpartyCategory, ProductCategory};

    #[test]
    fn test_parse_partial_record() {
        let exposure = parse_exposure(
            r#"{ "product": "card", "counterparty": "individual", "retail": { "eligible": true } }"#,
        )
        .unwrap();
        assert_eq!(exposure.product, ProductCategory::Card);
        assert_eq!(exposure.counterparty, CounterpartyCategory::Individual);
        assert!(exposure.retail.eligible);
        assert!(exposure.amounts.is_none());
    }

    #[test]
    fn test_sample_records() {
        use approx::assert_relative_eq;
        use capital_engine::CapitalCalculator;

        let calculator = CapitalCalculator::new();

        let mortgage = parse_exposure(include_str!("../../samples/residential_mortgage.json")).unwrap();
        assert!(mortgage.validate().is_ok());
        let r = calculator.evaluate(&mortgage);
        assert_eq!(r.final_weight, 60.0);
        assert_relative_eq!(r.rwa.unwrap(), 150_000.0);

        let card = parse_exposure(include_str!("../../samples/retail_card_usd.json")).unwrap();
        let r = calculator.evaluate(&card);
        assert_relative_eq!(r.final_weight, 67.5);
        assert_relative_eq!(r.ead.unwrap(), 10_500.0);
        assert_relative_eq!(r.adjusted_ead.unwrap(), 8_660.0, epsilon = 1e-9);
        assert_relative_eq!(r.rwa.unwrap(), 5_845.5, epsilon = 1e-9);

        let invalid = parse_exposure(include_str!("../../samples/invalid.json")).unwrap();
        assert_eq!(invalid.validation_errors().len(), 2);
    }

    #[test]
    fn test_sample_config() {
        let config =
            crate::config::CliConfig::from_toml_str(include_str!("../../samples/capital.toml"))
                .unwrap();
        assert_eq!(config, crate::config::CliConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = load_exposure(Path::new("/nonexistent/exposure.json")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
