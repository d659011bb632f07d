//! Check command implementation
//!
//! Validates an exposure record without evaluating it.

use std::io::Write as _;
use std::path::Path;

use capital_core::types::ExposureError;
use tracing::{info, warn};

use super::load_exposure;
use crate::Result;

/// Run the check command
///
/// Prints "valid" or one line per defect and returns whether the record is
/// valid.
pub fn run(path: &Path) -> Result<bool> {
    info!("Checking exposure {}", path.display());
    let exposure = load_exposure(path)?;
    let defects = exposure.validation_errors();
    if !defects.is_empty() {
        warn!(count = defects.len(), "exposure has defects");
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(&defects))?;
    Ok(defects.is_empty())
}

/// "valid", or one `- defect` line per defect.
pub(crate) fn render(defects: &[ExposureError]) -> String {
    if defects.is_empty() {
        return "valid".to_string();
    }
    defects
        .iter()
        .map(|d| format!("- {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("samples")
            .join(name)
    }

    #[test]
    fn test_render_valid() {
        assert_eq!(render(&[]), "valid");
    }

    #[test]
    fn test_render_lists_each_defect_once() {
        let text = render(&[
            ExposureError::LtvOutOfRange(250.0),
            ExposureError::ProvisionOutOfRange(120.0),
        ]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "- LTV out of range [0, 200]: 250");
        assert!(lines[1].starts_with("- Provision percent out of range"));
    }

    #[test]
    fn test_invalid_record_reports_without_error() {
        assert!(!run(&sample("invalid.json")).unwrap());
    }

    #[test]
    fn test_valid_record() {
        assert!(run(&sample("residential_mortgage.json")).unwrap());
    }
}
