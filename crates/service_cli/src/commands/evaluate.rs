//! Evaluate command implementation
//!
//! Validates one exposure, runs it through `CapitalCalculator` and prints the
//! result.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use capital_engine::{CapitalCalculator, CapitalResult};
use tracing::{info, warn};

use super::load_exposure;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Run the evaluate command
pub fn run(path: &Path, config: &CliConfig) -> Result<()> {
    info!("Evaluating exposure {}", path.display());
    let exposure = load_exposure(path)?;

    let defects = exposure.validation_errors();
    if !defects.is_empty() {
        warn!(count = defects.len(), "exposure rejected");
        return Err(CliError::Validation(defects));
    }

    let result = CapitalCalculator::new().evaluate(&exposure);
    info!(
        label = %result.label,
        final_weight = result.final_weight,
        "evaluation complete"
    );

    let rendered = match config.output_format {
        OutputFormat::Json => render_json(&result, config.show_trail)?,
        OutputFormat::Table => render_table(&result, config.show_trail),
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

/// Pretty JSON; the trail is dropped when `show_trail` is false.
pub(crate) fn render_json(result: &CapitalResult, show_trail: bool) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(result)?;
    if !show_trail {
        if let Some(object) = value.as_object_mut() {
            object.remove("trail");
        }
    }
    serde_json::to_string_pretty(&value)
}

/// Human-readable summary box followed by the trail.
pub(crate) fn render_table(result: &CapitalResult, show_trail: bool) -> String {
    let mut rows = vec![
        ("Label", result.label.to_string()),
        ("Base weight", format!("{}%", result.base_weight)),
        ("Final weight", format!("{}%", result.final_weight)),
    ];
    if let (Some(ead), Some(adjusted), Some(rwa)) = (result.ead, result.adjusted_ead, result.rwa)
    {
        rows.push(("EAD", format!("{ead:.2}")));
        rows.push(("Adjusted EAD", format!("{adjusted:.2}")));
        rows.push(("RWA", format!("{rwa:.2}")));
    }

    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "┌{}┬{}┐",
        "─".repeat(key_width + 2),
        "─".repeat(value_width + 2)
    );
    for (key, value) in &rows {
        let _ = writeln!(out, "│ {key:<key_width$} │ {value:>value_width$} │");
    }
    let _ = write!(
        out,
        "└{}┴{}┘",
        "─".repeat(key_width + 2),
        "─".repeat(value_width + 2)
    );

    if show_trail && !result.trail.is_empty() {
        out.push_str("\n\nTrail:");
        for line in &result.trail {
            out.push_str("\n  ");
            out.push_str(line);
        }
    }
    out
}
