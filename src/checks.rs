use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Load the checks file: a JSON array of CSS selector strings.
///
/// Returns the selectors sorted ascending. Anything other than a JSON array
/// of strings is an error, which callers treat as fatal.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read checks file {}", path.display()))?;
    let mut checks: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of selectors", path.display()))?;
    checks.sort();
    Ok(checks)
}
