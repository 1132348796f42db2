use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::constants::OUTPUT_FILE;
use crate::evaluator::ResultMap;

/// Serialize the result map as a 4-space indented JSON object.
pub fn render(results: &ResultMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Print the report to stdout and overwrite the output file with it.
pub fn write_report(results: &ResultMap) -> Result<()> {
    let text = render(results)?;
    println!("{}", text);
    fs::write(OUTPUT_FILE, &text).with_context(|| format!("failed to write {}", OUTPUT_FILE))?;
    Ok(())
}
