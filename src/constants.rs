/// Default input paths
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const HTML_FILE_DEFAULT: &str = "index.html";

/// Report destination, overwritten on every run
pub const OUTPUT_FILE: &str = "checks.txt";
