use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colored::*;

use crate::constants::{CHECKS_FILE_DEFAULT, HTML_FILE_DEFAULT};

/// Grade an HTML document for the presence of CSS selectors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the checks file (a JSON array of CSS selectors).
    #[arg(short, long, value_name = "check_file")]
    pub checks: Option<PathBuf>,

    /// Path to the HTML file to grade.
    #[arg(short, long, value_name = "html_file")]
    pub file: Option<PathBuf>,

    /// Fetch the document from this URL instead of a local file.
    #[arg(short, long, value_name = "url")]
    pub url: Option<String>,
}

/// Where the HTML document for this run comes from.
#[derive(Debug, PartialEq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

/// Resolved configuration for a single run.
#[derive(Debug)]
pub struct RunConfig {
    pub checks_file: PathBuf,
    pub source: Source,
}

/// Validate supplied paths, fill in defaults and report the resolved
/// configuration on stdout.
///
/// Only paths the user actually passed are checked for existence. Defaults
/// are left to fail at read time, so URL mode works without a local
/// index.html.
pub fn resolve(cli: Cli) -> RunConfig {
    if let Some(path) = &cli.checks {
        assert_file_exists(path);
    }
    if let Some(path) = &cli.file {
        assert_file_exists(path);
    }

    let checks_file = cli
        .checks
        .unwrap_or_else(|| PathBuf::from(CHECKS_FILE_DEFAULT));

    // A URL wins over a file path when both are given.
    let source = match cli.url {
        Some(url) => Source::Url(url),
        None => Source::File(cli.file.unwrap_or_else(|| PathBuf::from(HTML_FILE_DEFAULT))),
    };

    println!("Checks file: {}", checks_file.display().to_string().cyan());
    match &source {
        Source::File(path) => {
            println!(
                "File to be processed: {}",
                path.display().to_string().cyan()
            );
        }
        Source::Url(url) => println!("Url: {}", url.cyan()),
    }

    RunConfig {
        checks_file,
        source,
    }
}

fn assert_file_exists(path: &Path) {
    if !path.exists() {
        println!("{} does not exist. Exiting.", path.display());
        process::exit(1);
    }
}
