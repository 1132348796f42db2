mod checks;
mod constants;
mod document;
mod evaluator;
mod http;
mod report;
mod types;

use anyhow::{Context, Result};
use clap::Parser;

use crate::document::Document;
use crate::types::{Cli, Source};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = types::resolve(cli);

    let html = match &config.source {
        Source::Url(url) => {
            println!("Processing url");
            let client = http::build_http_client()?;
            http::fetch_html(&client, url).await?
        }
        Source::File(path) => {
            println!("Processing file");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read HTML file {}", path.display()))?
        }
    };

    let document = Document::parse(&html);
    let results = evaluator::evaluate(&document, &config.checks_file)?;
    report::write_report(&results)?;

    Ok(())
}
