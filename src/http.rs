use anyhow::{Context, Result};
use reqwest::Client;

/// Build the HTTP client, keeping the library's default redirect and
/// timeout behavior.
pub fn build_http_client() -> Result<Client> {
    Ok(Client::builder().build()?)
}

/// Issue a single GET and return the response body text.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;
    response
        .text()
        .await
        .with_context(|| format!("failed to read response body from {}", url))
}
