use reqwest::Client;
use std::error::Error;

/// Builds the HTTP client shared across the whole run.
pub fn build_client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder().build()?;
    Ok(client)
}

/// Fetches a URL and returns the response body as text.
///
/// Any network or HTTP-level failure propagates to the caller and aborts
/// the run; there are no retries.
pub async fn get_text(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    ::log::debug!("GET {}", url);

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    ::log::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
