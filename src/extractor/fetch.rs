//! Fetching the source page

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, error, instrument};

use crate::extractor::ExtractorConfig;
use crate::extractor::error::ExtractError;

/// Create the HTTP client used for the single page request.
///
/// No timeout is set; the transport defaults apply.
pub fn build_client() -> Result<Client, ExtractError> {
    Ok(Client::builder().build()?)
}

/// Fetch the configured page and return its body
///
/// # Arguments
///
/// * `client` - The HTTP client
/// * `config` - Extractor configuration providing the URL and user agent
///
/// # Returns
///
/// The response body, or `ExtractError::Status` for any non-success status
#[instrument(skip(client, config), fields(url = %config.url))]
pub async fn fetch_page(client: &Client, config: &ExtractorConfig) -> Result<String, ExtractError> {
    debug!("Sending GET request");
    let response = client
        .get(&config.url)
        .header(USER_AGENT, &config.user_agent)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        error!("Source page returned {}", status);
        return Err(ExtractError::Status {
            status: status.as_u16(),
            url: config.url.clone(),
        });
    }

    let body = response.text().await?;
    debug!("Received {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/pages/simple/")
            .match_header("user-agent", "atlas-test/1.0")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>ok</body></html>")
            .expect(1)
            .create_async()
            .await;

        let config = ExtractorConfig::builder()
            .url(format!("{}/pages/simple/", server.url()))
            .user_agent("atlas-test/1.0")
            .build();
        let client = build_client().unwrap();

        let body = fetch_page(&client, &config).await.unwrap();
        assert!(body.contains("ok"));

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/pages/simple/")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let config = ExtractorConfig::builder()
            .url(format!("{}/pages/simple/", server.url()))
            .build();
        let client = build_client().unwrap();

        let result = fetch_page(&client, &config).await;
        assert!(matches!(result, Err(ExtractError::Status { status: 503, .. })));

        mock_server.assert_async().await;
    }
}
