use anyhow::Context;
use claimcheck_domain::SourceError;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Shared blocking client. The timeout applies to each request.
pub fn build_client(timeout: Duration, user_agent: &str) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .context("build HTTP client")
}

/// GET `url` and return the status with the body. Only transport failures are errors here;
/// callers decide what each status means.
pub(crate) fn get_text(client: &Client, url: Url) -> Result<(StatusCode, String), SourceError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| SourceError::Unavailable(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| SourceError::Unavailable(e.to_string()))?;
    Ok((status, body))
}

pub(crate) fn parse_endpoint(raw: &str) -> Result<Url, SourceError> {
    Url::parse(raw).map_err(|e| SourceError::Unavailable(format!("invalid endpoint {raw}: {e}")))
}
