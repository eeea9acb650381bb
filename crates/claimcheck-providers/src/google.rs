use crate::http::{get_text, parse_endpoint};
use claimcheck_domain::model::{ClaimReview, FactCheckRecord};
use claimcheck_domain::{FactCheckSource, SourceError};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Google Fact Check Tools `claims:search`.
pub struct FactCheckToolsClient {
    http: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl FactCheckToolsClient {
    pub fn new(http: Client, endpoint: &str, api_key: &str, language: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            language: language.to_string(),
        }
    }

    fn request_url(&self, query: &str) -> Result<Url, SourceError> {
        let mut url = parse_endpoint(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("key", &self.api_key)
            .append_pair("languageCode", &self.language);
        Ok(url)
    }
}

impl FactCheckSource for FactCheckToolsClient {
    fn search_claims(&self, query: &str) -> Result<Vec<FactCheckRecord>, SourceError> {
        let url = self.request_url(query)?;
        debug!(endpoint = %self.endpoint, "fact-check search");
        let (status, body) = get_text(&self.http, url)?;
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!("HTTP {status}")));
        }
        let records = parse_claim_search(&body)?;
        debug!(records = records.len(), "fact-check search returned");
        Ok(records)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    claims: Vec<WireClaim>,
}

#[derive(Deserialize)]
struct WireClaim {
    text: Option<String>,
    #[serde(default, rename = "claimReview")]
    claim_review: Vec<WireReview>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReview {
    publisher: Option<WirePublisher>,
    url: Option<String>,
    title: Option<String>,
    textual_rating: Option<String>,
}

#[derive(Deserialize)]
struct WirePublisher {
    name: Option<String>,
}

/// Decode a `claims:search` response body. A body without `claims` is an empty result.
pub fn parse_claim_search(body: &str) -> Result<Vec<FactCheckRecord>, SourceError> {
    let resp: SearchResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    Ok(resp
        .claims
        .into_iter()
        .map(|c| FactCheckRecord {
            text: c.text,
            reviews: c
                .claim_review
                .into_iter()
                .map(|r| ClaimReview {
                    publisher: r.publisher.and_then(|p| p.name),
                    url: r.url,
                    title: r.title,
                    textual_rating: r.textual_rating,
                })
                .collect(),
        })
        .collect())
}
