use crate::http::{get_text, parse_endpoint};
use claimcheck_domain::model::EncyclopediaPage;
use claimcheck_domain::{EncyclopediaSource, SourceError};
use claimcheck_types::ids;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Wikipedia: MediaWiki action API for search, REST API for page summaries.
pub struct WikipediaClient {
    http: Client,
    api_endpoint: String,
    rest_endpoint: String,
}

impl WikipediaClient {
    pub fn new(http: Client, api_endpoint: &str, rest_endpoint: &str) -> Self {
        Self {
            http,
            api_endpoint: api_endpoint.to_string(),
            rest_endpoint: rest_endpoint.to_string(),
        }
    }

    fn search_url(&self, text: &str, limit: usize) -> Result<reqwest::Url, SourceError> {
        let mut url = parse_endpoint(&self.api_endpoint)?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "search")
            .append_pair("srsearch", text)
            .append_pair("srlimit", &limit.to_string())
            .append_pair("format", "json");
        Ok(url)
    }

    fn summary_url(&self, title: &str) -> Result<reqwest::Url, SourceError> {
        let mut url = parse_endpoint(&self.rest_endpoint)?;
        let invalid = || SourceError::Unavailable(format!("invalid endpoint {}", self.rest_endpoint));
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["page", "summary", &title.replace(' ', "_")]);
        Ok(url)
    }
}

impl EncyclopediaSource for WikipediaClient {
    fn search(&self, text: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let (status, body) = get_text(&self.http, self.search_url(text, limit)?)?;
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!("HTTP {status}")));
        }
        let mut titles = parse_search_titles(&body)?;
        titles.truncate(limit);
        debug!(titles = titles.len(), "encyclopedia search returned");
        Ok(titles)
    }

    fn open_page(&self, title: &str) -> Result<EncyclopediaPage, SourceError> {
        let (status, body) = get_text(&self.http, self.summary_url(title)?)?;
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(title.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!("HTTP {status}")));
        }
        parse_page_summary(title, &body)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

/// Decode an action API `list=search` body into titles, in relevance order.
pub fn parse_search_titles(body: &str) -> Result<Vec<String>, SourceError> {
    let resp: SearchResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    Ok(resp
        .query
        .map(|q| q.search.into_iter().map(|h| h.title).collect())
        .unwrap_or_default())
}

#[derive(Deserialize)]
struct Summary {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    #[serde(default)]
    extract: String,
    content_urls: Option<ContentUrls>,
}

#[derive(Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Deserialize)]
struct PageUrls {
    page: Option<String>,
}

/// Decode a REST `page/summary` body. Disambiguation pages are [`SourceError::Ambiguous`].
pub fn parse_page_summary(requested: &str, body: &str) -> Result<EncyclopediaPage, SourceError> {
    let summary: Summary =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    if summary.kind.as_deref() == Some("disambiguation") {
        return Err(SourceError::Ambiguous(requested.to_string()));
    }
    let url = summary
        .content_urls
        .and_then(|c| c.desktop)
        .and_then(|d| d.page)
        .unwrap_or_else(|| ids::URL_UNKNOWN.to_string());
    Ok(EncyclopediaPage {
        title: summary.title.unwrap_or_else(|| requested.to_string()),
        url,
        summary: summary.extract,
    })
}
