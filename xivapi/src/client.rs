//! HTTP client for the XIVAPI v2 game-data service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    pacing::Pacer,
    query::{FilterClause, SearchQuery},
    types::{Record, SearchResponse, SheetList},
    Error,
};

/// Production XIVAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://v2.xivapi.com";

/// Request timeout for every call, including sheet discovery.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("aiorzea/", env!("CARGO_PKG_VERSION"));

const ITEM_SHEET: &str = "Item";
const ALL_FIELDS: &str = "*";

/// HTTP client for XIVAPI.
///
/// Construction discovers the available sheets once; the list is kept for
/// the lifetime of the client and never refreshed. Search calls are paced so
/// that each one takes at least the pacer's minimum interval (one second by
/// default) from start to return.
pub struct Client {
    /// Base URL for the API. Defaults to `https://v2.xivapi.com`.
    base_api_url: String,
    /// Sent as `private_key` on search requests when present.
    api_key: Option<String>,
    http: reqwest::Client,
    sheets: Vec<String>,
    pacer: Pacer,
}

impl Client {
    /// Connects to the production API and discovers its sheets.
    pub async fn new(api_key: Option<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key).await
    }

    /// Connects to a custom base URL. Used for testing with wiremock.
    ///
    /// Fails if sheet discovery fails; there is no retry.
    pub async fn with_base_url(base_url: &str, api_key: Option<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;

        let mut client = Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
            sheets: Vec::new(),
            pacer: Pacer::default(),
        };
        client.sheets = client.fetch_sheets().await?;
        tracing::debug!("Discovered {} sheets", client.sheets.len());
        Ok(client)
    }

    /// Overrides the minimum interval between the start of a search and its return.
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.pacer = Pacer::new(min_interval);
        self
    }

    /// Sheet names discovered at construction, in the order the API listed them.
    pub fn sheets(&self) -> &[String] {
        &self.sheets
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s == name)
    }

    pub fn min_interval(&self) -> Duration {
        self.pacer.min_interval()
    }

    fn get_url(&self, path: &str, query: Option<&SearchQuery>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(format!("{} | body: {}", e, snippet))
        })
    }

    async fn fetch_sheets(&self) -> Result<Vec<String>, Error> {
        let url = self.get_url("/api/sheet", None)?;
        let list = self.get::<SheetList>(url).await?;
        Ok(list.into_names())
    }

    /// Runs a search and returns the `results` array.
    ///
    /// Every call, successful or not, takes at least the configured minimum
    /// interval before returning.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Record>, Error> {
        let mut url = self.get_url("/api/search", Some(query))?;
        tracing::debug!(
            "Searching sheets={} fields={} query={}",
            query.sheets,
            query.fields,
            query.query
        );
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("private_key", key);
        }

        let resp = self.pacer.run(self.get::<SearchResponse>(url)).await?;
        tracing::debug!("Search returned {} results", resp.results.len());
        Ok(resp.results)
    }

    /// Searches with a pre-serialized filter string, e.g. `Name="Clarent"`.
    pub async fn query(
        &self,
        sheets: &str,
        fields: &str,
        filters: &str,
    ) -> Result<Vec<Record>, Error> {
        self.search(&SearchQuery::new(sheets, fields).with_query(filters))
            .await
    }

    /// Searches with structured `(field, operator, value)` clauses.
    ///
    /// An empty clause list is rejected without contacting the API.
    pub async fn query_clauses(
        &self,
        sheets: &str,
        fields: &str,
        clauses: &[FilterClause],
    ) -> Result<Vec<Record>, Error> {
        if clauses.is_empty() {
            return Err(Error::InvalidQuery(
                "at least one filter clause is required".to_string(),
            ));
        }
        self.search(&SearchQuery::new(sheets, fields).with_clauses(clauses))
            .await
    }

    /// Searches the `Item` sheet, returning all fields.
    pub async fn query_item(&self, filters: &str) -> Result<Vec<Record>, Error> {
        self.query(ITEM_SHEET, ALL_FIELDS, filters).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("Not Found"), "Not Found");
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 3-byte characters never land on byte 2000 exactly.
        let body = "エ".repeat(1000);
        let out = truncate_body(&body);
        assert!(out.starts_with("エエ"));
        assert!(out.ends_with("...[truncated]"));
    }
}
