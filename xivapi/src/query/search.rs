//! Builder for `/api/search` requests.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::filter::{serialize_clauses, FilterClause};

/// Response language for sheet text fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Japanese,
    German,
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::German => "de",
            Self::French => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "ja" => Ok(Self::Japanese),
            "de" => Ok(Self::German),
            "fr" => Ok(Self::French),
            other => Err(format!("unknown language '{}': expected en, ja, de or fr", other)),
        }
    }
}

/// Parameters for a single search request.
///
/// `sheets` and `fields` are passed through as comma-separated lists; sheet
/// names are not checked against the discovered sheet list, the service
/// rejects unknown ones itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub sheets: String,
    pub fields: String,
    pub query: String,
    /// Maximum number of results. `None` uses the service default.
    pub limit: Option<u32>,
    pub language: Option<Language>,
}

impl SearchQuery {
    pub fn new(sheets: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            sheets: sheets.into(),
            fields: fields.into(),
            query: String::new(),
            limit: None,
            language: None,
        }
    }

    /// Sets a pre-serialized filter string such as `Name="Clarent"`.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the filter from structured clauses.
    pub fn with_clauses(mut self, clauses: &[FilterClause]) -> Self {
        self.query = serialize_clauses(clauses);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("sheets", &self.sheets)
            .append_pair("fields", &self.fields)
            .append_pair("query", &self.query);
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(language) = self.language {
            url.query_pairs_mut()
                .append_pair("language", language.as_str());
        }
        url
    }
}
