use serde::{Deserialize, Serialize};

/// A search hit, kept as the raw key/value mapping the service returned.
pub type Record = serde_json::Value;

/// Body of `GET /api/search`. Only `results` is required; `schema`, `next`
/// and anything else the service adds are ignored.
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub results: Vec<Record>,
}
