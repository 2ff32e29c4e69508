mod client;
mod errors;
pub mod pacing;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{serialize_clauses, FilterClause, Language, SearchQuery};
