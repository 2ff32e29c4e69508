mod filter;
pub use self::filter::{serialize_clauses, FilterClause};

mod search;
pub use self::search::{Language, SearchQuery};
