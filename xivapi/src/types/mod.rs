mod sheet;
pub use self::sheet::{SheetEntry, SheetList};

mod search;
pub use self::search::{Record, SearchResponse};
