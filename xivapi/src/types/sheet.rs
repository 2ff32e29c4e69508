use serde::{Deserialize, Serialize};

/// Body of `GET /api/sheet`.
#[derive(Serialize, Deserialize, Debug)]
pub struct SheetList {
    pub sheets: Vec<SheetEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SheetEntry {
    pub name: String,
}

impl SheetList {
    /// Sheet names in response order.
    pub fn into_names(self) -> Vec<String> {
        self.sheets.into_iter().map(|s| s.name).collect()
    }
}
