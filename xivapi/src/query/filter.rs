//! Filter clauses and their serialization into the `query` search parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `field operator value` condition.
///
/// Serializes by plain concatenation, so the caller supplies any quoting the
/// value needs (`Name` `=` `"Clarent"` becomes `Name="Clarent"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct FilterClause {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterClause {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

impl From<[String; 3]> for FilterClause {
    fn from([field, operator, value]: [String; 3]) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }
}

impl From<FilterClause> for [String; 3] {
    fn from(clause: FilterClause) -> Self {
        [clause.field, clause.operator, clause.value]
    }
}

impl<'a> From<[&'a str; 3]> for FilterClause {
    fn from([field, operator, value]: [&'a str; 3]) -> Self {
        Self::new(field, operator, value)
    }
}

/// Joins clauses with a single space, in input order. The service ANDs them.
pub fn serialize_clauses(clauses: &[FilterClause]) -> String {
    clauses
        .iter()
        .map(FilterClause::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
