//! Canonical item record types for the project.
//! The payload wire format lives in `catalog`; everything downstream of
//! parsing works with these types only.

use serde::{Deserialize, Serialize};

/// One inventory entry's static data. Parsed once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
    /// Index into the host's icon table.
    pub icon_index: usize,
    pub stat: StatValue,
}

/// An item's stat as it appears in the payload: numeric, text, or an
/// arbitrary structured value. Opaque to the core; only stringified for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Structured(serde_json::Value),
}

impl ItemRecord {
    /// The stat as shown in the detail view.
    pub fn stat_text(&self) -> String {
        self.stat.to_string()
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => write!(f, "{}", s),
            Self::Structured(v) => write!(f, "{}", v),
        }
    }
}
