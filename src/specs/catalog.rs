// src/specs/catalog.rs
//! Facility catalog: `{"data": [{"id": ..., ...}, ...]}`.
//! Only the ids matter here; every other field is ignored.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub data: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    pub id: FacilityId,
}

/// Catalog ids come as strings or bare numbers depending on the export.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FacilityId {
    Text(String),
    Number(u64),
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityId::Text(s) => f.write_str(s),
            FacilityId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Catalog {
    /// Ids in catalog order.
    pub fn ids(&self) -> Vec<String> {
        self.data.iter().map(|e| e.id.to_string()).collect()
    }
}
