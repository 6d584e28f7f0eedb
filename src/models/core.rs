// src/models/core.rs - Record shapes exchanged with the candidate retriever
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which kind of catalog entity a record describes. The two kinds use
/// materially different weight semantics, so the distinction is carried
/// explicitly rather than inferred from field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artwork,
    Artist,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Artwork => "artwork",
            EntityKind::Artist => "artist",
        }
    }
}

/// The prospective entry being checked against the catalog. Immutable input;
/// the engine never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingRecord {
    pub title_or_name: String,
    /// `(latitude, longitude)` in degrees. Artworks only; artists carry None.
    pub coordinates: Option<(f64, f64)>,
    pub tags: HashMap<String, String>,
    pub external_id: Option<String>,
    pub entity_kind: EntityKind,
}

impl IncomingRecord {
    pub fn new(title_or_name: impl Into<String>, entity_kind: EntityKind) -> Self {
        Self {
            title_or_name: title_or_name.into(),
            coordinates: None,
            tags: HashMap::new(),
            external_id: None,
            entity_kind,
        }
    }
}

/// An existing catalog entry fetched by the retriever. Read-only to the
/// engine. `tags_raw` is the stored serialized tag map and may fail to
/// parse; a malformed payload is scored as an empty tag set, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Opaque stable identifier assigned by the catalog.
    pub id: String,
    pub title_or_name: String,
    pub coordinates: Option<(f64, f64)>,
    pub tags_raw: Option<String>,
    /// Identifier from the source system that imported this record, if any.
    pub source_id: Option<String>,
    pub external_id: Option<String>,
}

impl CandidateRecord {
    pub fn new(id: impl Into<String>, title_or_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title_or_name: title_or_name.into(),
            coordinates: None,
            tags_raw: None,
            source_id: None,
            external_id: None,
        }
    }
}
