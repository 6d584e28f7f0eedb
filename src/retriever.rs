// src/retriever.rs - External candidate-retrieval boundary
use anyhow::Result;
use std::future::Future;

use crate::matching::normalize::normalize_text;
use crate::models::core::{CandidateRecord, EntityKind, IncomingRecord};

/// A bounded candidate query handed to the external retriever. The engine
/// never scans an unbounded corpus itself: artworks get a rough spatial
/// window, artists a normalized-name window. How the store executes either
/// is its own business.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateQuery {
    SpatialWindow {
        latitude: f64,
        longitude: f64,
        radius_degrees: f64,
    },
    NameWindow {
        pattern: String,
    },
}

impl CandidateQuery {
    /// Builds the query for an incoming record. Artworks without
    /// coordinates fall back to the name window so the missing signal
    /// degrades instead of erroring.
    pub fn for_record(incoming: &IncomingRecord, radius_degrees: f64) -> Self {
        match (incoming.entity_kind, incoming.coordinates) {
            (EntityKind::Artwork, Some((latitude, longitude))) => CandidateQuery::SpatialWindow {
                latitude,
                longitude,
                radius_degrees,
            },
            _ => CandidateQuery::NameWindow {
                pattern: normalize_text(&incoming.title_or_name),
            },
        }
    }
}

/// Supplies the bounded candidate set for one check. Implementations own
/// all I/O, filtering, and timeout policy; a retrieval error fails the whole
/// duplicate check rather than being treated as "no candidates".
pub trait CandidateRetriever {
    fn fetch_candidates(
        &self,
        query: &CandidateQuery,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>>> + Send;
}
