// src/models/weights.rs - Per-kind weight profiles and caller overrides
use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::core::EntityKind;

/// Weights for comparing two artworks. Gps dominates: two pieces installed
/// at the same spot with similar titles are almost certainly one piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtworkWeights {
    pub gps: f64,
    pub title: f64,
    /// Applied to the artist-attribution tag comparison.
    pub entity_secondary: f64,
    pub reference_ids: f64,
    pub tag_similarity: f64,
}

impl Default for ArtworkWeights {
    fn default() -> Self {
        Self {
            gps: 0.60,
            title: 0.25,
            entity_secondary: 0.05,
            reference_ids: 0.05,
            tag_similarity: 0.05,
        }
    }
}

/// Weights for comparing two artists. There is no gps slot at all: artists
/// have no coordinates, so a caller-supplied gps override cannot reintroduce
/// one. The `bio` slot occupies the position the artwork profile uses for
/// tag-set similarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtistWeights {
    pub name: f64,
    /// Applied to the website tag comparison.
    pub entity_secondary: f64,
    pub reference_ids: f64,
    pub bio: f64,
}

impl Default for ArtistWeights {
    fn default() -> Self {
        Self {
            name: 0.60,
            entity_secondary: 0.15,
            reference_ids: 0.15,
            bio: 0.10,
        }
    }
}

/// A named weight profile. The two variants deliberately do not share a
/// struct: the same slot position means different comparisons per kind, and
/// collapsing them into one five-field struct would let a caller apply
/// artwork semantics to an artist comparison by accident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeightProfile {
    Artwork(ArtworkWeights),
    Artist(ArtistWeights),
}

/// Caller-supplied partial overrides, keyed by the generic five slot names.
/// For artists, `title` maps onto the name slot and `tag_similarity` onto
/// the bio slot; a `gps` override is ignored for artists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeightOverrides {
    pub gps: Option<f64>,
    pub title: Option<f64>,
    pub entity_secondary: Option<f64>,
    pub reference_ids: Option<f64>,
    pub tag_similarity: Option<f64>,
}

impl WeightProfile {
    /// Built-in profile for an entity kind.
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Artwork => WeightProfile::Artwork(ArtworkWeights::default()),
            EntityKind::Artist => WeightProfile::Artist(ArtistWeights::default()),
        }
    }

    /// Built-in profile with caller overrides applied slot by slot.
    pub fn with_overrides(kind: EntityKind, overrides: &WeightOverrides) -> Self {
        match Self::for_kind(kind) {
            WeightProfile::Artwork(mut w) => {
                if let Some(v) = overrides.gps {
                    w.gps = v;
                }
                if let Some(v) = overrides.title {
                    w.title = v;
                }
                if let Some(v) = overrides.entity_secondary {
                    w.entity_secondary = v;
                }
                if let Some(v) = overrides.reference_ids {
                    w.reference_ids = v;
                }
                if let Some(v) = overrides.tag_similarity {
                    w.tag_similarity = v;
                }
                WeightProfile::Artwork(w)
            }
            WeightProfile::Artist(mut w) => {
                if overrides.gps.is_some() {
                    debug!("Ignoring gps weight override for artist profile");
                }
                if let Some(v) = overrides.title {
                    w.name = v;
                }
                if let Some(v) = overrides.entity_secondary {
                    w.entity_secondary = v;
                }
                if let Some(v) = overrides.reference_ids {
                    w.reference_ids = v;
                }
                if let Some(v) = overrides.tag_similarity {
                    w.bio = v;
                }
                WeightProfile::Artist(w)
            }
        }
    }

    /// Rejects negative weights. Called at check entry, before any scoring.
    pub fn validate(&self) -> Result<()> {
        let slots: Vec<(&str, f64)> = match self {
            WeightProfile::Artwork(w) => vec![
                ("gps", w.gps),
                ("title", w.title),
                ("entity_secondary", w.entity_secondary),
                ("reference_ids", w.reference_ids),
                ("tag_similarity", w.tag_similarity),
            ],
            WeightProfile::Artist(w) => vec![
                ("name", w.name),
                ("entity_secondary", w.entity_secondary),
                ("reference_ids", w.reference_ids),
                ("bio", w.bio),
            ],
        };
        for (slot, value) in slots {
            if value < 0.0 || !value.is_finite() {
                bail!("Weight '{}' must be a non-negative finite number, got {}", slot, value);
            }
        }
        Ok(())
    }
}
