// src/matching/mod.rs
pub mod aggregator;
pub mod classifier;
pub mod geospatial;
pub mod normalize;
pub mod reference;
pub mod tags;
pub mod text;
