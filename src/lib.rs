//! mapoverlap - Find stored GeoJSON map regions that overlap a drawn polygon

pub mod config;
pub mod domain;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod query;
pub mod store;
