//! File-backed region storage: a GeoJSON FeatureCollection on disk
//! stands in for the persistence collaborator. Records are bulk-loaded
//! by an import step and read-only afterwards.

use std::path::{Path, PathBuf};

use crate::domain::StoredRegion;
use crate::error::{Error, Result};
use crate::geojson::{self, FeatureCollection};
use crate::query::RegionSource;

/// Load stored regions from a GeoJSON FeatureCollection file.
///
/// # Errors
///
/// `StorageUnavailable` when the file cannot be read or is not a valid
/// FeatureCollection. Individual malformed features inside a valid
/// collection are not an error here; they surface at query time.
pub fn load_regions(path: &Path) -> Result<Vec<StoredRegion>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::StorageUnavailable(format!("failed to read {}: {}", path.display(), e))
    })?;

    let collection: FeatureCollection = serde_json::from_str(&contents).map_err(|e| {
        Error::StorageUnavailable(format!("failed to parse {}: {}", path.display(), e))
    })?;

    Ok(geojson::parse_regions(&collection))
}

/// Region source backed by a FeatureCollection file.
///
/// Re-reads the file on every fetch so each query sees a fresh
/// snapshot of the stored set.
pub struct FileRegionStore {
    path: PathBuf,
}

impl FileRegionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegionSource for FileRegionStore {
    fn fetch_all_polygon_regions(&self) -> Result<Vec<StoredRegion>> {
        load_regions(&self.path)
    }
}
