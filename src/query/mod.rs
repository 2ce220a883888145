//! Intersection query service: fetch the candidate set and filter it
//! down to regions sharing area with the query ring.

use geo::MultiPolygon;

use crate::domain::StoredRegion;
use crate::error::Result;
use crate::geometry;

/// Storage capability: fetch the full candidate set for one query.
///
/// Each call returns a fresh read-only snapshot, so queries need no
/// cross-request synchronization. Implementations may fail with
/// `StorageUnavailable`; that is distinct from geometry errors and
/// aborts the request with no fallback.
pub trait RegionSource {
    fn fetch_all_polygon_regions(&self) -> Result<Vec<StoredRegion>>;
}

/// One query match: the stored region and its computed overlap geometry.
#[derive(Debug, Clone)]
pub struct RegionMatch {
    pub region: StoredRegion,
    pub overlap: MultiPolygon<f64>,
}

/// Find all candidates whose polygon shares area with the query ring.
///
/// The query ring is normalized first; failure aborts the whole call
/// with no partial results. Candidates are then evaluated in supplied
/// order and the result keeps that order (stable filter):
/// - non-polygon geometry is skipped silently, not an error
/// - a candidate whose ring fails normalization, or whose overlap
///   computation fails, is skipped with a warning, never fatal
///
/// Read-only: neither the query ring nor the candidates are mutated
/// or persisted.
pub fn find_intersecting(
    query_ring: &[(f64, f64)],
    candidates: &[StoredRegion],
) -> Result<Vec<RegionMatch>> {
    let query = geometry::normalize_ring(query_ring)?;

    let mut matches = Vec::new();

    for candidate in candidates {
        let outer = match candidate.geometry.as_polygon() {
            Some(outer) => outer,
            None => continue,
        };

        let ring = match geometry::normalize_ring(outer) {
            Ok(ring) => ring,
            Err(e) => {
                eprintln!("Warning: skipping region {}: {}", candidate.id, e);
                continue;
            }
        };

        match geometry::intersection(&query, &ring) {
            Ok(Some(overlap)) => matches.push(RegionMatch {
                region: candidate.clone(),
                overlap,
            }),
            Ok(None) => {}
            Err(e) => {
                eprintln!("Warning: skipping region {}: {}", candidate.id, e);
            }
        }
    }

    Ok(matches)
}

/// Fetch the candidate set from storage and run [`find_intersecting`].
#[allow(dead_code)]
pub fn run_query(source: &impl RegionSource, query_ring: &[(f64, f64)]) -> Result<Vec<RegionMatch>> {
    let candidates = source.fetch_all_polygon_regions()?;
    find_intersecting(query_ring, &candidates)
}
