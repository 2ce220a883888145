use serde_json::{Map, Value};

/// Geometry of a stored region.
///
/// Only polygons participate in intersection queries. Other geometry
/// types are carried through by name so the query service can skip
/// them without treating them as errors.
#[derive(Debug, Clone)]
pub enum RegionGeometry {
    /// Outer ring as (lng, lat) pairs. Holes are out of scope.
    Polygon(Vec<(f64, f64)>),
    /// Any non-polygon GeoJSON type (e.g. "Point", "LineString").
    Other(String),
}

impl RegionGeometry {
    pub fn as_polygon(&self) -> Option<&[(f64, f64)]> {
        match self {
            RegionGeometry::Polygon(outer) => Some(outer),
            RegionGeometry::Other(_) => None,
        }
    }
}

/// A persisted region: identifier, geometry, and display properties
/// (e.g. fill style). Created by the import path; never mutated by
/// the query path.
#[derive(Debug, Clone)]
pub struct StoredRegion {
    pub id: String,
    pub geometry: RegionGeometry,
    pub properties: Map<String, Value>,
}

impl StoredRegion {
    pub fn new(id: String, geometry: RegionGeometry, properties: Map<String, Value>) -> Self {
        Self {
            id,
            geometry,
            properties,
        }
    }

    #[allow(dead_code)]
    pub fn is_polygon(&self) -> bool {
        matches!(self.geometry, RegionGeometry::Polygon(_))
    }
}
