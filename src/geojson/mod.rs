//! Wire format: the GeoJSON-like shapes used for storage and queries.
//!
//! Coordinates are (lng, lat) pairs, GeoJSON order. Conversion to
//! (lat, lng) is a map-rendering concern and never happens here.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{RegionGeometry, StoredRegion};
use crate::error::{Error, Result};

/// A GeoJSON FeatureCollection as stored on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,
    pub features: Vec<Feature>,
}

/// A single stored feature: geometry plus display properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

/// Geometry member. Coordinates stay raw JSON so non-polygon types
/// pass through untouched; only Polygon coordinates are interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub type_: String,
    pub coordinates: Value,
}

/// Decode the outer ring of a Polygon geometry as (lng, lat) pairs.
///
/// Returns `None` when the geometry is not a Polygon or its
/// coordinates do not have Polygon shape.
pub fn polygon_outer_ring(geometry: &Geometry) -> Option<Vec<(f64, f64)>> {
    if geometry.type_ != "Polygon" {
        return None;
    }
    let rings: Vec<Vec<[f64; 2]>> = serde_json::from_value(geometry.coordinates.clone()).ok()?;
    let outer = rings.into_iter().next()?;
    Some(outer.into_iter().map(|[x, y]| (x, y)).collect())
}

/// Parse a FeatureCollection into stored regions.
///
/// Region ids come from a string `id` property when present, else the
/// zero-based position in the collection. Polygon features with
/// undecodable coordinates become empty rings so the problem surfaces
/// as a normalization failure at query time instead of vanishing here.
pub fn parse_regions(collection: &FeatureCollection) -> Vec<StoredRegion> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let id = feature
                .properties
                .get("id")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| index.to_string());

            let geometry = if feature.geometry.type_ == "Polygon" {
                RegionGeometry::Polygon(polygon_outer_ring(&feature.geometry).unwrap_or_default())
            } else {
                RegionGeometry::Other(feature.geometry.type_.clone())
            };

            StoredRegion::new(id, geometry, feature.properties.clone())
        })
        .collect()
}

/// Parse a query polygon: either a bare Polygon geometry or a Feature
/// wrapping one. Only the outer ring is used.
///
/// # Errors
///
/// `InvalidGeometry` when the input is not valid JSON for either shape,
/// the geometry type is not Polygon, or the coordinates do not have
/// Polygon nesting.
pub fn parse_query_ring(contents: &str) -> Result<Vec<(f64, f64)>> {
    let geometry = if let Ok(feature) = serde_json::from_str::<Feature>(contents) {
        feature.geometry
    } else {
        serde_json::from_str::<Geometry>(contents)
            .map_err(|e| Error::InvalidGeometry(format!("not a GeoJSON polygon: {}", e)))?
    };

    polygon_outer_ring(&geometry).ok_or_else(|| {
        if geometry.type_ == "Polygon" {
            Error::InvalidGeometry("Polygon geometry has malformed coordinates".to_string())
        } else {
            Error::InvalidGeometry(format!(
                "expected a Polygon geometry, got {}",
                geometry.type_
            ))
        }
    })
}

/// Emit a stored polygon region back in its storage Feature shape,
/// properties preserved verbatim.
pub fn region_feature(region: &StoredRegion) -> Option<Feature> {
    let outer = region.geometry.as_polygon()?;
    let coordinates: Vec<Vec<[f64; 2]>> = vec![outer.iter().map(|&(x, y)| [x, y]).collect()];
    Some(Feature {
        type_: "Feature".to_string(),
        properties: region.properties.clone(),
        geometry: Geometry {
            type_: "Polygon".to_string(),
            coordinates: serde_json::json!(coordinates),
        },
    })
}

/// Emit a match with the computed overlap geometry in place of the
/// stored geometry.
pub fn overlap_feature(region: &StoredRegion, overlap: &MultiPolygon<f64>) -> Feature {
    let coordinates: Vec<Vec<Vec<[f64; 2]>>> = overlap
        .0
        .iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors().iter())
                .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
                .collect()
        })
        .collect();

    Feature {
        type_: "Feature".to_string(),
        properties: region.properties.clone(),
        geometry: Geometry {
            type_: "MultiPolygon".to_string(),
            coordinates: serde_json::json!(coordinates),
        },
    }
}

pub fn feature_collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        type_: "FeatureCollection".to_string(),
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r##"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "fill": "#ff0000" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [2.0, 2.0] }
            }
        ]
    }"##;

    #[test]
    fn test_parse_regions() {
        let collection: FeatureCollection = serde_json::from_str(COLLECTION).unwrap();
        let regions = parse_regions(&collection);

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].id, "0");
        assert!(regions[0].is_polygon());
        assert_eq!(
            regions[0].properties.get("fill").and_then(|v| v.as_str()),
            Some("#ff0000")
        );
        assert!(!regions[1].is_polygon());
    }

    #[test]
    fn test_parse_regions_id_property() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "id": "zone-7" },
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] }
            }]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(json).unwrap();
        let regions = parse_regions(&collection);
        assert_eq!(regions[0].id, "zone-7");
    }

    #[test]
    fn test_parse_query_ring_bare_geometry() {
        let json = r#"{ "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] }"#;
        let ring = parse_query_ring(json).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], (0.0, 0.0));
        assert_eq!(ring[1], (1.0, 0.0));
    }

    #[test]
    fn test_parse_query_ring_feature() {
        let json = r#"{
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] }
        }"#;
        let ring = parse_query_ring(json).unwrap();
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn test_parse_query_ring_rejects_point() {
        let json = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#;
        let result = parse_query_ring(json);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_parse_query_ring_malformed_coordinates() {
        // Polygon type with Point-shaped coordinates
        let json = r#"{ "type": "Polygon", "coordinates": [1.0, 2.0] }"#;
        match parse_query_ring(json) {
            Err(Error::InvalidGeometry(msg)) => assert!(msg.contains("malformed coordinates")),
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }
    }

    #[test]
    fn test_region_feature_round_trip() {
        let collection: FeatureCollection = serde_json::from_str(COLLECTION).unwrap();
        let regions = parse_regions(&collection);

        let feature = region_feature(&regions[0]).unwrap();
        assert_eq!(feature.geometry.type_, "Polygon");
        assert_eq!(
            feature.properties.get("fill").and_then(|v| v.as_str()),
            Some("#ff0000")
        );

        let ring = polygon_outer_ring(&feature.geometry).unwrap();
        assert_eq!(ring.len(), 5);
    }
}
