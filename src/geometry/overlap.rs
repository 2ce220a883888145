//! Pairwise ring intersection via boolean clipping.
//!
//! Contract: exact results for simple, non-self-intersecting rings.
//! Self-intersecting input is a documented precondition violation;
//! behavior is undefined but non-crashing.

use geo::{Area, BooleanOps, LineString, MultiPolygon, Polygon};

use super::ring::{EPSILON, normalize_ring};
use crate::error::{Error, Result};

fn to_polygon(ring: &[(f64, f64)]) -> Result<Polygon<f64>> {
    let closed = normalize_ring(ring)?;
    let exterior: LineString<f64> = closed
        .iter()
        .map(|&(x, y)| geo::coord! { x: x, y: y })
        .collect();
    Ok(Polygon::new(exterior, vec![]))
}

/// Compute the overlap geometry between two rings.
///
/// Returns `None` when the rings are disjoint or share only boundary
/// (zero-area contact): that is the "no overlap" sentinel, not an error.
///
/// # Errors
///
/// `InvalidGeometry` when either ring fails normalization; `Computation`
/// when the clipper produces a non-finite area.
pub fn intersection(a: &[(f64, f64)], b: &[(f64, f64)]) -> Result<Option<MultiPolygon<f64>>> {
    let poly_a = to_polygon(a)?;
    let poly_b = to_polygon(b)?;

    let clipped = poly_a.intersection(&poly_b);
    let area = clipped.unsigned_area();

    if !area.is_finite() {
        return Err(Error::Computation(
            "overlap area is not finite".to_string(),
        ));
    }

    // Zero-area contact (shared edge or vertex) does not count as overlap
    if area <= EPSILON {
        return Ok(None);
    }

    Ok(Some(clipped))
}

/// Whether two rings share positive area.
///
/// Boundary-only contact does not count. Symmetric in its arguments.
#[allow(dead_code)]
pub fn intersects(a: &[(f64, f64)], b: &[(f64, f64)]) -> Result<bool> {
    Ok(intersection(a, b)?.is_some())
}
