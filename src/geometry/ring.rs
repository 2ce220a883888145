use crate::error::{Error, Result};

/// Coordinate comparison tolerance. Absorbs floating-point noise when
/// checking ring closure, vertex distinctness, and overlap area.
pub const EPSILON: f64 = 1e-9;

pub(crate) fn points_equal(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() <= EPSILON && (a.1 - b.1).abs() <= EPSILON
}

/// Normalize a polygon ring to closed form.
///
/// Requires at least 3 distinct finite vertices. If the last point does
/// not equal the first (within [`EPSILON`]), the first point is appended
/// to close the ring. Idempotent: normalizing an already-closed ring
/// returns it unchanged.
///
/// # Errors
///
/// `InvalidGeometry` when a coordinate is non-finite or fewer than 3
/// distinct vertices are supplied.
pub fn normalize_ring(points: &[(f64, f64)]) -> Result<Vec<(f64, f64)>> {
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidGeometry(
                "ring contains a non-finite coordinate".to_string(),
            ));
        }
    }

    let mut distinct: Vec<(f64, f64)> = Vec::new();
    for &p in points {
        if !distinct.iter().any(|&q| points_equal(p, q)) {
            distinct.push(p);
        }
    }

    if distinct.len() < 3 {
        return Err(Error::InvalidGeometry(format!(
            "ring needs at least 3 distinct vertices, got {}",
            distinct.len()
        )));
    }

    let mut ring = points.to_vec();
    let first = ring[0];
    let last = ring[ring.len() - 1];
    if !points_equal(first, last) {
        ring.push(first);
    }

    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_closes_open_ring() {
        let open = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        let ring = normalize_ring(&open).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn test_normalize_idempotent() {
        let open = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let once = normalize_ring(&open).unwrap();
        let twice = normalize_ring(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_two_points_fails() {
        let result = normalize_ring(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_normalize_duplicate_points_fail() {
        // 4 points but only 2 distinct vertices
        let points = vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)];
        let result = normalize_ring(&points);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_normalize_non_finite_fails() {
        let points = vec![(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)];
        let result = normalize_ring(&points);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_normalize_epsilon_closure() {
        // Last point within EPSILON of the first counts as closed
        let points = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1e-12)];
        let ring = normalize_ring(&points).unwrap();
        assert_eq!(ring.len(), 4);
    }
}
