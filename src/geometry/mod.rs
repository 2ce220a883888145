pub mod overlap;
pub mod ring;

pub use overlap::{intersection, intersects};
pub use ring::{EPSILON, normalize_ring};
