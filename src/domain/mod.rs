pub mod region;

pub use region::{RegionGeometry, StoredRegion};
