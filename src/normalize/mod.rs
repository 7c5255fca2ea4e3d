//! XML-to-JSON normalization: a minimal element tree, the GeoJSON-style
//! output types, and the shape-driven walkers that connect the two.

pub mod feature;
pub mod walker;
pub mod xml;

pub use feature::{Feature, FeatureCollection, Geometry, Output, Properties, RecordSet};
pub use walker::{normalize, Shape};
