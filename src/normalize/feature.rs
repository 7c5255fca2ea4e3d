use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Property map of one normalized record: XML tag -> text content.
///
/// Scalar attributes become `Value::String`, absent or empty text becomes
/// `Value::Null`, and a lane group becomes a `Value::Array` of lane objects.
pub type Properties = Map<String, Value>;

/// GeoJSON point geometry. Coordinate order is fixed as [longitude, latitude].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: &'static str,
    pub coordinates: [f64; 2],
}

impl Geometry {
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            geometry_type: "Point",
            coordinates: [longitude, latitude],
        }
    }
}

/// One point-located feed record in GeoJSON feature form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(properties: Properties, geometry: Geometry) -> Self {
        Self {
            feature_type: "Feature",
            properties,
            geometry,
        }
    }
}

/// Top-level container for geographic feeds.
///
/// `feature_count` always equals `features.len()`; features are only added
/// through [`FeatureCollection::push`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: &'static str,
    #[serde(rename = "featureCount")]
    pub feature_count: usize,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            collection_type: "FeatureCollection",
            feature_count: 0,
            features: Vec::new(),
        }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
        self.feature_count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level container for non-geographic feeds.
///
/// Serializes as a single-key object, e.g. `{"restrictions": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub container: &'static str,
    pub records: Vec<Properties>,
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.container, &self.records)?;
        map.end()
    }
}

/// Normalized output of one feed request, either shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Collection(FeatureCollection),
    Records(RecordSet),
}
