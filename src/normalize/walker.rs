use serde_json::Value;

use crate::error::{FeedError, Result};
use crate::normalize::feature::{
    Feature, FeatureCollection, Geometry, Output, Properties, RecordSet,
};
use crate::normalize::xml::Element;

/// Shape policy for one feed: how deep the records are nested in the source
/// document and what the output container is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Top-level children are records of scalar attributes.
    FlatGeo,
    /// As [`Shape::FlatGeo`], but a child tagged `group_tag` is a repeated
    /// sub-collection (one entry per lane) instead of a scalar.
    NestedGeo { group_tag: &'static str },
    /// Top-level children are groups; the records sit one level below and
    /// follow the [`Shape::NestedGeo`] record logic. Group structure is a
    /// traversal detail only and is not preserved in the output.
    DoubleNestedGeo { group_tag: &'static str },
    /// Non-geographic records, collected under a named list.
    Tabular { container: &'static str },
}

/// Normalize a parsed feed document according to its shape policy.
///
/// Returns `Ok(None)` when the document holds zero records; an empty
/// collection is never produced.
pub fn normalize(shape: Shape, root: &Element) -> Result<Option<Output>> {
    match shape {
        Shape::FlatGeo => collect_features(root.children.iter(), None),
        Shape::NestedGeo { group_tag } => collect_features(root.children.iter(), Some(group_tag)),
        Shape::DoubleNestedGeo { group_tag } => collect_features(
            root.children.iter().flat_map(|group| group.children.iter()),
            Some(group_tag),
        ),
        Shape::Tabular { container } => {
            let records: Vec<Properties> = root.children.iter().map(scalar_fields).collect();
            if records.is_empty() {
                return Ok(None);
            }
            Ok(Some(Output::Records(RecordSet { container, records })))
        }
    }
}

/// Build one feature per record element, in document order. The iterator is
/// already flattened, so double-nested sources yield one feature per innermost
/// record here rather than one per group.
fn collect_features<'a>(
    records: impl Iterator<Item = &'a Element>,
    group_tag: Option<&str>,
) -> Result<Option<Output>> {
    let mut collection = FeatureCollection::new();
    for record in records {
        collection.push(feature_from_record(record, group_tag)?);
    }
    if collection.is_empty() {
        return Ok(None);
    }
    Ok(Some(Output::Collection(collection)))
}

fn feature_from_record(record: &Element, group_tag: Option<&str>) -> Result<Feature> {
    let mut properties = Properties::new();
    for attribute in &record.children {
        if group_tag == Some(attribute.tag.as_str()) {
            let groups: Vec<Value> = attribute
                .children
                .iter()
                .map(|entry| Value::Object(scalar_fields(entry)))
                .collect();
            properties.insert(attribute.tag.clone(), Value::Array(groups));
        } else {
            properties.insert(attribute.tag.clone(), text_value(attribute));
        }
    }
    // Geometry comes last: the coordinates live among the record's own
    // attributes and must all be collected before extraction.
    let geometry = point_geometry(&properties)?;
    Ok(Feature::new(properties, geometry))
}

/// tag -> text content over an element's direct children.
fn scalar_fields(element: &Element) -> Properties {
    element
        .children
        .iter()
        .map(|field| (field.tag.clone(), text_value(field)))
        .collect()
}

fn text_value(element: &Element) -> Value {
    match &element.text {
        Some(text) => Value::String(text.clone()),
        None => Value::Null,
    }
}

fn point_geometry(properties: &Properties) -> Result<Geometry> {
    let longitude = coordinate(properties, "longitude")?;
    let latitude = coordinate(properties, "latitude")?;
    Ok(Geometry::point(longitude, latitude))
}

/// The source encodes coordinates as element text; coerce to numeric GeoJSON
/// coordinates and reject records where that is impossible.
fn coordinate(properties: &Properties, field: &'static str) -> Result<f64> {
    match properties.get(field) {
        None => Err(FeedError::MissingField { field }),
        Some(Value::String(text)) => {
            text.trim()
                .parse()
                .map_err(|_| FeedError::InvalidCoordinate {
                    field,
                    value: text.clone(),
                })
        }
        Some(other) => Err(FeedError::InvalidCoordinate {
            field,
            value: other.to_string(),
        }),
    }
}
