use super::OutputError;
use crate::pipeline::{PipelineOutput, RoutedSegment};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use radarmap_core::model::{PointRecord, SegmentRecord};
use std::io::Write;
use std::path::Path;

/// one feature per drawable item, in the order points, start-only sections,
/// routed sections. `padding` grows the collection bbox by that ratio of the
/// data extent; the bbox is absent when nothing was drawn.
pub fn to_feature_collection(output: &PipelineOutput, padding: f64) -> FeatureCollection {
    let features = output
        .points
        .iter()
        .map(point_feature)
        .chain(output.start_only.iter().map(start_only_feature))
        .chain(output.routes.iter().map(route_feature))
        .collect::<Vec<_>>();
    let bbox = output
        .bounds
        .padded_extent(padding)
        .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);
    FeatureCollection {
        bbox,
        features,
        foreign_members: None,
    }
}

/// writes the collection as JSON to `destination`, or to stdout when None.
pub fn write_feature_collection(
    collection: &FeatureCollection,
    destination: Option<&Path>,
) -> Result<(), OutputError> {
    let json = serde_json::to_string(collection)?;
    match destination {
        Some(path) => {
            std::fs::write(path, json).map_err(|source| OutputError::WriteError {
                destination: path.display().to_string(),
                source,
            })?;
            log::info!(
                "wrote {} features to {}",
                collection.features.len(),
                path.display()
            );
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|source| OutputError::WriteError {
                destination: String::from("stdout"),
                source,
            })
        }
    }
}

fn point_feature(point: &PointRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(String::from("kind"), JsonValue::from("fixed"));
    attributes(&mut properties, point.speed_limit.as_deref(), point.label.as_deref());
    feature(Value::Point(point.location.to_position()), properties)
}

fn start_only_feature(segment: &SegmentRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(String::from("kind"), JsonValue::from("section_start"));
    attributes(&mut properties, segment.speed_limit.as_deref(), segment.label.as_deref());
    feature(Value::Point(segment.start.to_position()), properties)
}

fn route_feature(route: &RoutedSegment) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(String::from("kind"), JsonValue::from("section"));
    properties.insert(
        String::from("source"),
        JsonValue::from(route.geometry.source().to_string()),
    );
    properties.insert(
        String::from("length_m"),
        JsonValue::from(route.geometry.length_meters().round()),
    );
    let segment = &route.segment;
    attributes(&mut properties, segment.speed_limit.as_deref(), segment.label.as_deref());
    feature(Value::from(&route.geometry.to_line_string()), properties)
}

fn attributes(properties: &mut JsonObject, speed_limit: Option<&str>, label: Option<&str>) {
    if let Some(speed_limit) = speed_limit {
        properties.insert(String::from("speed_limit"), JsonValue::from(speed_limit));
    }
    if let Some(label) = label {
        properties.insert(String::from("label"), JsonValue::from(label));
    }
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
