use super::{ExtractedDataset, ExtractionMode, FieldCatalog};
use crate::coerce::to_coordinate;
use crate::model::{PointRecord, RadarRecord, Row, SegmentRecord};
use crate::schema::SchemaIndex;

/// extracts every row of a dataset. rows yielding no record are only counted.
pub fn extract_dataset(
    rows: &[Row],
    catalog: &FieldCatalog,
    mode: ExtractionMode,
) -> ExtractedDataset {
    let mut dataset = ExtractedDataset::default();
    for row in rows {
        dataset.add(extract_record(row, catalog, mode));
    }
    log::debug!(
        "extracted {} points and {} segments from {} rows ({} rejected, mode={mode})",
        dataset.points.len(),
        dataset.segments.len(),
        dataset.rows_processed,
        dataset.rows_rejected
    );
    dataset
}

/// extracts a single row. None means the row was rejected: neither strategy found
/// coordinate columns holding finite, in-range values.
pub fn extract_record(
    row: &Row,
    catalog: &FieldCatalog,
    mode: ExtractionMode,
) -> Option<RadarRecord> {
    let index = SchemaIndex::new(row);
    match mode {
        ExtractionMode::Auto => extract_segment(&index, catalog)
            .map(RadarRecord::Segment)
            .or_else(|| extract_point(&index, catalog).map(RadarRecord::Point)),
        ExtractionMode::Points => extract_point(&index, catalog).map(RadarRecord::Point),
        ExtractionMode::Segments => extract_segment(&index, catalog).map(RadarRecord::Segment),
    }
}

/// point strategy: requires the device location columns.
pub fn extract_point(index: &SchemaIndex<'_>, catalog: &FieldCatalog) -> Option<PointRecord> {
    let location = to_coordinate(
        index.value(&catalog.point_latitude),
        index.value(&catalog.point_longitude),
    )?;
    Some(PointRecord {
        location,
        speed_limit: speed_limit(index, catalog),
        label: label(index, catalog),
    })
}

/// segment strategy: requires the section start columns. a missing or unusable end
/// still yields a start-only record.
pub fn extract_segment(index: &SchemaIndex<'_>, catalog: &FieldCatalog) -> Option<SegmentRecord> {
    let start = to_coordinate(
        index.value(&catalog.start_latitude),
        index.value(&catalog.start_longitude),
    )?;
    let end = to_coordinate(
        index.value(&catalog.end_latitude),
        index.value(&catalog.end_longitude),
    );
    Some(SegmentRecord {
        start,
        end,
        speed_limit: speed_limit(index, catalog),
        label: label(index, catalog),
    })
}

fn speed_limit(index: &SchemaIndex<'_>, catalog: &FieldCatalog) -> Option<String> {
    index
        .value(&catalog.speed_limit)
        .and_then(|cell| cell.to_attribute())
}

fn label(index: &SchemaIndex<'_>, catalog: &FieldCatalog) -> Option<String> {
    catalog
        .label
        .iter()
        .find_map(|candidates| index.value(candidates).and_then(|cell| cell.to_attribute()))
}
