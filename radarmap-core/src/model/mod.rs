mod cell_value;
mod coordinate;
mod point_record;
mod radar_record;
mod route_geometry;
mod route_source;
mod row;
mod segment_record;

pub use cell_value::CellValue;
pub use coordinate::Coordinate;
pub use point_record::PointRecord;
pub use radar_record::RadarRecord;
pub use route_geometry::RouteGeometry;
pub use route_source::RouteSource;
pub use row::Row;
pub use segment_record::SegmentRecord;
