//! turns resolved rows into point and section device records.
mod extracted_dataset;
mod extraction_mode;
mod extraction_ops;
mod field_catalog;

pub use extracted_dataset::ExtractedDataset;
pub use extraction_mode::ExtractionMode;
pub use extraction_ops::{extract_dataset, extract_point, extract_record, extract_segment};
pub use field_catalog::FieldCatalog;
