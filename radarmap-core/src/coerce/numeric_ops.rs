use crate::model::{CellValue, Coordinate};

/// converts a raw cell into a float. total: never panics, returns NaN for absent,
/// null, or unparseable input. callers check `is_finite` before using the value.
///
/// text is trimmed and its first comma is read as the decimal separator, so
/// `"40,4168"` and `"40.4168"` coerce to the same value.
pub fn to_number(raw: Option<&CellValue>) -> f64 {
    match raw {
        Some(CellValue::Number(n)) => *n,
        Some(CellValue::Text(s)) => s
            .trim()
            .replacen(',', ".", 1)
            .parse::<f64>()
            .unwrap_or(f64::NAN),
        Some(CellValue::Null) | None => f64::NAN,
    }
}

/// coerces a latitude/longitude pair of cells into a [`Coordinate`], None when either
/// side is not a finite, in-range number.
pub fn to_coordinate(lat: Option<&CellValue>, lon: Option<&CellValue>) -> Option<Coordinate> {
    Coordinate::try_new(to_number(lat), to_number(lon))
}
