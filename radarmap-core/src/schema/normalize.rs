use itertools::Itertools;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// canonical form of a header name used for matching: lower-cased, diacritics
/// removed (canonical decomposition with combining marks dropped), whitespace runs
/// collapsed to a single space, and trimmed.
///
/// `"  Velocidad   LÍMITE "` and `"velocidad limite"` share the form `"velocidad limite"`.
pub fn normalize_header(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_header;

    #[test]
    fn test_strips_diacritics_and_case() {
        assert_eq!(normalize_header("Velocidad límite"), "velocidad limite");
        assert_eq!(normalize_header("UBICACIÓN"), "ubicacion");
        assert_eq!(normalize_header("Año"), "ano");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalize_header("  Longitud \t inicio\u{00a0}\u{00a0}tramo "),
            "longitud inicio tramo"
        );
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_header(" X (WGS84)  ");
        assert_eq!(normalize_header(&once), once);
        assert_eq!(once, "x (wgs84)");
    }
}
