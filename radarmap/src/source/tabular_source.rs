use super::{SourceConfig, SourceError, SourceFormat};
use radarmap_core::model::{CellValue, Row};
use std::{
    fmt::Display,
    io::Read,
    path::{Path, PathBuf},
};

/// where the dataset rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum TabularSource {
    File(PathBuf),
    Url(String),
}

impl From<&str> for TabularSource {
    fn from(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            TabularSource::Url(value.to_string())
        } else {
            TabularSource::File(PathBuf::from(value))
        }
    }
}

impl Display for TabularSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabularSource::File(path) => write!(f, "{}", path.display()),
            TabularSource::Url(url) => write!(f, "{url}"),
        }
    }
}

impl TabularSource {
    /// reads every row of the dataset. any failure here leaves nothing to process
    /// and is returned to the caller.
    pub async fn read_rows(&self, config: &SourceConfig) -> Result<Vec<Row>, SourceError> {
        let location = self.to_string();
        let format = config
            .format
            .or_else(|| SourceFormat::from_location(&location))
            .ok_or_else(|| SourceError::UnknownFormat(location.clone()))?;
        let content = match self {
            TabularSource::File(path) => read_file(path)?,
            TabularSource::Url(url) => fetch_url(url).await?,
        };
        let rows = match format {
            SourceFormat::Csv => rows_from_csv(content.as_bytes(), config.delimiter)?,
            SourceFormat::Json => rows_from_json(&content)?,
        };
        log::info!("read {} {format} rows from {location}", rows.len());
        Ok(rows)
    }
}

/// blocking read. the dataset is loaded once, before any routing request is queued,
/// so nothing else is waiting on the runtime.
fn read_file(path: &Path) -> Result<String, SourceError> {
    let location = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| SourceError::ReadError {
        location: location.clone(),
        message: e.to_string(),
    })?;
    decode_utf8(location, bytes)
}

async fn fetch_url(url: &str) -> Result<String, SourceError> {
    let fetch_error = |message: String| SourceError::FetchError {
        url: url.to_string(),
        message,
    };
    let response = reqwest::get(url)
        .await
        .map_err(|e| fetch_error(format!("GET request failed: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("HTTP {status}")));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_error(format!("reading response failed: {e}")))?;
    decode_utf8(url.to_string(), bytes.to_vec())
}

fn decode_utf8(location: String, bytes: Vec<u8>) -> Result<String, SourceError> {
    String::from_utf8(bytes).map_err(|e| SourceError::EncodingError {
        location,
        offset: e.utf8_error().valid_up_to(),
    })
}

/// parses delimited text whose first record is the header. cells are trimmed and
/// empty cells become [`CellValue::Null`]. records shorter than the header simply
/// lack the trailing columns.
pub fn rows_from_csv<R: Read>(reader: R, delimiter: char) -> Result<Vec<Row>, SourceError> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(SourceError::InvalidDelimiter(delimiter))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();
    rdr.records()
        .map(|record| {
            let record = record?;
            let row = headers
                .iter()
                .zip(record.iter())
                .map(|(header, cell)| {
                    let value = match cell {
                        "" => CellValue::Null,
                        text => CellValue::from(text),
                    };
                    (header.clone(), value)
                })
                .collect::<Row>();
            Ok(row)
        })
        .collect()
}

/// parses a JSON array of row objects.
pub fn rows_from_json(content: &str) -> Result<Vec<Row>, SourceError> {
    let rows: Vec<Row> = serde_json::from_str(content)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::{rows_from_csv, rows_from_json, TabularSource};
    use crate::source::{SourceConfig, SourceError};
    use radarmap_core::model::CellValue;
    use std::path::PathBuf;

    #[test]
    fn test_semicolon_csv_with_bom() {
        let content = "\u{feff}Provincia;Longitud;Latitud;Velocidad límite\n\
                       Madrid;-3,7038;40,4168;50\n\
                       Toledo; -4,02 ;39,86;\n";
        let rows = rows_from_csv(content.as_bytes(), ';').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].columns().collect::<Vec<_>>()[0], "Provincia");
        assert_eq!(rows[0].get("Longitud"), Some(&CellValue::from("-3,7038")));
        assert_eq!(rows[1].get("Longitud"), Some(&CellValue::from("-4,02")));
        assert_eq!(rows[1].get("Velocidad límite"), Some(&CellValue::Null));
    }

    #[test]
    fn test_short_records() {
        let content = "a,b,c\n1,2\n";
        let rows = rows_from_csv(content.as_bytes(), ',').unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].get("c"), None);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let rows = rows_from_csv("Longitud,Latitud\n".as_bytes(), ',').unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_invalid_delimiter() {
        let result = rows_from_csv("a\n".as_bytes(), '→');
        assert!(matches!(result, Err(SourceError::InvalidDelimiter('→'))));
    }

    #[test]
    fn test_json_rows() {
        let content = r#"[
            {"Longitud": -3.7038, "Latitud": "40,4168", "PK": null},
            {"Tipo": "Tramo"}
        ]"#;
        let rows = rows_from_json(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Longitud"), Some(&CellValue::Number(-3.7038)));
        assert_eq!(rows[0].get("PK"), Some(&CellValue::Null));
        assert!(rows_from_json("{\"not\": \"an array\"}").is_err());
    }

    #[test]
    fn test_source_kind() {
        assert_eq!(
            TabularSource::from("https://example.org/radares.csv"),
            TabularSource::Url(String::from("https://example.org/radares.csv"))
        );
        assert_eq!(
            TabularSource::from("data/radares.csv"),
            TabularSource::File(PathBuf::from("data/radares.csv"))
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let source = TabularSource::from("does/not/exist/radares.csv");
        let result = source.read_rows(&SourceConfig::default()).await;
        assert!(matches!(result, Err(SourceError::ReadError { .. })));
    }

    #[tokio::test]
    async fn test_unknown_format() {
        let source = TabularSource::from("radares.xlsx");
        let result = source.read_rows(&SourceConfig::default()).await;
        assert!(matches!(result, Err(SourceError::UnknownFormat(_))));
    }

    #[tokio::test]
    async fn test_non_utf8_file_names_the_encoding() {
        let path = std::env::temp_dir().join(format!("radarmap_{}_cp1252.csv", std::process::id()));
        // "Ubicación" as exported in Windows-1252
        std::fs::write(&path, b"Ubicaci\xf3n;Longitud;Latitud\nA-6;-3,7;40,4\n").unwrap();
        let source = TabularSource::from(&*path.to_string_lossy());
        let result = source.read_rows(&SourceConfig::default()).await;
        let _ = std::fs::remove_file(&path);
        match result {
            Err(e @ SourceError::EncodingError { offset: 7, .. }) => {
                assert!(e.to_string().contains("UTF-8"), "{e}");
            }
            other => panic!("expected an encoding error, found {other:?}"),
        }
    }
}
