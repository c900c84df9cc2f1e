use serde::{Deserialize, Deserializer, Serialize};

/// a raw spreadsheet cell as handed over by the tabular row source.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl CellValue {
    /// renders a cell as an optional descriptive attribute (speed limit, label).
    /// text is trimmed and dropped when empty, numbers use the shortest display
    /// form (`50.0` becomes `"50"`).
    pub fn to_attribute(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Number(n) if n.is_finite() => Some(n.to_string()),
            CellValue::Number(_) => None,
            CellValue::Null => None,
        }
    }
}

impl From<serde_json::Value> for CellValue {
    /// booleans, arrays and objects carry no usable coordinate or attribute and are read as Null.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
            serde_json::Value::String(s) => CellValue::Text(s),
            _ => CellValue::Null,
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(CellValue::from)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
