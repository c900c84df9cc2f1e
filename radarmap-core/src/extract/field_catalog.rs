use crate::schema::FieldCandidates;
use serde::{Deserialize, Serialize};

/// every header candidate list used during extraction.
///
/// defaults follow the headers of the published enforcement device sheets. any list
/// may be replaced from a configuration file; omitted lists keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldCatalog {
    pub point_longitude: FieldCandidates,
    pub point_latitude: FieldCandidates,
    pub start_longitude: FieldCandidates,
    pub start_latitude: FieldCandidates,
    /// section sheets publish the radar position at the end of the controlled
    /// stretch, so the device location columns also serve as the end.
    pub end_longitude: FieldCandidates,
    pub end_latitude: FieldCandidates,
    pub speed_limit: FieldCandidates,
    /// alternate label lists. the first list resolving to a non-empty value is used.
    pub label: Vec<FieldCandidates>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self {
            point_longitude: ["Longitud", "X (WGS84)", "Longitude", "Lon"].into(),
            point_latitude: ["Latitud", "Y (WGS84)", "Latitude", "Lat"].into(),
            start_longitude: ["Longitud inicio tramo", "Longitud inicio"].into(),
            start_latitude: ["Latitud inicio tramo", "Latitud inicio"].into(),
            end_longitude: ["Longitud fin tramo", "Longitud fin", "X (WGS84)", "Longitud"].into(),
            end_latitude: ["Latitud fin tramo", "Latitud fin", "Y (WGS84)", "Latitud"].into(),
            speed_limit: ["Velocidad límite", "Velocidad limite", "Velocidad"].into(),
            label: vec![
                ["Ubicación", "Ubicacion"].into(),
                ["Carretera o vial", "Carretara o vial"].into(),
                ["Sentido"].into(),
                ["Tipo"].into(),
                ["PK"].into(),
            ],
        }
    }
}
