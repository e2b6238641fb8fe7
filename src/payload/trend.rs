//! Trend-Serien (EBR→GW) pro Region für die Stunden-Charts.

use super::value::{
    child_path, expect_object, lenient_f64, lenient_string, map_entries, optional_list,
    optional_object, string_field, type_name, JsonObject,
};
use super::PayloadError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Reservierte Schlüssel im `data`-Objekt, die keine Regionen sind
const RESERVED_KEYS: [&str; 3] = ["subtitle", "range_week", "range_date"];

/// Eine benannte Zahlenreihe (z.B. `"MDC - BDS"`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSeries {
    pub name: String,
    pub data: Vec<f64>,
    /// Chart-Typ (z.B. `"line"`)
    #[serde(rename = "type")]
    pub kind: String,
}

/// Normalisierte Antwort des Trend-Endpunkts
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrendPayload {
    pub subtitle: String,
    pub range_week: Vec<String>,
    pub range_date: String,
    /// Regionsschlüssel → Serien, in Backend-Reihenfolge
    pub regions: IndexMap<String, Vec<DataSeries>>,
}

fn normalize_series(obj: &JsonObject, path: &str) -> Result<DataSeries, PayloadError> {
    let data_path = child_path(path, "data");
    let data = optional_list(obj, "data", path)?
        .iter()
        .enumerate()
        .map(|(idx, v)| lenient_f64(Some(v), &format!("{}[{}]", data_path, idx)))
        .collect();

    Ok(DataSeries {
        name: string_field(obj, "name", path),
        data,
        kind: string_field(obj, "type", path),
    })
}

/// Normalisiert die Antwort des Trend-Endpunkts.
///
/// Erwartet `{status, data: {subtitle, range_week, range_date, <region>: [series...]}}`.
/// Jeder Schlüssel außer den reservierten mit einer Liste als Wert ist eine
/// Region; andere Werte werden übersprungen.
pub fn normalize_trend_response(body: &Value) -> Result<TrendPayload, PayloadError> {
    let root = expect_object(body, "")?;
    let Some(data) = optional_object(root, "data", "")? else {
        return Ok(TrendPayload::default());
    };

    let mut payload = TrendPayload {
        subtitle: string_field(data, "subtitle", "data"),
        range_week: optional_list(data, "range_week", "data")?
            .iter()
            .map(|v| lenient_string(Some(v), "data.range_week"))
            .collect(),
        range_date: string_field(data, "range_date", "data"),
        regions: IndexMap::new(),
    };

    for (key, value) in data {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let Value::Array(items) = value else {
            log::debug!(
                "data.{}: {} statt Serienliste, uebersprungen",
                key,
                type_name(value)
            );
            continue;
        };
        let series = map_entries(items, &child_path("data", key), normalize_series)?;
        payload.regions.insert(key.clone(), series);
    }

    Ok(payload)
}
