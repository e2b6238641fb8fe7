//! Uplink-/Downlink-Routen des Filter-Route-Endpunkts.

use super::value::{
    expect_object, map_entries, number_field, optional_list, optional_object, string_field,
    u32_field, JsonObject,
};
use super::PayloadError;
use serde::Serialize;
use serde_json::Value;

/// Ein Abschnitt eines Routing-Pfads (Knoten → Knoten, mit Latenz-Label)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    pub from: String,
    pub to: String,
    /// Angezeigter Wert der Leitung (meist Latenz in ms)
    pub value: String,
}

/// Zusammenfassung einer Route (Latenz EBR→GW, Symmetrie)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InformationEntry {
    pub latency_ebr_gw: f64,
    /// z.B. "Symmetric" / "Asymmetric"
    pub status_symmetric: String,
}

/// Route vom EBR Richtung Gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UplinkEntry {
    pub region: String,
    pub tera: String,
    pub target: String,
    #[serde(rename = "date_")]
    pub date: String,
    #[serde(rename = "hour_")]
    pub hour: u32,
    /// EBR-Name (Gruppierungsschlüssel)
    pub ebr: String,
    pub latency_ebr: f64,
    pub transit: String,
    pub path: String,
    #[serde(rename = "type")]
    pub route_type: String,
    pub paths: Vec<PathSegment>,
    pub information: Option<InformationEntry>,
}

/// Route vom Gateway zurück zum EBR
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownlinkEntry {
    pub region: String,
    pub tera: String,
    pub ip_address: String,
    pub target: String,
    #[serde(rename = "date_")]
    pub date: String,
    #[serde(rename = "hour_")]
    pub hour: u32,
    /// EBR-Name (Gruppierungsschlüssel)
    pub ebr: String,
    pub latency: f64,
    pub transit: String,
    pub path: String,
    #[serde(rename = "type")]
    pub route_type: String,
    pub paths: Vec<PathSegment>,
}

/// Normalisierte Antwort des Filter-Route-Endpunkts
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterRouteData {
    pub uplink: Vec<UplinkEntry>,
    pub downlink: Vec<DownlinkEntry>,
}

fn normalize_segment(obj: &JsonObject, path: &str) -> Result<PathSegment, PayloadError> {
    Ok(PathSegment {
        from: string_field(obj, "from", path),
        to: string_field(obj, "to", path),
        value: string_field(obj, "value", path),
    })
}

fn normalize_paths(obj: &JsonObject, path: &str) -> Result<Vec<PathSegment>, PayloadError> {
    let items = optional_list(obj, "paths", path)?;
    map_entries(items, &format!("{}.paths", path), normalize_segment)
}

fn normalize_uplink(obj: &JsonObject, path: &str) -> Result<UplinkEntry, PayloadError> {
    let information = optional_object(obj, "information", path)?.map(|info| {
        let info_path = format!("{}.information", path);
        InformationEntry {
            latency_ebr_gw: number_field(info, "latency_ebr_gw", &info_path),
            status_symmetric: string_field(info, "status_symmetric", &info_path),
        }
    });

    Ok(UplinkEntry {
        region: string_field(obj, "region", path),
        tera: string_field(obj, "tera", path),
        target: string_field(obj, "target", path),
        date: string_field(obj, "date_", path),
        hour: u32_field(obj, "hour_", path),
        ebr: string_field(obj, "ebr", path),
        latency_ebr: number_field(obj, "latency_ebr", path),
        transit: string_field(obj, "transit", path),
        path: string_field(obj, "path", path),
        route_type: string_field(obj, "type", path),
        paths: normalize_paths(obj, path)?,
        information,
    })
}

fn normalize_downlink(obj: &JsonObject, path: &str) -> Result<DownlinkEntry, PayloadError> {
    Ok(DownlinkEntry {
        region: string_field(obj, "region", path),
        tera: string_field(obj, "tera", path),
        ip_address: string_field(obj, "ip_address", path),
        target: string_field(obj, "target", path),
        date: string_field(obj, "date_", path),
        hour: u32_field(obj, "hour_", path),
        ebr: string_field(obj, "ebr", path),
        latency: number_field(obj, "latency", path),
        transit: string_field(obj, "transit", path),
        path: string_field(obj, "path", path),
        route_type: string_field(obj, "type", path),
        paths: normalize_paths(obj, path)?,
    })
}

/// Normalisiert die Antwort des Filter-Route-Endpunkts.
///
/// Erwartet `{status, data: {uplink: [...], downlink: [...]}}`.
pub fn normalize_filter_route_response(body: &Value) -> Result<FilterRouteData, PayloadError> {
    let root = expect_object(body, "")?;
    let Some(data) = optional_object(root, "data", "")? else {
        return Ok(FilterRouteData::default());
    };

    let uplink = map_entries(
        optional_list(data, "uplink", "data")?,
        "data.uplink",
        normalize_uplink,
    )?;
    let downlink = map_entries(
        optional_list(data, "downlink", "data")?,
        "data.downlink",
        normalize_downlink,
    )?;

    log::debug!(
        "Filter-Route normalisiert: {} Uplinks, {} Downlinks",
        uplink.len(),
        downlink.len()
    );
    Ok(FilterRouteData { uplink, downlink })
}
