//! EBR-Stationen und Territorien als statische Referenzdaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Eine EBR/PE-Station mit Koordinate und Anzeige-Metadaten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbrLocation {
    /// Eindeutiger Stationscode (z.B. `MDC`)
    pub pe_code: String,
    /// Längengrad (Dezimalgrad)
    pub lon: f64,
    /// Breitengrad (Dezimalgrad)
    pub lat: f64,
    /// Anzeigename des PE
    #[serde(default)]
    pub label: String,
    /// Abgedecktes Gebiet (falls bekannt)
    #[serde(default)]
    pub coverage: Option<String>,
    /// Regional-Office-Kürzel (TREG1..TREG7)
    #[serde(default)]
    pub treg: Option<String>,
    /// Pixel-Versatz des Markers bei überlappenden Stationen
    #[serde(default)]
    pub offset: [i32; 2],
}

impl EbrLocation {
    /// Erstellt eine Station ohne Anzeige-Metadaten
    pub fn new(pe_code: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            pe_code: pe_code.into(),
            lon,
            lat,
            label: String::new(),
            coverage: None,
            treg: None,
            offset: [0, 0],
        }
    }

    /// Position als (Lon, Lat)
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.lon, self.lat)
    }
}

/// Geografischer Mittelpunkt (Mapbox-Konvention `lng`/`lat`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

/// Gruppierung von Stationen für die Dashboard-Organisation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    /// Territoriums-Nummer (1..=4), entspricht dem Schlüssel im Backend-Payload
    pub id: u32,
    /// Anzeigename (z.B. "Territory 1")
    pub name: String,
    /// Abgedeckte Region (z.B. "Sumatra")
    pub region: String,
    /// Kartenmittelpunkt für den Fly-To
    pub center: LngLat,
    /// Zoom-Stufe für den Fly-To
    pub zoom: f64,
    /// Anzahl EBR im Territorium
    #[serde(rename = "ebrCount", alias = "ebr_count")]
    pub ebr_count: u32,
    /// Anzahl Links zu Gateways
    #[serde(rename = "linkToGw", alias = "link_to_gw")]
    pub link_to_gw: u32,
    /// Akzentfarbe (Hex)
    pub color: String,
}

impl Territory {
    /// Schlüssel im Backend-Payload (`"1"`..`"4"`)
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}
