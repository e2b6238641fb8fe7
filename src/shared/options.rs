//! Zentrale Konfiguration für das MBB Routing Dashboard.
//!
//! `DashboardOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::curve_geometry::{Bulge, CurveOptions, DEFAULT_BOW_FACTOR, DEFAULT_CURVE_SEGMENTS};
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Backend ─────────────────────────────────────────────────────────

/// Basis-URL der REST-Endpunkte.
pub const API_BASE_URL: &str = "/api";
/// Request-Timeout in Millisekunden.
pub const API_TIMEOUT_MS: u64 = 10_000;

// ── Karte ───────────────────────────────────────────────────────────

/// Mapbox-Style der Übersichtskarte.
pub const MAP_STYLE_URL: &str = "mapbox://styles/mhmfajar/cmj9bkmus002m01sa35ty1178";
/// Dauer der Fly-To-Animation beim Territoriums-Wechsel.
pub const FLY_TO_DURATION_MS: u32 = 1500;

/// Umgebungsvariable für die API-Basis-URL.
pub const ENV_API_BASE_URL: &str = "MBB_API_BASE_URL";
/// Umgebungsvariable für den API-Timeout.
pub const ENV_API_TIMEOUT_MS: &str = "MBB_API_TIMEOUT_MS";
/// Umgebungsvariable für den Mapbox-Token.
pub const ENV_MAPBOX_ACCESS_TOKEN: &str = "MBB_MAPBOX_ACCESS_TOKEN";

/// Kamera-Zustand der Karte (Mittelpunkt, Zoom, Neigung, Drehung)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub bearing: f64,
}

impl Default for ViewState {
    /// Ganz Indonesien im Blick
    fn default() -> Self {
        Self {
            longitude: 118.0,
            latitude: -2.5,
            zoom: 4.2,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Dashboard-Optionen.
/// Wird als `mbb_routing_mgt.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    // ── Backend ─────────────────────────────────────────────────
    /// Basis-URL der REST-Endpunkte
    pub api_base_url: String,
    /// Request-Timeout in Millisekunden
    pub api_timeout_ms: u64,

    // ── Karte ───────────────────────────────────────────────────
    /// Mapbox-Zugangstoken (leer = nicht gesetzt)
    pub mapbox_access_token: String,
    /// Style-URL der Karte
    pub map_style_url: String,
    /// Dauer der Fly-To-Animation
    pub fly_to_duration_ms: u32,
    /// Standard-Kamera beim Mount und nach Reset
    pub default_view: ViewState,

    // ── Verbindungskurven ───────────────────────────────────────
    /// Defaults für Verbindungen ohne eigene Kurvenparameter
    pub curve: CurveOptions,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            api_timeout_ms: API_TIMEOUT_MS,
            mapbox_access_token: String::new(),
            map_style_url: MAP_STYLE_URL.to_string(),
            fly_to_duration_ms: FLY_TO_DURATION_MS,
            default_view: ViewState::default(),
            curve: CurveOptions {
                segments: DEFAULT_CURVE_SEGMENTS,
                bow_factor: DEFAULT_BOW_FACTOR,
                bulge: Bulge::North,
            },
        }
    }
}

impl DashboardOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei {} nicht schreibbar", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mbb-routing"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mbb_routing_mgt.toml")
    }

    /// Überschreibt Backend- und Token-Werte aus der Prozess-Umgebung.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Wie `apply_env_overrides`, aber mit beliebiger Variablen-Quelle.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.api_timeout_ms = ms,
                _ => log::warn!("{} ungueltig, ignoriert: '{}'", ENV_API_TIMEOUT_MS, raw),
            }
        }
        if let Some(token) = lookup(ENV_MAPBOX_ACCESS_TOKEN) {
            self.mapbox_access_token = token;
        }
    }

    /// Vollständige URL eines Endpunkts (`api_base_url` + `/` + `endpoint`).
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let opts: DashboardOptions = toml::from_str(
            r#"
            api_base_url = "https://noc.example/api"

            [curve]
            segments = 128
            bow_factor = 0.8
            bulge = "south"
            "#,
        )
        .unwrap();

        assert_eq!(opts.api_base_url, "https://noc.example/api");
        assert_eq!(opts.api_timeout_ms, API_TIMEOUT_MS);
        assert_eq!(opts.curve.segments, 128);
        assert_eq!(opts.curve.bulge, Bulge::South);
        assert_eq!(opts.default_view, ViewState::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mbb_routing_mgt.toml");

        let mut opts = DashboardOptions::default();
        opts.mapbox_access_token = "pk.test".to_string();
        opts.default_view.zoom = 5.5;
        opts.save_to_file(&path).unwrap();

        let loaded = DashboardOptions::load_from_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = DashboardOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(loaded, DashboardOptions::default());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let mut opts = DashboardOptions::default();
        opts.apply_overrides(|key| match key {
            ENV_API_BASE_URL => Some("http://10.0.0.5:8080/api/".to_string()),
            ENV_API_TIMEOUT_MS => Some("abc".to_string()),
            _ => None,
        });

        assert_eq!(opts.api_base_url, "http://10.0.0.5:8080/api/");
        assert_eq!(opts.api_timeout_ms, API_TIMEOUT_MS);
        assert_eq!(
            opts.endpoint_url("/cti/gateway"),
            "http://10.0.0.5:8080/api/cti/gateway"
        );
    }
}
