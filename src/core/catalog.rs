//! Statischer Referenzkatalog: Stationen, Territorien und Kartenverbindungen.
//!
//! Der Katalog wird einmal beim Start geladen und danach nur gelesen.

use super::{EbrConnection, EbrLocation, Territory};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Eingebetteter Standardkatalog
const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/reference_catalog.json");

/// Fehler beim Laden eines Referenzkatalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Katalog ist kein gueltiges JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Stationscode doppelt im Katalog: {0}")]
    DuplicateLocation(String),
    #[error("Katalog-Datei nicht lesbar: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    locations: Vec<EbrLocation>,
    #[serde(default)]
    territories: Vec<Territory>,
    #[serde(default)]
    connections: Vec<EbrConnection>,
}

/// Stationen (nach Code indexiert), Territorien und konfigurierte Verbindungen
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    locations: IndexMap<String, EbrLocation>,
    territories: Vec<Territory>,
    connections: Vec<EbrConnection>,
}

impl ReferenceCatalog {
    /// Katalog aus dem eingebetteten Asset.
    ///
    /// Das Asset wird in den Tests geprüft; ein Fehler hier ist ein Build-Defekt
    /// und fällt auf einen leeren Katalog zurück.
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Eingebetteter Katalog fehlerhaft: {}", e);
                Self::default()
            }
        }
    }

    /// Parsed einen Katalog aus JSON
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut locations = IndexMap::with_capacity(file.locations.len());
        for location in file.locations {
            if locations.contains_key(&location.pe_code) {
                return Err(CatalogError::DuplicateLocation(location.pe_code));
            }
            locations.insert(location.pe_code.clone(), location);
        }

        log::debug!(
            "Katalog geladen: {} Stationen, {} Territorien, {} Verbindungen",
            locations.len(),
            file.territories.len(),
            file.connections.len()
        );

        Ok(Self {
            locations,
            territories: file.territories,
            connections: file.connections,
        })
    }

    /// Lädt einen Katalog aus einer JSON-Datei
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        log::info!("Katalog geladen aus: {}", path.display());
        Ok(catalog)
    }

    /// Eigener Katalog aus `path`, sonst der eingebettete
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Station nach Code
    pub fn location(&self, pe_code: &str) -> Option<&EbrLocation> {
        self.locations.get(pe_code)
    }

    /// Alle Stationen in Katalog-Reihenfolge
    pub fn locations(&self) -> impl Iterator<Item = &EbrLocation> {
        self.locations.values()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Territorium nach ID
    pub fn territory(&self, id: u32) -> Option<&Territory> {
        self.territories.iter().find(|t| t.id == id)
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn connections(&self) -> &[EbrConnection] {
        &self.connections
    }

    /// Anzeigename für einen Territoriums-Schlüssel aus dem Backend.
    ///
    /// Unbekannte Schlüssel werden als `"Territory <key>"` angezeigt.
    pub fn territory_name(&self, key: &str) -> String {
        let key = key.trim();
        self.territories
            .iter()
            .find(|t| t.key() == key)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Territory {}", key))
    }
}
