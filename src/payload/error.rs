//! Fehler der Payload-Normalisierung.

use thiserror::Error;

/// Ein Backend-Payload konnte nicht normalisiert werden.
///
/// Fehlende oder `null`-Container sind kein Fehler (leere Daten); nur ein
/// vorhandener Container mit falschem JSON-Typ wird gemeldet.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Response-Body ist kein gueltiges JSON
    #[error("Response-Body ist kein gueltiges JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Container hat den falschen JSON-Typ
    #[error("{path}: erwartet {expected}, gefunden {found}")]
    UnexpectedShape {
        /// JSON-Pfad des Containers (z.B. `data.uplink[3]`)
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl PayloadError {
    pub(crate) fn shape(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        PayloadError::UnexpectedShape {
            path: path.into(),
            expected,
            found,
        }
    }
}
