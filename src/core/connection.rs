//! Konfigurierte Verbindung zwischen zwei EBR-Stationen auf der Karte.

use crate::shared::curve_geometry::{Bulge, CurveOptions};
use serde::{Deserialize, Serialize};

/// Eine gezeichnete Verbindung zwischen zwei Stationen
///
/// Die Kurvenparameter sind optional; fehlende Werte kommen aus den
/// Default-`CurveOptions` der Laufzeit-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbrConnection {
    /// Start-Stationscode (`pe_code`)
    pub from: String,
    /// End-Stationscode (`pe_code`)
    pub to: String,
    /// Richtung, in die sich die Kurve wölbt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulge: Option<Bulge>,
    /// Bogenhöhe relativ zur Sehnenlänge
    #[serde(
        default,
        rename = "bowFactor",
        alias = "bow_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub bow_factor: Option<f64>,
    /// Polyline-Auflösung (wird auf mindestens 64 geklemmt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<usize>,
}

impl EbrConnection {
    /// Erstellt eine Verbindung ohne eigene Kurvenparameter
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            bulge: None,
            bow_factor: None,
            segments: None,
        }
    }

    /// Setzt die Wölbungsrichtung
    pub fn with_bulge(mut self, bulge: Bulge) -> Self {
        self.bulge = Some(bulge);
        self
    }

    /// Setzt den Bogenfaktor
    pub fn with_bow_factor(mut self, bow_factor: f64) -> Self {
        self.bow_factor = Some(bow_factor);
        self
    }

    /// Setzt die Segmentanzahl
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Kombiniert die eigenen Parameter mit den Defaults.
    pub fn curve_options(&self, defaults: &CurveOptions) -> CurveOptions {
        CurveOptions {
            segments: self.segments.unwrap_or(defaults.segments),
            bow_factor: self.bow_factor.unwrap_or(defaults.bow_factor),
            bulge: self.bulge.unwrap_or(defaults.bulge),
        }
    }
}
