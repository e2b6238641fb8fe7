//! Gateways (IGW/DGW) und Link-Status der Verifier-Messungen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway, zu dem die Latenz eines EBR gemessen wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gateway {
    /// Batam Danga
    Bds,
    /// Batam Center
    Btc,
    /// Manado
    Pnk,
}

impl Gateway {
    /// Alle Gateways in Tabellen-Reihenfolge.
    pub const ALL: [Gateway; 3] = [Gateway::Bds, Gateway::Btc, Gateway::Pnk];

    /// Schlüssel im Backend-Payload (`"BDS"`, `"BTC"`, `"PNK"`).
    pub fn code(self) -> &'static str {
        match self {
            Gateway::Bds => "BDS",
            Gateway::Btc => "BTC",
            Gateway::Pnk => "PNK",
        }
    }

    /// Suffix, mit dem Trend-Serien eines Gateways benannt sind (z.B. `"- BDS"`).
    pub fn series_suffix(self) -> &'static str {
        match self {
            Gateway::Bds => "- BDS",
            Gateway::Btc => "- BTC",
            Gateway::Pnk => "- PNK",
        }
    }

    /// Ermittelt das Gateway anhand des Payload-Schlüssels (exakt, Großschreibung).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Zustand eines EBR→Gateway-Links laut Verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkStatus {
    /// Latenz innerhalb des Schwellwerts
    #[default]
    #[serde(rename = "clear")]
    Clear,
    /// Latenz über dem Schwellwert (degradiert)
    #[serde(rename = "not clear")]
    NotClear,
}

impl LinkStatus {
    /// Interpretiert den Status-String des Backends.
    ///
    /// Nur `"not clear"`, `"degrade"` und `"degraded"` gelten als degradiert;
    /// alles andere (auch leer) wird als `Clear` gewertet.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "not clear" | "degrade" | "degraded" => LinkStatus::NotClear,
            _ => LinkStatus::Clear,
        }
    }

    /// Wire-Darstellung (`"clear"` / `"not clear"`).
    pub fn as_str(self) -> &'static str {
        match self {
            LinkStatus::Clear => "clear",
            LinkStatus::NotClear => "not clear",
        }
    }

    /// true wenn der Link degradiert ist
    pub fn is_degraded(self) -> bool {
        self == LinkStatus::NotClear
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
