//! Join der Verifier-Messungen mit den Transit-Listen pro Territorium.
//!
//! Join-Schlüssel: Transit-Name == Verifier-Hostname (exakter Vergleich).

use crate::core::{Gateway, LinkStatus, ReferenceCatalog};
use crate::payload::{GatewayVerifiers, TerritoryGroup, VerifierEntry};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Messwerte eines Gateways für einen Transit
///
/// Serialisiert als `{"ref": "12.00", "lat": "9.50", "status": "clear"}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GatewayReading {
    /// Referenz-Schwellwert des Verifiers
    #[serde(rename = "ref", serialize_with = "two_decimals")]
    pub reference: f64,
    /// Gemessene Latenz
    #[serde(rename = "lat", serialize_with = "two_decimals")]
    pub latency: f64,
    pub status: LinkStatus,
}

impl GatewayReading {
    fn from_verifier(entry: Option<&VerifierEntry>) -> Self {
        entry
            .map(|e| Self {
                reference: e.threshold,
                latency: e.latency,
                status: e.status,
            })
            .unwrap_or_default()
    }
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

/// Tabellenzeile: ein Transit mit den Messwerten aller drei Gateways
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayLatencyRow {
    pub transit: String,
    pub bds: GatewayReading,
    pub btc: GatewayReading,
    pub pnk: GatewayReading,
}

impl GatewayLatencyRow {
    pub fn reading(&self, gateway: Gateway) -> &GatewayReading {
        match gateway {
            Gateway::Bds => &self.bds,
            Gateway::Btc => &self.btc,
            Gateway::Pnk => &self.pnk,
        }
    }

    /// true wenn mindestens ein Gateway degradiert meldet
    pub fn any_degraded(&self) -> bool {
        Gateway::ALL
            .iter()
            .any(|g| self.reading(*g).status.is_degraded())
    }
}

/// Ein Territorium mit Anzeigename und seinen Tabellenzeilen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerritoryTable {
    pub territory_key: String,
    pub name: String,
    pub rows: Vec<GatewayLatencyRow>,
}

/// Indexiert eine Verifier-Liste nach Hostname; der erste Eintrag gewinnt.
fn index_by_hostname(
    gateway: Gateway,
    entries: &[VerifierEntry],
) -> HashMap<&str, &VerifierEntry> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        if index.contains_key(entry.hostname.as_str()) {
            log::warn!(
                "{}: Hostname '{}' mehrfach gemeldet, spaeterer Eintrag ignoriert",
                gateway,
                entry.hostname
            );
            continue;
        }
        index.insert(entry.hostname.as_str(), entry);
    }
    index
}

/// Baut pro Territorium und Transit eine Zeile mit Referenz, Latenz und
/// Status aller drei Gateways.
///
/// Fehlt ein Hostname in einer Verifier-Liste, gilt für dieses Gateway
/// `ref = 0`, `lat = 0`, `status = clear`. Territorien und Transits behalten
/// die Eingabe-Reihenfolge.
pub fn join_gateway_latency(
    verifiers: &GatewayVerifiers,
    territories: &TerritoryGroup,
) -> IndexMap<String, Vec<GatewayLatencyRow>> {
    let bds = index_by_hostname(Gateway::Bds, &verifiers.bds);
    let btc = index_by_hostname(Gateway::Btc, &verifiers.btc);
    let pnk = index_by_hostname(Gateway::Pnk, &verifiers.pnk);

    territories
        .iter()
        .map(|(key, transits)| {
            let rows = transits
                .iter()
                .map(|transit| {
                    let name = transit.transit.as_str();
                    GatewayLatencyRow {
                        transit: transit.transit.clone(),
                        bds: GatewayReading::from_verifier(bds.get(name).copied()),
                        btc: GatewayReading::from_verifier(btc.get(name).copied()),
                        pnk: GatewayReading::from_verifier(pnk.get(name).copied()),
                    }
                })
                .collect();
            (key.clone(), rows)
        })
        .collect()
}

/// Wie `join_gateway_latency`, benennt die Territorien aber über den Katalog.
pub fn gateway_table(
    verifiers: &GatewayVerifiers,
    territories: &TerritoryGroup,
    catalog: &ReferenceCatalog,
) -> Vec<TerritoryTable> {
    join_gateway_latency(verifiers, territories)
        .into_iter()
        .map(|(territory_key, rows)| TerritoryTable {
            name: catalog.territory_name(&territory_key),
            territory_key,
            rows,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::TransitEntry;

    fn verifier(
        hostname: &str,
        latency: f64,
        threshold: f64,
        status: LinkStatus,
    ) -> VerifierEntry {
        VerifierEntry {
            verifier_id: format!("v-{}", hostname),
            hostname: hostname.to_string(),
            latency,
            threshold,
            status,
        }
    }

    fn transit(name: &str) -> TransitEntry {
        TransitEntry {
            transit: name.to_string(),
            baseline: 0.0,
            latency: 0.0,
            status: None,
        }
    }

    #[test]
    fn test_duplicate_hostname_first_wins() {
        let verifiers = GatewayVerifiers {
            bds: vec![
                verifier("TR-A", 10.0, 20.0, LinkStatus::Clear),
                verifier("TR-A", 99.0, 99.0, LinkStatus::NotClear),
            ],
            ..Default::default()
        };
        let mut territories = TerritoryGroup::new();
        territories.insert("1".to_string(), vec![transit("TR-A")]);

        let joined = join_gateway_latency(&verifiers, &territories);
        let row = &joined["1"][0];
        assert_eq!(row.bds.latency, 10.0);
        assert_eq!(row.bds.reference, 20.0);
        assert_eq!(row.bds.status, LinkStatus::Clear);
    }

    #[test]
    fn test_any_degraded() {
        let row = GatewayLatencyRow {
            transit: "TR".to_string(),
            bds: GatewayReading::default(),
            btc: GatewayReading {
                status: LinkStatus::NotClear,
                ..Default::default()
            },
            pnk: GatewayReading::default(),
        };
        assert!(row.any_degraded());
    }

    #[test]
    fn test_reading_serializes_two_decimals() {
        let reading = GatewayReading {
            reference: 30.0,
            latency: 12.345,
            status: LinkStatus::NotClear,
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"ref":"30.00","lat":"12.35","status":"not clear"}"#);
    }

    #[test]
    fn test_gateway_table_names_territories() {
        let mut territories = TerritoryGroup::new();
        territories.insert("3".to_string(), vec![transit("TR-X")]);
        territories.insert("7".to_string(), vec![]);

        let tables = gateway_table(
            &GatewayVerifiers::default(),
            &territories,
            &ReferenceCatalog::builtin(),
        );
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "Territory 3");
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[1].territory_key, "7");
        assert!(tables[1].rows.is_empty());
    }
}
