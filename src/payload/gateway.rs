//! Verifier-Messungen pro Gateway und Transit-Listen pro Territorium.

use super::value::{
    child_path, expect_object, lenient_string, map_entries, number_field, number_field_any,
    optional_list, optional_object, optional_string_field, string_field, JsonObject,
};
use super::PayloadError;
use crate::core::{Gateway, LinkStatus};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Eine Latenzmessung eines Verifiers Richtung Gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifierEntry {
    #[serde(rename = "verifierid")]
    pub verifier_id: String,
    /// Join-Schlüssel zum Transit-Namen
    pub hostname: String,
    /// Gemessene Latenz (ms)
    pub latency: f64,
    /// Referenz-Schwellwert (ms)
    pub threshold: f64,
    pub status: LinkStatus,
}

/// Landesweite Link-Trends für das Donut-Chart
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NationWideSummary {
    pub degrade: f64,
    pub maintain: f64,
    pub improve: f64,
}

impl NationWideSummary {
    pub fn total(&self) -> f64 {
        self.degrade + self.maintain + self.improve
    }
}

/// Normalisierte Antwort des Gateway-Endpunkts
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GatewayVerifiers {
    pub bds: Vec<VerifierEntry>,
    pub btc: Vec<VerifierEntry>,
    pub pnk: Vec<VerifierEntry>,
    pub nation_wide: NationWideSummary,
    /// Gesamtzahlen pro Territorium (`teritory_1` → Wert), Backend-Reihenfolge
    pub territory_totals: IndexMap<String, String>,
}

impl GatewayVerifiers {
    /// Verifier-Liste eines Gateways
    pub fn entries(&self, gateway: Gateway) -> &[VerifierEntry] {
        match gateway {
            Gateway::Bds => &self.bds,
            Gateway::Btc => &self.btc,
            Gateway::Pnk => &self.pnk,
        }
    }

    fn entries_mut(&mut self, gateway: Gateway) -> &mut Vec<VerifierEntry> {
        match gateway {
            Gateway::Bds => &mut self.bds,
            Gateway::Btc => &mut self.btc,
            Gateway::Pnk => &mut self.pnk,
        }
    }

    pub fn is_empty(&self) -> bool {
        Gateway::ALL.iter().all(|g| self.entries(*g).is_empty())
    }
}

/// Ein Transit-Hop eines Territoriums
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitEntry {
    /// Transit-Name (Join-Schlüssel zum Verifier-Hostname)
    pub transit: String,
    pub baseline: f64,
    pub latency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
}

/// Territoriums-Schlüssel → Transit-Liste, in Backend-Reihenfolge
pub type TerritoryGroup = IndexMap<String, Vec<TransitEntry>>;

fn normalize_verifier(obj: &JsonObject, path: &str) -> Result<VerifierEntry, PayloadError> {
    Ok(VerifierEntry {
        verifier_id: string_field(obj, "verifierid", path),
        hostname: string_field(obj, "hostname", path),
        latency: number_field(obj, "latency", path),
        // Backend schreibt "treshold"
        threshold: number_field_any(obj, &["treshold", "threshold"], path),
        status: LinkStatus::parse_lenient(&string_field(obj, "status", path)),
    })
}

fn normalize_transit(obj: &JsonObject, path: &str) -> Result<TransitEntry, PayloadError> {
    Ok(TransitEntry {
        transit: string_field(obj, "transit", path),
        baseline: number_field(obj, "baseline", path),
        latency: number_field(obj, "latency", path),
        status: optional_string_field(obj, "status", path)
            .map(|raw| LinkStatus::parse_lenient(&raw)),
    })
}

/// Normalisiert die Antwort des Gateway-Endpunkts.
///
/// Erwartet `{status, message: {BDS: [...], BTC: [...], PNK: [...]}, nation_wide, total_teritory}`.
/// Weitere Gateways in `message` (z.B. `JT2`) werden ignoriert.
pub fn normalize_gateway_response(body: &Value) -> Result<GatewayVerifiers, PayloadError> {
    let root = expect_object(body, "")?;
    let mut result = GatewayVerifiers::default();

    if let Some(message) = optional_object(root, "message", "")? {
        for gateway in Gateway::ALL {
            let path = format!("message.{}", gateway.code());
            let items = optional_list(message, gateway.code(), "message")?;
            *result.entries_mut(gateway) = map_entries(items, &path, normalize_verifier)?;
        }
        for key in message.keys() {
            if Gateway::from_code(key).is_none() {
                log::debug!("message.{}: kein ausgewertetes Gateway, ignoriert", key);
            }
        }
    }

    if let Some(nation_wide) = optional_object(root, "nation_wide", "")? {
        result.nation_wide = NationWideSummary {
            degrade: number_field(nation_wide, "degrade", "nation_wide"),
            maintain: number_field(nation_wide, "maintain", "nation_wide"),
            // Backend schreibt "improev"
            improve: number_field_any(nation_wide, &["improev", "improve"], "nation_wide"),
        };
    }

    if let Some(totals) = optional_object(root, "total_teritory", "")? {
        result.territory_totals = totals
            .iter()
            .map(|(key, value)| {
                let path = format!("total_teritory.{}", key);
                (key.clone(), lenient_string(Some(value), &path))
            })
            .collect();
    }

    log::debug!(
        "Gateway-Verifier normalisiert: BDS={}, BTC={}, PNK={}",
        result.bds.len(),
        result.btc.len(),
        result.pnk.len()
    );
    Ok(result)
}

/// Normalisiert eine Territoriums→Transit-Struktur.
///
/// Akzeptiert sowohl den Envelope `{status, data: {"1": [...], ...}}` als auch
/// das nackte Territoriums-Objekt.
pub fn normalize_territory_group(body: &Value) -> Result<TerritoryGroup, PayloadError> {
    let root = expect_object(body, "")?;

    let (territories, base_path) = if root.contains_key("data") {
        match optional_object(root, "data", "")? {
            Some(data) => (data, "data"),
            None => return Ok(TerritoryGroup::new()),
        }
    } else {
        (root, "")
    };

    let mut group = TerritoryGroup::with_capacity(territories.len());
    for key in territories.keys() {
        if key == "status" && base_path.is_empty() {
            continue;
        }
        let list_path = child_path(base_path, key);
        let items = optional_list(territories, key, base_path)?;
        let transits = map_entries(items, &list_path, normalize_transit)?;
        group.insert(key.clone(), transits);
    }
    Ok(group)
}
