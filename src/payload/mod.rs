//! Normalisierung der Backend-Payloads.
//!
//! Pro REST-Endpunkt eine Funktion, die den dekodierten JSON-Body in einen
//! vollständig befüllten Record überführt. Fehlende Container gelten als
//! "keine Daten", Container mit falschem Typ als Fehler; Skalare werden
//! tolerant gelesen und fallen auf 0 / "" / `clear` zurück.

pub mod error;
pub mod filter_route;
pub mod gateway;
pub mod trend;
mod value;

pub use error::PayloadError;
pub use filter_route::{
    normalize_filter_route_response, DownlinkEntry, FilterRouteData, InformationEntry,
    PathSegment, UplinkEntry,
};
pub use gateway::{
    normalize_gateway_response, normalize_territory_group, GatewayVerifiers, NationWideSummary,
    TerritoryGroup, TransitEntry, VerifierEntry,
};
pub use trend::{normalize_trend_response, DataSeries, TrendPayload};

/// Dekodiert einen rohen Response-Body
pub fn parse_body(text: &str) -> Result<serde_json::Value, PayloadError> {
    Ok(serde_json::from_str(text)?)
}
