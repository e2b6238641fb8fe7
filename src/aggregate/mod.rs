//! Aufbereitung normalisierter Payloads zu View-Modellen.
//!
//! Alle Funktionen sind rein: Eingaben bleiben unverändert, jedes Ergebnis
//! wird neu aufgebaut.

pub mod chart_series;
pub mod latency_join;
pub mod path_nodes;
pub mod route_grouping;

pub use chart_series::{extract_gateway_series, region_charts, RegionChart};
pub use latency_join::{
    gateway_table, join_gateway_latency, GatewayLatencyRow, GatewayReading, TerritoryTable,
};
pub use path_nodes::{map_path_nodes, NodeKind, PathNode};
pub use route_grouping::{group_routes, GroupedRouteEntry};
