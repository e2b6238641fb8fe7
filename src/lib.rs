//! MBB Routing MGT Library.
//! Verbindungskurven, Payload-Normalisierung und Latenz-Aggregation des
//! Routing-Dashboards, als Library exportiert für CLI, Tests und Benchmarks.

pub mod aggregate;
pub mod core;
pub mod map;
pub mod payload;
pub mod shared;

pub use aggregate::{
    extract_gateway_series, gateway_table, group_routes, join_gateway_latency, map_path_nodes,
    region_charts, GatewayLatencyRow, GatewayReading, GroupedRouteEntry, NodeKind, PathNode,
    RegionChart, TerritoryTable,
};
pub use core::{
    CatalogError, EbrConnection, EbrLocation, Gateway, LinkStatus, LngLat, ReferenceCatalog,
    Territory,
};
pub use map::{connections_geojson, MapBackend, MapSession};
pub use payload::{
    normalize_filter_route_response, normalize_gateway_response, normalize_territory_group,
    normalize_trend_response, parse_body, PayloadError,
};
pub use shared::{curve_between_points, Bulge, CurveOptions, DashboardOptions, ViewState};
