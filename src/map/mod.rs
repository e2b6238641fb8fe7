//! Karten-Overlay: Verbindungs-GeoJSON und Karten-Lebenszyklus.

pub mod connection_layer;
pub mod session;

pub use connection_layer::{
    catalog_geojson, connections_geojson, CONNECTIONS_LAYER_ID, CONNECTIONS_SOURCE_ID,
};
pub use session::{MapBackend, MapSession};
