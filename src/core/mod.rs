//! Core-Domänentypen: Gateways, Stationen, Territorien, Verbindungen, Katalog.

pub mod catalog;
pub mod connection;
pub mod gateway;
pub mod location;

pub use catalog::{CatalogError, ReferenceCatalog};
pub use connection::EbrConnection;
pub use gateway::{Gateway, LinkStatus};
pub use location::{EbrLocation, LngLat, Territory};
