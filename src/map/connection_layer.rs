//! GeoJSON-Aufbereitung der Stationsverbindungen für den Karten-Layer.

use crate::core::{EbrConnection, EbrLocation, ReferenceCatalog};
use crate::shared::curve_geometry::{curve_between_points, CurveOptions};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use std::collections::HashMap;

/// Source-ID der Verbindungs-Geometrie
pub const CONNECTIONS_SOURCE_ID: &str = "ebr-connections";
/// Layer-ID der gezeichneten Verbindungslinien
pub const CONNECTIONS_LAYER_ID: &str = "ebr-connections-line";

fn connection_feature(
    connection: &EbrConnection,
    from: &EbrLocation,
    to: &EbrLocation,
    defaults: &CurveOptions,
) -> Feature {
    let options = connection.curve_options(defaults);
    let coordinates = curve_between_points(from.position(), to.position(), &options)
        .into_iter()
        .map(|p| vec![p.x, p.y])
        .collect();

    let mut properties = JsonObject::new();
    properties.insert("from".to_string(), JsonValue::from(connection.from.clone()));
    properties.insert("to".to_string(), JsonValue::from(connection.to.clone()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Baut eine FeatureCollection mit einer gekrümmten LineString pro Verbindung.
///
/// Verbindungen mit unbekanntem Start- oder Endcode werden übersprungen.
pub fn connections_geojson(
    connections: &[EbrConnection],
    locations: &[EbrLocation],
    defaults: &CurveOptions,
) -> FeatureCollection {
    let by_code: HashMap<&str, &EbrLocation> = locations
        .iter()
        .map(|loc| (loc.pe_code.as_str(), loc))
        .collect();

    let features = connections
        .iter()
        .filter_map(|connection| {
            let from = by_code.get(connection.from.as_str());
            let to = by_code.get(connection.to.as_str());
            match (from, to) {
                (Some(from), Some(to)) => {
                    Some(connection_feature(connection, from, to, defaults))
                }
                _ => {
                    log::warn!(
                        "Verbindung {} -> {}: Station unbekannt, uebersprungen",
                        connection.from,
                        connection.to
                    );
                    None
                }
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Verbindungen des Katalogs als FeatureCollection
pub fn catalog_geojson(catalog: &ReferenceCatalog, defaults: &CurveOptions) -> FeatureCollection {
    let locations: Vec<EbrLocation> = catalog.locations().cloned().collect();
    connections_geojson(catalog.connections(), &locations, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::curve_geometry::Bulge;

    fn locations() -> Vec<EbrLocation> {
        vec![
            EbrLocation::new("MDC", 98.3535818, 3.83726071),
            EbrLocation::new("PUB", 99.4859986, 2.73429714),
        ]
    }

    #[test]
    fn test_feature_per_known_connection() {
        let connections = vec![
            EbrConnection::new("MDC", "PUB").with_bulge(Bulge::North),
            EbrConnection::new("MDC", "XXX"),
        ];
        let fc = connections_geojson(&connections, &locations(), &CurveOptions::default());
        assert_eq!(fc.features.len(), 1);

        let feature = &fc.features[0];
        assert_eq!(feature.property("from"), Some(&JsonValue::from("MDC")));
        assert_eq!(feature.property("to"), Some(&JsonValue::from("PUB")));

        let Some(Value::LineString(coords)) = feature.geometry.as_ref().map(|g| &g.value) else {
            panic!("LineString erwartet");
        };
        assert_eq!(coords.len(), 257);
        assert_eq!(coords[0], vec![98.3535818, 3.83726071]);
        assert_eq!(coords[256], vec![99.4859986, 2.73429714]);
    }

    #[test]
    fn test_connection_segments_override_defaults() {
        let connections = vec![EbrConnection::new("MDC", "PUB").with_segments(100)];
        let fc = connections_geojson(&connections, &locations(), &CurveOptions::default());
        let json = serde_json::to_value(&fc).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(
            json["features"][0]["geometry"]["coordinates"]
                .as_array()
                .map(|c| c.len()),
            Some(101)
        );
    }

    #[test]
    fn test_builtin_catalog_connection() {
        let fc = catalog_geojson(&ReferenceCatalog::builtin(), &CurveOptions::default());
        assert_eq!(fc.features.len(), 1);
    }
}
