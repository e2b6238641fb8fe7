//! Lebenszyklus der Übersichtskarte: Layer, Marker und Kamera.
//!
//! Die eigentliche Kartenbibliothek steckt hinter `MapBackend`. Eine
//! `MapSession` besitzt ihr Backend; beim `unmount` oder Drop werden alle
//! hinzugefügten Marker und der Verbindungs-Layer wieder entfernt.

use super::connection_layer::{catalog_geojson, CONNECTIONS_LAYER_ID, CONNECTIONS_SOURCE_ID};
use crate::core::{EbrLocation, ReferenceCatalog, Territory};
use crate::shared::{DashboardOptions, ViewState};
use geojson::FeatureCollection;

/// Schnittstelle zur Kartenbibliothek
pub trait MapBackend {
    /// Fügt eine GeoJSON-Source samt Linien-Layer hinzu.
    fn add_line_layer(&mut self, source_id: &str, layer_id: &str, data: &FeatureCollection);

    /// Entfernt Layer und zugehörige Source.
    fn remove_layer(&mut self, layer_id: &str, source_id: &str);

    /// Setzt einen Stations-Marker (Position, Label, Pixel-Versatz).
    fn add_marker(&mut self, location: &EbrLocation);

    fn remove_marker(&mut self, pe_code: &str);

    /// Animierter Kameraflug
    fn fly_to(&mut self, view: &ViewState, duration_ms: u32);

    /// Kamerasprung ohne Animation
    fn jump_to(&mut self, view: &ViewState);
}

/// Eine gemountete Karte mit Verbindungs-Layer und Stations-Markern
pub struct MapSession<B: MapBackend> {
    /// `None` nach dem Abbau
    backend: Option<B>,
    territories: Vec<Territory>,
    markers: Vec<String>,
    default_view: ViewState,
    fly_to_duration_ms: u32,
    view: ViewState,
    selected_territory: Option<u32>,
}

impl<B: MapBackend> MapSession<B> {
    /// Richtet die Karte ein: Verbindungs-Layer, ein Marker pro Station,
    /// Kamera auf die Standard-Ansicht.
    pub fn mount(mut backend: B, catalog: &ReferenceCatalog, options: &DashboardOptions) -> Self {
        let connections = catalog_geojson(catalog, &options.curve);
        backend.add_line_layer(CONNECTIONS_SOURCE_ID, CONNECTIONS_LAYER_ID, &connections);

        let mut markers = Vec::with_capacity(catalog.location_count());
        for location in catalog.locations() {
            backend.add_marker(location);
            markers.push(location.pe_code.clone());
        }

        let default_view = options.default_view;
        backend.jump_to(&default_view);

        log::info!(
            "Karte eingerichtet: {} Verbindungen, {} Marker",
            connections.features.len(),
            markers.len()
        );

        Self {
            backend: Some(backend),
            territories: catalog.territories().to_vec(),
            markers,
            default_view,
            fly_to_duration_ms: options.fly_to_duration_ms,
            view: default_view,
            selected_territory: None,
        }
    }

    /// Fliegt zum Mittelpunkt eines Territoriums.
    ///
    /// Gibt `false` zurück, wenn die ID im Katalog unbekannt ist; Kamera und
    /// Auswahl bleiben dann unverändert.
    pub fn select_territory(&mut self, id: u32) -> bool {
        let Some(territory) = self.territories.iter().find(|t| t.id == id) else {
            log::warn!("Territorium {} unbekannt", id);
            return false;
        };
        let view = ViewState {
            longitude: territory.center.lng,
            latitude: territory.center.lat,
            zoom: territory.zoom,
            ..self.view
        };
        self.fly(view);
        self.selected_territory = Some(id);
        true
    }

    /// Fliegt zurück zur Standard-Ansicht und hebt die Auswahl auf.
    pub fn reset_view(&mut self) {
        self.fly(self.default_view);
        self.selected_territory = None;
    }

    /// Übernimmt eine extern vorgegebene Kamera ohne Animation.
    pub fn sync_view(&mut self, view: ViewState) {
        if let Some(backend) = self.backend.as_mut() {
            backend.jump_to(&view);
        }
        self.view = view;
    }

    fn fly(&mut self, view: ViewState) {
        if let Some(backend) = self.backend.as_mut() {
            backend.fly_to(&view, self.fly_to_duration_ms);
        }
        self.view = view;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selected_territory(&self) -> Option<u32> {
        self.selected_territory
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Entfernt Marker und Layer und gibt das Backend zurück.
    ///
    /// Der anschließende Drop findet kein Backend mehr vor und räumt nicht
    /// ein zweites Mal ab.
    pub fn unmount(mut self) -> Option<B> {
        self.teardown()
    }

    fn teardown(&mut self) -> Option<B> {
        let mut backend = self.backend.take()?;
        for pe_code in self.markers.drain(..) {
            backend.remove_marker(&pe_code);
        }
        backend.remove_layer(CONNECTIONS_LAYER_ID, CONNECTIONS_SOURCE_ID);
        log::debug!("Karte abgebaut");
        Some(backend)
    }
}

impl<B: MapBackend> Drop for MapSession<B> {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}
