//! Gruppierung der Uplink- und Downlink-Routen nach EBR-Name.

use crate::payload::{DownlinkEntry, InformationEntry, UplinkEntry};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Uplink und Downlink eines EBR nebeneinander
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupedRouteEntry {
    pub uplink: Option<UplinkEntry>,
    pub downlink: Option<DownlinkEntry>,
    /// Zusammenfassung aus dem Uplink, falls vorhanden
    pub information: Option<InformationEntry>,
}

impl GroupedRouteEntry {
    pub fn is_complete(&self) -> bool {
        self.uplink.is_some() && self.downlink.is_some()
    }
}

/// Gruppiert Routen nach EBR-Name.
///
/// Reihenfolge: erstes Auftreten, Uplinks vor Downlinks. Doppelte Namen in
/// derselben Liste werden ignoriert (erster Eintrag gewinnt).
pub fn group_routes(
    uplinks: &[UplinkEntry],
    downlinks: &[DownlinkEntry],
) -> IndexMap<String, GroupedRouteEntry> {
    let mut groups: IndexMap<String, GroupedRouteEntry> = IndexMap::new();

    for up in uplinks {
        match groups.entry(up.ebr.clone()) {
            Entry::Occupied(_) => {
                log::warn!("Uplink fuer EBR '{}' mehrfach vorhanden, ignoriert", up.ebr);
            }
            Entry::Vacant(slot) => {
                slot.insert(GroupedRouteEntry {
                    uplink: Some(up.clone()),
                    downlink: None,
                    information: up.information.clone(),
                });
            }
        }
    }

    for down in downlinks {
        let group = groups.entry(down.ebr.clone()).or_default();
        if group.downlink.is_some() {
            log::warn!("Downlink fuer EBR '{}' mehrfach vorhanden, ignoriert", down.ebr);
            continue;
        }
        group.downlink = Some(down.clone());
    }

    groups
}
