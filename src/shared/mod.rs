//! Geteilte, layer-neutrale Bausteine: Laufzeit-Optionen und Kurvengeometrie.

pub mod curve_geometry;
pub mod options;

pub use curve_geometry::{curve_between_points, Bulge, CurveOptions};
pub use options::{DashboardOptions, ViewState};
