//! Reine Geometrie-Funktionen für Verbindungskurven zwischen zwei Stationen.
//!
//! Lon/Lat werden als planare Koordinaten behandelt (keine geodätische Korrektur).
//! Layer-neutral: wird von `map` und den Benchmarks importiert.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Minimale Segmentanzahl einer Kurve.
pub const MIN_CURVE_SEGMENTS: usize = 64;
/// Standard-Segmentanzahl einer Kurve.
pub const DEFAULT_CURVE_SEGMENTS: usize = 256;
/// Standard-Bogenfaktor (Kontrollpunkt-Abstand relativ zur Sehnenlänge).
pub const DEFAULT_BOW_FACTOR: f64 = 1.2;

/// Richtung, in die sich eine Kurve von der Sehne weg wölbt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bulge {
    /// Kontrollpunkt mit größerem Breitengrad
    #[default]
    North,
    /// Kontrollpunkt mit kleinerem Breitengrad
    South,
    /// Immer der Kandidat auf der +Normalen-Seite
    Auto,
}

/// Parameter der Kurvengenerierung
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveOptions {
    /// Angeforderte Auflösung (wird auf `MIN_CURVE_SEGMENTS` geklemmt)
    pub segments: usize,
    /// Bogenfaktor (negativ/NaN/unendlich wird als 0 behandelt)
    pub bow_factor: f64,
    /// Wölbungsrichtung
    pub bulge: Bulge,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_CURVE_SEGMENTS,
            bow_factor: DEFAULT_BOW_FACTOR,
            bulge: Bulge::North,
        }
    }
}

impl CurveOptions {
    /// Effektive Segmentanzahl nach Klemmung.
    pub fn clamped_segments(&self) -> usize {
        self.segments.max(MIN_CURVE_SEGMENTS)
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Wählt den Kontrollpunkt der Kurve.
///
/// Beide Kandidaten liegen auf der Mittelsenkrechten im Abstand
/// `distance * bow_factor` vom Sehnenmittelpunkt. Gibt `None` zurück, wenn
/// die Endpunkte identisch sind oder der Abstand nicht endlich ist.
pub fn control_point(from: DVec2, to: DVec2, bow_factor: f64, bulge: Bulge) -> Option<DVec2> {
    let delta = to - from;
    let distance = delta.x.hypot(delta.y);
    if !distance.is_finite() || distance == 0.0 {
        return None;
    }

    let midpoint = (from + to) / 2.0;
    let perp = DVec2::new(-delta.y / distance, delta.x / distance);
    // negativ, NaN, unendlich oder Überlauf → gerade Linie
    let bow = distance * bow_factor.max(0.0);
    let bow = if bow.is_finite() { bow } else { 0.0 };

    let candidate_a = midpoint + perp * bow;
    let candidate_b = midpoint - perp * bow;

    let control = match bulge {
        Bulge::Auto => candidate_a,
        Bulge::North => {
            if candidate_a.y >= candidate_b.y {
                candidate_a
            } else {
                candidate_b
            }
        }
        Bulge::South => {
            if candidate_a.y <= candidate_b.y {
                candidate_a
            } else {
                candidate_b
            }
        }
    };
    Some(control)
}

/// Berechnet eine gewölbte Verbindungskurve zwischen zwei Punkten.
///
/// Liefert `clamped_segments() + 1` Punkte, beginnend exakt bei `from` und
/// endend exakt bei `to`. Bei identischen Endpunkten (oder nicht-endlichem
/// Abstand) wird `[from, to]` zurückgegeben.
pub fn curve_between_points(from: DVec2, to: DVec2, options: &CurveOptions) -> Vec<DVec2> {
    let Some(control) = control_point(from, to, options.bow_factor, options.bulge) else {
        return vec![from, to];
    };

    let segments = options.clamped_segments();
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        points.push(quadratic_bezier(from, control, to, t));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MDC: DVec2 = DVec2::new(98.35, 3.84);
    const PUB: DVec2 = DVec2::new(99.49, 2.73);

    #[test]
    fn test_quadratic_bezier_endpoints_exact() {
        let p0 = DVec2::new(1.25, -3.5);
        let p1 = DVec2::new(7.0, 9.0);
        let p2 = DVec2::new(-4.0, 2.75);

        assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);
    }

    #[test]
    fn test_quadratic_bezier_midpoint() {
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(5.0, 10.0);
        let p2 = DVec2::new(10.0, 0.0);

        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 5.0);
    }

    #[test]
    fn test_control_point_degenerate() {
        assert_eq!(control_point(MDC, MDC, 1.2, Bulge::North), None);
        let inf = DVec2::new(f64::INFINITY, 0.0);
        assert_eq!(control_point(MDC, inf, 1.2, Bulge::North), None);
    }

    #[test]
    fn test_north_and_south_pick_opposite_candidates() {
        let north = control_point(MDC, PUB, 1.2, Bulge::North).unwrap();
        let south = control_point(MDC, PUB, 1.2, Bulge::South).unwrap();
        let midpoint = (MDC + PUB) / 2.0;

        assert!(north.y > midpoint.y);
        assert!(south.y < midpoint.y);
        // Beide Kandidaten spiegeln sich am Sehnenmittelpunkt
        assert_relative_eq!((north + south).x / 2.0, midpoint.x, epsilon = 1e-9);
        assert_relative_eq!((north + south).y / 2.0, midpoint.y, epsilon = 1e-9);
    }

    #[test]
    fn test_auto_uses_positive_normal() {
        // Sehne entlang +x → +Normale zeigt nach +y
        let from = DVec2::new(0.0, 0.0);
        let to = DVec2::new(10.0, 0.0);
        let auto = control_point(from, to, 1.0, Bulge::Auto).unwrap();
        assert_relative_eq!(auto.x, 5.0);
        assert_relative_eq!(auto.y, 10.0);

        // Umgekehrte Sehne → +Normale zeigt nach -y, Auto folgt ihr
        let auto_rev = control_point(to, from, 1.0, Bulge::Auto).unwrap();
        assert_relative_eq!(auto_rev.y, -10.0);
        let north_rev = control_point(to, from, 1.0, Bulge::North).unwrap();
        assert_relative_eq!(north_rev.y, 10.0);
    }

    #[test]
    fn test_negative_bow_factor_collapses_to_midpoint() {
        let from = DVec2::new(0.0, 0.0);
        let to = DVec2::new(4.0, 0.0);
        let cp = control_point(from, to, -3.0, Bulge::North).unwrap();
        assert_eq!(cp, DVec2::new(2.0, 0.0));
        let cp_nan = control_point(from, to, f64::NAN, Bulge::South).unwrap();
        assert_eq!(cp_nan, DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_infinite_bow_factor_keeps_endpoints() {
        let cp = control_point(MDC, PUB, f64::INFINITY, Bulge::North).unwrap();
        assert_eq!(cp, (MDC + PUB) / 2.0);

        let opts = CurveOptions {
            segments: 64,
            bow_factor: f64::INFINITY,
            bulge: Bulge::North,
        };
        let points = curve_between_points(MDC, PUB, &opts);
        assert_eq!(points.len(), 65);
        assert_eq!(points[0], MDC);
        assert_eq!(points[64], PUB);
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_overflowing_bow_collapses_to_midpoint() {
        let from = DVec2::new(0.0, 0.0);
        let to = DVec2::new(4.0, 0.0);
        let cp = control_point(from, to, f64::MAX, Bulge::South).unwrap();
        assert_eq!(cp, DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_segments_clamped_to_minimum() {
        let opts = CurveOptions {
            segments: 3,
            ..CurveOptions::default()
        };
        let points = curve_between_points(MDC, PUB, &opts);
        assert_eq!(points.len(), MIN_CURVE_SEGMENTS + 1);
        assert_eq!(points[0], MDC);
        assert_eq!(*points.last().unwrap(), PUB);
    }

    #[test]
    fn test_degenerate_curve_returns_endpoints() {
        let points = curve_between_points(MDC, MDC, &CurveOptions::default());
        assert_eq!(points, vec![MDC, MDC]);
    }
}
