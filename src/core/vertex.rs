//! Rasterpunkt der Zaun-Skizze und Umrechnung Bildschirm → Plan-Einheiten.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Ein auf das Raster eingerasteter Punkt in Plan-Einheiten (1 Einheit = 1 Meter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridVertex {
    /// X-Koordinate in Metern
    pub x: i32,
    /// Y-Koordinate in Metern
    pub y: i32,
}

impl GridVertex {
    /// Erstellt einen Rasterpunkt.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euklidischer Abstand zu einem anderen Rasterpunkt in Metern.
    pub fn distance(self, other: GridVertex) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Bodenposition in der 3D-Vorschau: Plan `(x, y)` → `(x, 0, y)`.
    pub fn to_ground(self) -> Vec3 {
        Vec3::new(self.x as f32, 0.0, self.y as f32)
    }
}

/// Rastet eine Bildschirm-Position (Pixel) auf den nächsten Rasterpunkt ein.
///
/// `round(px / pixels_per_unit)` pro Achse. Nicht-endliche Eingaben (NaN, ±∞)
/// sowie ein ungültiger Skalierungsfaktor liefern `None`, damit kein NaN in
/// die Skizze gelangt.
pub fn snap_to_grid(screen_pos: Vec2, pixels_per_unit: f32) -> Option<GridVertex> {
    if !screen_pos.is_finite() || !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
        return None;
    }
    let grid = (screen_pos / pixels_per_unit).round();
    if !grid.is_finite() {
        return None;
    }
    // `as` sättigt bei Überlauf auf i32::MIN/MAX
    Some(GridVertex::new(grid.x as i32, grid.y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn snap_rounds_to_nearest_grid_unit() {
        assert_eq!(
            snap_to_grid(Vec2::new(31.0, 9.0), 20.0),
            Some(GridVertex::new(2, 0))
        );
        assert_eq!(
            snap_to_grid(Vec2::new(29.0, 11.0), 20.0),
            Some(GridVertex::new(1, 1))
        );
    }

    #[test]
    fn snap_rejects_non_finite_input() {
        assert_eq!(snap_to_grid(Vec2::new(f32::NAN, 0.0), 20.0), None);
        assert_eq!(snap_to_grid(Vec2::new(0.0, f32::INFINITY), 20.0), None);
        assert_eq!(snap_to_grid(Vec2::new(10.0, 10.0), 0.0), None);
    }

    #[test]
    fn ground_position_maps_plan_y_to_depth() {
        let ground = GridVertex::new(3, -2).to_ground();
        assert_eq!(ground, Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = GridVertex::new(0, 0);
        let b = GridVertex::new(3, 4);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(b.distance(a), 5.0);
    }
}
