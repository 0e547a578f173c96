//! 3D-Platzierung für die Vorschau.
//!
//! Die Vorschau berechnet die Lage jedes Felds selbst aus der Linie, nutzt aber
//! dieselbe Feldanzahl-Funktion wie die Segmentierung.

use super::materials::FenceColor;
use super::polyline::segments;
use super::segmentation::{panel_count_for_length, PanelCountPolicy};
use super::FenceConfiguration;
use glam::Vec3;

/// Pfosten-Quader (Breite, Höhe, Tiefe) in Metern.
pub const POST_BOX_SIZE: Vec3 = Vec3::new(0.06, 2.4, 0.04);
/// Feldhöhe in Metern.
pub const PANEL_BOX_HEIGHT: f32 = 2.2;
/// Felddicke in Metern.
pub const PANEL_BOX_DEPTH: f32 = 0.02;
/// Darstellungsfarbe der Pfosten (RGB).
pub const POST_DISPLAY_COLOR: u32 = 0x4a4a4a;

/// Platziertes Zaunfeld
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    /// Mittelpunkt des Feld-Quaders
    pub center: Vec3,
    /// Länge entlang des Segments
    pub length: f32,
    /// Drehung um die Y-Achse (Radiant)
    pub yaw: f32,
}

/// Platzierter Pfosten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostPlacement {
    /// Mittelpunkt des Pfosten-Quaders
    pub center: Vec3,
}

/// Szene der Vorschau: Geometrie plus Darstellungsfarben
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewPlacement {
    /// Zaunfelder
    pub panels: Vec<PanelPlacement>,
    /// Pfosten
    pub posts: Vec<PostPlacement>,
    /// Feldfarbe (RGB)
    pub panel_color: u32,
    /// Pfostenfarbe (RGB)
    pub post_color: u32,
}

/// Darstellungsfarbe eines Felds: Staubgrau für 7037, sonst Schwarz.
pub fn panel_display_color(color: Option<FenceColor>) -> u32 {
    match color {
        Some(FenceColor::Ral7037) => 0x7f7f7f,
        _ => 0x000000,
    }
}

/// Berechnet die 3D-Platzierung aus der Konfiguration.
///
/// Plan `(x, y)` wird auf `(x, 0, y)` abgebildet. Pfosten sitzen auf jedem
/// Segmentanfang und am Ende der Linie, Felder teilen jedes Segment gleichmäßig.
pub fn build_placement(config: &FenceConfiguration, policy: PanelCountPolicy) -> PreviewPlacement {
    let mut placement = PreviewPlacement {
        panel_color: panel_display_color(config.first_panel().map(|p| p.color)),
        post_color: POST_DISPLAY_COLOR,
        ..Default::default()
    };

    let post_y = POST_BOX_SIZE.y * 0.5;
    let panel_y = PANEL_BOX_HEIGHT * 0.5;

    for (start, end) in segments(&config.layout) {
        let start3 = start.to_ground();
        let end3 = end.to_ground();
        let direction = end3 - start3;
        let count = panel_count_for_length(start.distance(end), policy);

        placement.posts.push(PostPlacement {
            center: Vec3::new(start3.x, post_y, start3.z),
        });

        let yaw = direction.z.atan2(direction.x);
        for j in 0..count {
            let panel_start = start3 + direction * (j as f32 / count as f32);
            let panel_end = start3 + direction * ((j + 1) as f32 / count as f32);
            let mid = (panel_start + panel_end) * 0.5;
            placement.panels.push(PanelPlacement {
                center: Vec3::new(mid.x, panel_y, mid.z),
                length: panel_start.distance(panel_end),
                yaw,
            });
        }
    }

    if let Some(last) = config.layout.last().filter(|_| config.layout.len() >= 2) {
        let ground = last.to_ground();
        placement.posts.push(PostPlacement {
            center: Vec3::new(ground.x, post_y, ground.z),
        });
    }

    placement
}
