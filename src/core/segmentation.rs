//! Aufteilung der Zaunlinie in Felder und Pfosten.
//!
//! Reine Funktion über `(layout, Feld-Auswahl, Pfosten-Auswahl)`. Die 3D-Vorschau
//! nutzt `panel_count_for_length()` ebenfalls, damit gemeldete und gerenderte
//! Feldanzahl nie auseinanderlaufen.

use super::materials::{Panel, PanelSpec, Post, PostSpec};
use super::polyline::segments;
use super::{FenceConfiguration, GridVertex};
use serde::{Deserialize, Serialize};

/// Nennbreite eines Felds in Plan-Einheiten, Teiler für die Feldanzahl.
///
/// Unabhängig von `Panel::width_mm` des gewählten Typs.
pub const NOMINAL_PANEL_WIDTH: f64 = 1.5;

/// Regel für die Feldanzahl pro Segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelCountPolicy {
    /// `round(L / 1.5)`, kurze Segmente dürfen 0 Felder bekommen
    #[default]
    Rounded,
    /// Wie `Rounded`, aber mindestens 1 Feld pro Segment mit Länge > 0
    AtLeastOne,
}

/// Feldanzahl für ein Segment der Länge `length` (Meter).
///
/// Rundung: halb weg von null (`f64::round`), bei nicht-negativen Längen
/// identisch mit "half up".
pub fn panel_count_for_length(length: f64, policy: PanelCountPolicy) -> usize {
    let count = (length / NOMINAL_PANEL_WIDTH).round();
    // NaN und negative Werte sättigen bei `as` auf 0
    let count = count as usize;
    match policy {
        PanelCountPolicy::Rounded => count,
        PanelCountPolicy::AtLeastOne if length > 0.0 => count.max(1),
        PanelCountPolicy::AtLeastOne => count,
    }
}

/// Leitet die Materialkonfiguration aus der Zaunlinie ab (Standard-Rundung).
pub fn segment(
    layout: &[GridVertex],
    panel_spec: &PanelSpec,
    post_spec: &PostSpec,
) -> FenceConfiguration {
    segment_with_policy(layout, panel_spec, post_spec, PanelCountPolicy::default())
}

/// Leitet die Materialkonfiguration mit expliziter Feldanzahl-Regel ab.
///
/// Pro Segment: `n` identische Felder und ein Pfosten am Segmentanfang.
/// Nach dem letzten Segment folgt der Endpfosten. Weniger als zwei Punkte
/// ergeben leere Listen.
pub fn segment_with_policy(
    layout: &[GridVertex],
    panel_spec: &PanelSpec,
    post_spec: &PostSpec,
    policy: PanelCountPolicy,
) -> FenceConfiguration {
    let panel = Panel::from_spec(panel_spec);
    let post = Post::from_spec(post_spec);

    let mut panels = Vec::new();
    let mut posts = Vec::with_capacity(layout.len());

    for (start, end) in segments(layout) {
        let count = panel_count_for_length(start.distance(end), policy);
        panels.extend(std::iter::repeat(panel).take(count));
        posts.push(post);
    }

    if !posts.is_empty() {
        posts.push(post);
    }

    FenceConfiguration {
        panels,
        posts,
        layout: layout.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::materials::{FenceColor, PanelType, PostType};

    fn v(x: i32, y: i32) -> GridVertex {
        GridVertex::new(x, y)
    }

    #[test]
    fn straight_three_metre_run_gives_two_panels_two_posts() {
        let config = segment(
            &[v(0, 0), v(3, 0)],
            &PanelSpec::default(),
            &PostSpec::default(),
        );
        assert_eq!(config.panels.len(), 2);
        assert_eq!(config.posts.len(), 2);
    }

    #[test]
    fn corner_run_rounds_each_segment_separately() {
        let config = segment(
            &[v(0, 0), v(0, 2), v(2, 2)],
            &PanelSpec::default(),
            &PostSpec::default(),
        );
        // round(2 / 1.5) = 1 je Segment
        assert_eq!(config.panels.len(), 2);
        assert_eq!(config.posts.len(), 3);
    }

    #[test]
    fn fewer_than_two_vertices_yield_nothing() {
        let single = [v(4, 4)];
        let layouts: [&[GridVertex]; 2] = [&[], &single];
        for layout in layouts {
            let config = segment(layout, &PanelSpec::default(), &PostSpec::default());
            assert!(config.panels.is_empty());
            assert!(config.posts.is_empty());
            assert_eq!(config.layout, layout);
        }
    }

    #[test]
    fn short_segment_rounds_to_zero_panels() {
        assert_eq!(panel_count_for_length(0.7, PanelCountPolicy::Rounded), 0);
        assert_eq!(panel_count_for_length(1.0, PanelCountPolicy::Rounded), 1);
        // 0.75 / 1.5 = 0.5 → aufrunden
        assert_eq!(panel_count_for_length(0.75, PanelCountPolicy::Rounded), 1);
    }

    #[test]
    fn at_least_one_policy_only_affects_non_degenerate_segments() {
        assert_eq!(panel_count_for_length(0.5, PanelCountPolicy::AtLeastOne), 1);
        assert_eq!(panel_count_for_length(0.0, PanelCountPolicy::AtLeastOne), 0);
        assert_eq!(panel_count_for_length(6.0, PanelCountPolicy::AtLeastOne), 4);
    }

    #[test]
    fn zero_panel_segment_still_gets_posts() {
        // Erstes Segment hat Länge 0 → 0 Felder, zweites Länge 3 → 2 Felder
        let layout = [v(0, 0), v(0, 0), v(3, 0)];
        let config = segment(&layout, &PanelSpec::default(), &PostSpec::default());
        assert_eq!(config.panels.len(), 2);
        assert_eq!(config.posts.len(), 3);
    }

    #[test]
    fn materials_are_copied_into_every_item() {
        let panel_spec = PanelSpec {
            panel_type: PanelType::Polycarbonate,
            color: FenceColor::Custom,
        };
        let post_spec = PostSpec {
            post_type: PostType::StrongFix80x80,
            color: FenceColor::Ral9005,
        };
        let config = segment(&[v(0, 0), v(6, 0), v(6, 3)], &panel_spec, &post_spec);

        assert_eq!(config.panels.len(), 6);
        assert!(config
            .panels
            .iter()
            .all(|p| p.panel_type == PanelType::Polycarbonate && p.color == FenceColor::Custom));
        assert!(config
            .posts
            .iter()
            .all(|p| p.post_type == PostType::StrongFix80x80 && p.height_mm == 2400));
    }

    #[test]
    fn segmentation_is_pure() {
        let layout = [v(0, 0), v(5, 1), v(5, 7), v(-2, 7)];
        let a = segment(&layout, &PanelSpec::default(), &PostSpec::default());
        let b = segment(&layout, &PanelSpec::default(), &PostSpec::default());
        assert_eq!(a, b);
    }
}
