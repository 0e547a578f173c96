//! Abgeleitete Zaun-Konfiguration als Lesevertrag für Vorschau und Bestellung.

use super::materials::{Panel, Post};
use super::polyline;
use super::GridVertex;
use serde::{Deserialize, Serialize};

/// Ergebnis der Segmentierung: Materiallisten plus die zugrunde liegende Linie.
///
/// Wird nie direkt verändert, sondern bei jeder Eingabeänderung neu berechnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FenceConfiguration {
    /// Zaunfelder in Laufrichtung (ohne Position)
    pub panels: Vec<Panel>,
    /// Pfosten in Laufrichtung (ohne Position)
    pub posts: Vec<Post>,
    /// Punktfolge, aus der die Listen abgeleitet wurden
    pub layout: Vec<GridVertex>,
}

impl FenceConfiguration {
    /// Anzahl der Felder.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Anzahl der Pfosten.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Anzahl der Segmente der Linie.
    pub fn segment_count(&self) -> usize {
        self.layout.len().saturating_sub(1)
    }

    /// Material des ersten Felds (Repräsentant für Vorschau/Bestellung).
    pub fn first_panel(&self) -> Option<&Panel> {
        self.panels.first()
    }

    /// Material des ersten Pfostens.
    pub fn first_post(&self) -> Option<&Post> {
        self.posts.first()
    }

    /// Gesamtlänge in Metern.
    pub fn total_length(&self) -> f64 {
        polyline::total_length(&self.layout)
    }

    /// Gibt `true` zurück, wenn weder Felder noch Pfosten vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty() && self.posts.is_empty()
    }
}
