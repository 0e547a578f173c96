//! Vertex-Sequenz der Zaun-Skizze mit "live" Endpunkt während eines Drags.

use super::GridVertex;

/// Geordnete Punktfolge der Zaunlinie (Zeichenreihenfolge = Laufrichtung).
///
/// Während eines Strichs ist der zuletzt angehängte Punkt "live" und darf
/// verschoben werden. `commit()` fixiert ihn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    vertices: Vec<GridVertex>,
    live: bool,
}

impl Polyline {
    /// Erstellt eine leere Polylinie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine fixierte Polylinie aus vorhandenen Punkten.
    pub fn from_vertices(vertices: Vec<GridVertex>) -> Self {
        Self {
            vertices,
            live: false,
        }
    }

    /// Hängt einen neuen Punkt an und markiert ihn als live.
    ///
    /// Ein noch offener Strich wird vorher fixiert.
    pub fn begin_segment(&mut self, vertex: GridVertex) {
        if self.live {
            self.commit();
        }
        self.vertices.push(vertex);
        self.live = true;
    }

    /// Ersetzt die Position des Live-Punkts. Ohne Live-Punkt: No-op.
    pub fn update_live_vertex(&mut self, vertex: GridVertex) {
        if !self.live {
            return;
        }
        if let Some(last) = self.vertices.last_mut() {
            *last = vertex;
        }
    }

    /// Fixiert den Live-Punkt.
    ///
    /// Liegt er exakt auf seinem Vorgänger (Netto-Verschiebung null), wird er
    /// verworfen. Gibt `true` zurück, wenn tatsächlich ein Strich beendet wurde.
    pub fn commit(&mut self) -> bool {
        if !self.live {
            return false;
        }
        self.live = false;

        let len = self.vertices.len();
        if len >= 2 && self.vertices[len - 1] == self.vertices[len - 2] {
            self.vertices.pop();
        }
        true
    }

    /// Leert die Polylinie vollständig.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.live = false;
    }

    /// Ob gerade ein Punkt gezogen wird.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Alle Punkte in Zeichenreihenfolge.
    pub fn vertices(&self) -> &[GridVertex] {
        &self.vertices
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Anzahl der Segmente (0 bei weniger als zwei Punkten).
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Ersetzt den gesamten Inhalt (Undo/Redo-Restore). Beendet einen offenen Strich.
    pub fn restore(&mut self, vertices: &[GridVertex]) {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.live = false;
    }
}

/// Segmente `(start, ende)` einer Punktfolge in Laufrichtung.
pub fn segments(layout: &[GridVertex]) -> impl Iterator<Item = (GridVertex, GridVertex)> + '_ {
    layout.windows(2).map(|pair| (pair[0], pair[1]))
}

/// Länge jedes Segments in Metern.
pub fn segment_lengths(layout: &[GridVertex]) -> Vec<f64> {
    segments(layout).map(|(a, b)| a.distance(b)).collect()
}

/// Gesamtlänge der Zaunlinie in Metern (Summe der Segmentlängen).
pub fn total_length(layout: &[GridVertex]) -> f64 {
    segments(layout).map(|(a, b)| a.distance(b)).sum()
}
