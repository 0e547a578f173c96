//! Bestellübersicht (Materialliste + Zaundaten) aus der Konfiguration.

use super::polyline;
use super::FenceConfiguration;
use std::fmt;

/// Platzhalter für fehlende Werte in der Materialliste.
const EMPTY_CELL: &str = "-";

/// Eine Zeile der Materialliste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRow {
    /// Artikel ("Panel" / "Post")
    pub item: &'static str,
    /// Typbezeichnung oder `-`
    pub type_label: String,
    /// Stückzahl
    pub quantity: usize,
    /// Farbe oder `-`
    pub color_label: String,
}

/// Bestellübersicht für die Bestellansicht
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// Feld- und Pfostenzeile
    pub rows: [MaterialRow; 2],
    /// Gesamtlänge in Metern
    pub total_length: f64,
    /// Anzahl der Segmente
    pub segment_count: usize,
    /// Segmentlängen in Metern (Beschriftung der Zeichenfläche)
    pub segment_lengths: Vec<f64>,
}

impl OrderSummary {
    /// Baut die Übersicht aus einer abgeleiteten Konfiguration.
    pub fn from_configuration(config: &FenceConfiguration) -> Self {
        let panel_row = MaterialRow {
            item: "Panel",
            type_label: config
                .first_panel()
                .map_or_else(|| EMPTY_CELL.to_owned(), |p| p.panel_type.to_string()),
            quantity: config.panel_count(),
            color_label: config
                .first_panel()
                .map_or_else(|| EMPTY_CELL.to_owned(), |p| p.color.to_string()),
        };
        let post_row = MaterialRow {
            item: "Post",
            type_label: config
                .first_post()
                .map_or_else(|| EMPTY_CELL.to_owned(), |p| p.post_type.to_string()),
            quantity: config.post_count(),
            color_label: config
                .first_post()
                .map_or_else(|| EMPTY_CELL.to_owned(), |p| p.color.to_string()),
        };

        Self {
            rows: [panel_row, post_row],
            total_length: config.total_length(),
            segment_count: config.segment_count(),
            segment_lengths: polyline::segment_lengths(&config.layout),
        }
    }

    /// Segment-Beschriftungen im Format `"2.00m"`.
    pub fn segment_labels(&self) -> Vec<String> {
        self.segment_lengths
            .iter()
            .map(|len| format!("{len:.2}m"))
            .collect()
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:<20}{:>8}  Color", "Item", "Type", "Qty")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8}{:<20}{:>8}  {}",
                row.item, row.type_label, row.quantity, row.color_label
            )?;
        }
        writeln!(f, "Total Length: {:.2} meters", self.total_length)?;
        write!(f, "Number of Segments: {}", self.segment_count)
    }
}
