//! Abgeleitete Zaun-Konfiguration aus dem AppState.
//!
//! Wird nach jedem Command synchron neu berechnet. Konsumenten (Vorschau,
//! Bestellübersicht) lesen nur über `AppState::configuration()`.

use crate::app::AppState;
use crate::core::{build_placement, segment_with_policy, OrderSummary, PreviewPlacement};

/// Berechnet die Konfiguration aus Polylinie und Materialauswahl neu.
pub fn refresh(state: &mut AppState) {
    state.configuration = segment_with_policy(
        state.polyline.vertices(),
        &state.materials.panel,
        &state.materials.post,
        state.options.panel_count_policy,
    );
}

/// Baut die Bestellübersicht aus der aktuellen Konfiguration.
pub fn order_summary(state: &AppState) -> OrderSummary {
    OrderSummary::from_configuration(state.configuration())
}

/// Baut die 3D-Platzierung mit derselben Feldanzahl-Regel wie die Segmentierung.
pub fn preview_placement(state: &AppState) -> PreviewPlacement {
    build_placement(state.configuration(), state.options.panel_count_policy)
}
