//! Handler für das Zeichnen der Zaunlinie (Strich-Lifecycle).

use crate::app::AppState;
use crate::core::GridVertex;

/// Beginnt einen neuen Strich am Rasterpunkt.
///
/// Ein noch offener Strich wird vorher regulär abgeschlossen, damit jeder
/// Strich genau einen History-Eintrag erzeugt.
pub fn start_stroke(state: &mut AppState, vertex: GridVertex) {
    if state.polyline.is_live() {
        end_stroke(state);
    }
    state.polyline.begin_segment(vertex);
    log::debug!("Strich begonnen bei ({}, {})", vertex.x, vertex.y);
}

/// Verschiebt den Live-Punkt. Ohne laufenden Strich: No-op.
pub fn drag_to(state: &mut AppState, vertex: GridVertex) {
    if !state.polyline.is_live() {
        log::debug!("DragTo: kein laufender Strich");
        return;
    }
    state.polyline.update_live_vertex(vertex);
}

/// Beendet den laufenden Strich und schreibt genau einen History-Eintrag.
pub fn end_stroke(state: &mut AppState) {
    if !state.polyline.commit() {
        log::debug!("EndStroke: kein laufender Strich");
        return;
    }

    let unchanged = state
        .history
        .current()
        .is_some_and(|snap| snap.layout.as_slice() == state.polyline.vertices());
    if unchanged {
        log::debug!("Strich ohne Netto-Änderung, kein History-Eintrag");
        return;
    }

    state.commit_history_entry();
    log::info!(
        "Strich festgeschrieben: {} Punkte, {} Segmente",
        state.polyline.len(),
        state.polyline.segment_count()
    );
}

/// Leert Zaunlinie und History.
pub fn clear_all(state: &mut AppState) {
    state.polyline.clear();
    state.history.reset();
    log::info!("Zaunlinie geleert");
}
