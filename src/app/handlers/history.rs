//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Ein laufender Strich wird dabei verworfen.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.undo().cloned() {
        prev.apply_to(state);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if let Some(next) = state.history.redo().cloned() {
        next.apply_to(state);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
