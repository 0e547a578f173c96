//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::PlannerOptions;

/// Übernimmt neue Optionen und persistiert sie, falls ein Speicherpfad gesetzt ist.
pub fn apply_options(state: &mut AppState, options: PlannerOptions) -> anyhow::Result<()> {
    let options = options.validated();
    state.history.set_max_depth(options.effective_history_depth());
    state.options = options;
    persist(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, PlannerOptions::default())
}

fn persist(state: &AppState) -> anyhow::Result<()> {
    match state.options_path.as_deref() {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
