//! Application State: zentrale Datenhaltung.

mod app_state;
mod materials;

pub use app_state::AppState;
pub use materials::MaterialSelection;
