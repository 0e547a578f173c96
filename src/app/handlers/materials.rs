//! Handler für die Materialauswahl.

use crate::app::AppState;
use crate::core::{FenceColor, PanelType, PostType};

/// Setzt den Feldtyp.
pub fn set_panel_type(state: &mut AppState, panel_type: PanelType) {
    state.materials.set_panel_type(panel_type);
    log::info!("Feldtyp: {}", panel_type);
}

/// Setzt die Feldfarbe.
pub fn set_panel_color(state: &mut AppState, color: FenceColor) {
    state.materials.set_panel_color(color);
    log::info!("Feldfarbe: {}", color);
}

/// Setzt den Pfostentyp.
pub fn set_post_type(state: &mut AppState, post_type: PostType) {
    state.materials.set_post_type(post_type);
    log::info!("Pfostentyp: {}", post_type);
}

/// Setzt die Pfostenfarbe.
pub fn set_post_color(state: &mut AppState, color: FenceColor) {
    state.materials.set_post_color(color);
    log::info!("Pfostenfarbe: {}", color);
}
