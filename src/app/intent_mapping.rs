//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::snap_to_grid;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { screen_pos } => {
            match snap_to_grid(screen_pos, state.options.pixels_per_unit) {
                Some(vertex) => vec![AppCommand::StartStroke { vertex }],
                None => {
                    log::warn!("Ungültige Zeigerposition verworfen: {:?}", screen_pos);
                    vec![]
                }
            }
        }
        AppIntent::PointerMoved { screen_pos } => {
            if !state.is_drawing() {
                return vec![];
            }
            match snap_to_grid(screen_pos, state.options.pixels_per_unit) {
                Some(vertex) => vec![AppCommand::DragTo { vertex }],
                None => {
                    log::warn!("Ungültige Zeigerposition verworfen: {:?}", screen_pos);
                    vec![]
                }
            }
        }
        AppIntent::PointerReleased | AppIntent::PointerLeft => {
            if state.is_drawing() {
                vec![AppCommand::EndStroke]
            } else {
                vec![]
            }
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ClearLayoutRequested => vec![AppCommand::ClearAll],
        AppIntent::PanelTypeSelected { panel_type } => {
            vec![AppCommand::SetPanelType { panel_type }]
        }
        AppIntent::PanelColorSelected { color } => vec![AppCommand::SetPanelColor { color }],
        AppIntent::PostTypeSelected { post_type } => vec![AppCommand::SetPostType { post_type }],
        AppIntent::PostColorSelected { color } => vec![AppCommand::SetPostColor { color }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
