//! Application Controller für zentrale Event-Verarbeitung.

use super::{projection, AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/` und leitet danach die
    /// Konfiguration neu ab.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        let result = match command {
            // === Zeichnen ===
            AppCommand::StartStroke { vertex } => {
                handlers::drawing::start_stroke(state, vertex);
                Ok(())
            }
            AppCommand::DragTo { vertex } => {
                handlers::drawing::drag_to(state, vertex);
                Ok(())
            }
            AppCommand::EndStroke => {
                handlers::drawing::end_stroke(state);
                Ok(())
            }
            AppCommand::ClearAll => {
                handlers::drawing::clear_all(state);
                Ok(())
            }

            // === History ===
            AppCommand::Undo => {
                handlers::history::undo(state);
                Ok(())
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
                Ok(())
            }

            // === Material ===
            AppCommand::SetPanelType { panel_type } => {
                handlers::materials::set_panel_type(state, panel_type);
                Ok(())
            }
            AppCommand::SetPanelColor { color } => {
                handlers::materials::set_panel_color(state, color);
                Ok(())
            }
            AppCommand::SetPostType { post_type } => {
                handlers::materials::set_post_type(state, post_type);
                Ok(())
            }
            AppCommand::SetPostColor { color } => {
                handlers::materials::set_post_color(state, color);
                Ok(())
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply_options(state, options),
            AppCommand::ResetOptions => handlers::options::reset_options(state),
        };

        // Auch bei Persistenz-Fehlern ist der State bereits geändert
        projection::refresh(state);
        result
    }
}
