use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{FenceConfiguration, Polyline};
use crate::shared::PlannerOptions;
use std::path::PathBuf;

use super::MaterialSelection;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Zaunlinie (inkl. Live-Punkt während eines Drags)
    pub polyline: Polyline,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Gewählte Materialien
    pub materials: MaterialSelection,
    /// Laufzeit-Optionen (Raster, Undo-Tiefe, Feldanzahl-Regel)
    pub options: PlannerOptions,
    /// Speicherort der Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Zuletzt abgeleitete Konfiguration (nur über `projection::refresh` geschrieben)
    pub(crate) configuration: FenceConfiguration,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: PlannerOptions) -> Self {
        let mut state = Self {
            polyline: Polyline::new(),
            history: EditHistory::new_with_capacity(options.effective_history_depth()),
            materials: MaterialSelection::from_options(&options),
            options,
            options_path: None,
            command_log: CommandLog::new(),
            configuration: FenceConfiguration::default(),
        };
        crate::app::projection::refresh(&mut state);
        state
    }

    /// Read-only Sicht auf die abgeleitete Konfiguration.
    pub fn configuration(&self) -> &FenceConfiguration {
        &self.configuration
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Ob gerade ein Strich gezogen wird.
    pub fn is_drawing(&self) -> bool {
        self.polyline.is_live()
    }

    /// Nimmt die aktuelle Polylinie als History-Eintrag auf.
    pub fn commit_history_entry(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.commit(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
