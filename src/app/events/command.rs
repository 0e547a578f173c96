use crate::core::{FenceColor, GridVertex, PanelType, PostType};
use crate::shared::PlannerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Strich beginnen: Rasterpunkt anhängen und live schalten
    StartStroke { vertex: GridVertex },
    /// Live-Punkt auf neuen Rasterpunkt ziehen
    DragTo { vertex: GridVertex },
    /// Strich beenden und als History-Eintrag festschreiben
    EndStroke,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Zaunlinie und History leeren
    ClearAll,
    /// Feldtyp setzen
    SetPanelType { panel_type: PanelType },
    /// Feldfarbe setzen
    SetPanelColor { color: FenceColor },
    /// Pfostentyp setzen
    SetPostType { post_type: PostType },
    /// Pfostenfarbe setzen
    SetPostColor { color: FenceColor },
    /// Optionen anwenden und speichern
    ApplyOptions { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
