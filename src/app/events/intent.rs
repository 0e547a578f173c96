use crate::core::{FenceColor, PanelType, PostType};
use crate::shared::PlannerOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maustaste auf der Zeichenfläche gedrückt (Pixel-Koordinaten)
    PointerPressed { screen_pos: glam::Vec2 },
    /// Maus bei gedrückter Taste bewegt (Pixel-Koordinaten)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased,
    /// Maus hat die Zeichenfläche verlassen (beendet einen laufenden Strich)
    PointerLeft,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Zaunlinie und History vollständig leeren
    ClearLayoutRequested,
    /// Feldtyp in der Auswahl geändert
    PanelTypeSelected { panel_type: PanelType },
    /// Feldfarbe in der Auswahl geändert
    PanelColorSelected { color: FenceColor },
    /// Pfostentyp in der Auswahl geändert
    PostTypeSelected { post_type: PostType },
    /// Pfostenfarbe in der Auswahl geändert
    PostColorSelected { color: FenceColor },
    /// Optionen übernehmen
    OptionsChanged { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
