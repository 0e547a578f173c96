use crate::core::GridVertex;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile: die Punktfolge.
///
/// Eigenständige Kopie, spätere Änderungen an der Live-Polylinie verändern
/// einen gespeicherten Eintrag nicht.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Punktfolge zum Zeitpunkt des Commits
    pub layout: Vec<GridVertex>,
}

impl Snapshot {
    /// Erstellt einen Snapshot der aktuellen Polylinie.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            layout: state.polyline.vertices().to_vec(),
        }
    }

    /// Stellt den Snapshot in der Polylinie wieder her (beendet einen offenen Strich).
    pub fn apply_to(&self, state: &mut crate::app::AppState) {
        state.polyline.restore(&self.layout);
    }
}

/// Lineare Undo/Redo-History mit Cursor.
///
/// Zustände: leer (`cursor == None`) oder `At(i)`. Undo/Redo an den Rändern
/// sind definierte No-ops.
#[derive(Debug, Default)]
pub struct EditHistory {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: Vec::with_capacity(max_depth.min(256)),
            cursor: None,
            max_depth,
        }
    }

    /// Nimmt einen Snapshot als neuen Eintrag auf.
    ///
    /// Alles nach dem Cursor (Redo-Zweig) wird verworfen. Bei voller Tiefe
    /// fällt der älteste Eintrag heraus.
    pub fn commit(&mut self, snap: Snapshot) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(snap);

        if self.entries.len() > self.max_depth {
            let overflow = self.entries.len() - self.max_depth;
            self.entries.drain(..overflow);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Geht einen Eintrag zurück und liefert den wiederherzustellenden Snapshot.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1)
            }
            _ => None,
        }
    }

    /// Geht einen Eintrag vor und liefert den wiederherzustellenden Snapshot.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                self.entries.get(c + 1)
            }
            _ => None,
        }
    }

    /// Ändert die maximale Tiefe.
    ///
    /// Überzählige Einträge fallen zuerst am Redo-Ende heraus, danach die
    /// ältesten. Der Eintrag am Cursor bleibt immer erhalten.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        let Some(cursor) = self.cursor else {
            return;
        };
        if self.entries.len() <= self.max_depth {
            return;
        }

        let redo_len = self.entries.len() - (cursor + 1);
        let drop_back = redo_len.min(self.entries.len() - self.max_depth);
        self.entries.truncate(self.entries.len() - drop_back);

        // Hier gilt len == cursor + 1 oder len <= max_depth
        let drop_front = self.entries.len().saturating_sub(self.max_depth);
        self.entries.drain(..drop_front);
        self.cursor = Some(cursor - drop_front);
    }

    /// Verwirft alle Einträge (Cursor → leer).
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Aktueller Cursor (`None` = leer).
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Eintrag am Cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Anzahl gespeicherter Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
