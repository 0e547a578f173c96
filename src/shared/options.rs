//! Zentrale Konfiguration für den Zaun-Planer.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{FenceColor, PanelCountPolicy, PanelType, PostType};
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Pixel pro Meter auf der Zeichenfläche (Rastergröße).
pub const PIXELS_PER_UNIT: f32 = 20.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Undo-Einträge.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planer-Optionen.
/// Wird als `fence_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Rastergröße: Pixel pro Meter
    pub pixels_per_unit: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    // ── Segmentierung ───────────────────────────────────────────
    /// Feldanzahl-Regel für kurze Segmente
    #[serde(default)]
    pub panel_count_policy: PanelCountPolicy,

    // ── Material-Vorauswahl ─────────────────────────────────────
    /// Feldtyp beim Start
    #[serde(default)]
    pub default_panel_type: PanelType,
    /// Feldfarbe beim Start
    #[serde(default)]
    pub default_panel_color: FenceColor,
    /// Pfostentyp beim Start
    #[serde(default)]
    pub default_post_type: PostType,
    /// Pfostenfarbe beim Start
    #[serde(default)]
    pub default_post_color: FenceColor,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            pixels_per_unit: PIXELS_PER_UNIT,
            history_depth: HISTORY_DEPTH,
            panel_count_policy: PanelCountPolicy::Rounded,
            default_panel_type: PanelType::default(),
            default_panel_color: FenceColor::default(),
            default_post_type: PostType::default(),
            default_post_color: FenceColor::default(),
        }
    }
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::validated(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fence-planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fence_planner.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Ein nicht-endliches oder nicht-positives `pixels_per_unit` würde jede
    /// Zeiger-Eingabe verwerfen.
    pub fn validated(mut self) -> Self {
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            log::warn!(
                "Ungültige Rastergröße {} px/m, verwende {}",
                self.pixels_per_unit,
                PIXELS_PER_UNIT
            );
            self.pixels_per_unit = PIXELS_PER_UNIT;
        }
        self
    }

    /// Undo-Tiefe, mindestens 1.
    pub fn effective_history_depth(&self) -> usize {
        self.history_depth.max(1)
    }
}
