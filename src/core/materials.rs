//! Materialkatalog: Feldtypen, Pfostentypen, Farben.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nennbreite eines Zaunfelds in Millimetern.
pub const PANEL_WIDTH_MM: u32 = 1500;
/// Höhe eines Zaunfelds in Millimetern.
pub const PANEL_HEIGHT_MM: u32 = 2200;
/// Höhe eines Pfostens in Millimetern.
pub const POST_HEIGHT_MM: u32 = 2400;

/// Typ eines Zaunfelds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelType {
    /// Gitterfeld Mesh ST20
    #[default]
    MeshSt20,
    /// Polycarbonat-Füllung
    Polycarbonate,
    /// Vollblech
    FullSteel,
}

impl PanelType {
    /// Katalogbezeichnung
    pub fn label(self) -> &'static str {
        match self {
            PanelType::MeshSt20 => "Mesh ST20",
            PanelType::Polycarbonate => "Polycarbonate",
            PanelType::FullSteel => "Full Steel",
        }
    }

    /// Physische Breite in Millimetern.
    pub fn width_mm(self) -> u32 {
        PANEL_WIDTH_MM
    }

    /// Physische Höhe in Millimetern.
    pub fn height_mm(self) -> u32 {
        PANEL_HEIGHT_MM
    }
}

/// Typ eines Pfostens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostType {
    /// 60x40 Smart Fix
    #[default]
    SmartFix60x40,
    /// 80x80 Strong Fix
    StrongFix80x80,
}

impl PostType {
    /// Katalogbezeichnung
    pub fn label(self) -> &'static str {
        match self {
            PostType::SmartFix60x40 => "60x40 Smart Fix",
            PostType::StrongFix80x80 => "80x80 Strong Fix",
        }
    }

    /// Höhe in Millimetern.
    pub fn height_mm(self) -> u32 {
        POST_HEIGHT_MM
    }
}

/// RAL-Farbe für Felder und Pfosten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FenceColor {
    /// RAL 7037 Staubgrau
    #[default]
    Ral7037,
    /// RAL 9005 Tiefschwarz
    Ral9005,
    /// Sonderfarbe nach Absprache
    Custom,
}

impl FenceColor {
    /// Katalogbezeichnung
    pub fn label(self) -> &'static str {
        match self {
            FenceColor::Ral7037 => "7037",
            FenceColor::Ral9005 => "9005",
            FenceColor::Custom => "Custom",
        }
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for FenceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Materialauswahl für Zaunfelder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Feldtyp
    pub panel_type: PanelType,
    /// Farbe
    pub color: FenceColor,
}

/// Materialauswahl für Pfosten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostSpec {
    /// Pfostentyp
    pub post_type: PostType,
    /// Farbe
    pub color: FenceColor,
}

/// Ein Zaunfeld in der Materialliste (ohne Position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Feldtyp
    pub panel_type: PanelType,
    /// Farbe
    pub color: FenceColor,
    /// Breite in Millimetern
    pub width_mm: u32,
    /// Höhe in Millimetern
    pub height_mm: u32,
}

impl Panel {
    /// Erstellt ein Feld mit den Maßen des gewählten Typs.
    pub fn from_spec(spec: &PanelSpec) -> Self {
        Self {
            panel_type: spec.panel_type,
            color: spec.color,
            width_mm: spec.panel_type.width_mm(),
            height_mm: spec.panel_type.height_mm(),
        }
    }
}

/// Ein Pfosten in der Materialliste (ohne Position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Pfostentyp
    pub post_type: PostType,
    /// Farbe
    pub color: FenceColor,
    /// Höhe in Millimetern
    pub height_mm: u32,
}

impl Post {
    /// Erstellt einen Pfosten mit der Höhe des gewählten Typs.
    pub fn from_spec(spec: &PostSpec) -> Self {
        Self {
            post_type: spec.post_type,
            color: spec.color,
            height_mm: spec.post_type.height_mm(),
        }
    }
}
