use crate::core::{FenceColor, PanelSpec, PanelType, PostSpec, PostType};
use crate::shared::PlannerOptions;

/// Aktuelle Materialauswahl (Feld + Pfosten)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialSelection {
    /// Feldtyp und -farbe
    pub panel: PanelSpec,
    /// Pfostentyp und -farbe
    pub post: PostSpec,
}

impl MaterialSelection {
    /// Übernimmt die Vorauswahl aus den Optionen.
    pub fn from_options(options: &PlannerOptions) -> Self {
        Self {
            panel: PanelSpec {
                panel_type: options.default_panel_type,
                color: options.default_panel_color,
            },
            post: PostSpec {
                post_type: options.default_post_type,
                color: options.default_post_color,
            },
        }
    }

    /// Setzt den Feldtyp.
    pub fn set_panel_type(&mut self, panel_type: PanelType) {
        self.panel.panel_type = panel_type;
    }

    /// Setzt die Feldfarbe.
    pub fn set_panel_color(&mut self, color: FenceColor) {
        self.panel.color = color;
    }

    /// Setzt den Pfostentyp.
    pub fn set_post_type(&mut self, post_type: PostType) {
        self.post.post_type = post_type;
    }

    /// Setzt die Pfostenfarbe.
    pub fn set_post_color(&mut self, color: FenceColor) {
        self.post.color = color;
    }
}
