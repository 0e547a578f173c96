//! Core-Domänentypen: Rasterpunkte, Polylinie, Materialien, Segmentierung.

pub mod configuration;
pub mod materials;
pub mod polyline;
pub mod preview;
pub mod segmentation;
pub mod summary;
pub mod vertex;

pub use configuration::FenceConfiguration;
pub use materials::{FenceColor, Panel, PanelSpec, PanelType, Post, PostSpec, PostType};
pub use polyline::{segment_lengths, total_length, Polyline};
pub use preview::{build_placement, PanelPlacement, PostPlacement, PreviewPlacement};
pub use segmentation::{
    panel_count_for_length, segment, segment_with_policy, PanelCountPolicy, NOMINAL_PANEL_WIDTH,
};
pub use summary::{MaterialRow, OrderSummary};
pub use vertex::{snap_to_grid, GridVertex};
