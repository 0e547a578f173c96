//! Fence Planner Library.
//! Zaunlinie skizzieren, Undo/Redo, Aufteilung in Felder und Pfosten.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditHistory, MaterialSelection};
pub use core::{
    build_placement, panel_count_for_length, segment, segment_with_policy, snap_to_grid,
    FenceColor, FenceConfiguration, GridVertex, OrderSummary, Panel, PanelCountPolicy, PanelSpec,
    PanelType, Polyline, Post, PostSpec, PostType, PreviewPlacement, NOMINAL_PANEL_WIDTH,
};
pub use shared::PlannerOptions;
