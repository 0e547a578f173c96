//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod projection;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Zaunlinie, History, Materialien).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use projection::{order_summary, preview_placement};
pub use state::{AppState, MaterialSelection};
