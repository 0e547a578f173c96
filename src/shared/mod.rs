//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und der Host gemeinsam nutzen.

pub mod options;

pub use options::PlannerOptions;
pub use options::{HISTORY_DEPTH, PIXELS_PER_UNIT};
