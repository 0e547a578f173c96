//! Fence Planner (Headless).
//!
//! Spielt eine Zaun-Skizze (Zeigerstriche in Pixel-Koordinaten) durch den
//! Controller ab und gibt die Bestellübersicht aus.

use anyhow::Context;
use fence_planner::{
    app, AppController, AppIntent, AppState, FenceColor, PanelType, PlannerOptions, PostType,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Skizzen-Datei: Striche plus optionale Materialauswahl.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SketchFile {
    panel_type: Option<PanelType>,
    panel_color: Option<FenceColor>,
    post_type: Option<PostType>,
    post_color: Option<FenceColor>,
    /// Jeder Strich: erster Punkt = Drücken, weitere = Ziehen, danach Loslassen
    strokes: Vec<Vec<[f32; 2]>>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Fence Planner v{} startet...", env!("CARGO_PKG_VERSION"));

    let Some(sketch_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        anyhow::bail!("Aufruf: fence-planner <skizze.json>");
    };

    let config_path = PlannerOptions::config_path();
    let options = PlannerOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    state.options_path = Some(config_path);
    let mut controller = AppController::new();

    let sketch = load_sketch(&sketch_path)?;
    for intent in sketch_intents(&sketch) {
        controller.handle_intent(&mut state, intent)?;
    }

    let summary = app::order_summary(&state);
    println!("{summary}");
    for (index, label) in summary.segment_labels().iter().enumerate() {
        println!("  Segment {}: {}", index + 1, label);
    }
    log::info!(
        "{} Commands ausgeführt, {} History-Einträge",
        state.command_log.len(),
        state.history.len()
    );

    Ok(())
}

fn load_sketch(path: &Path) -> anyhow::Result<SketchFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Skizze nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Skizze fehlerhaft: {}", path.display()))
}

/// Übersetzt die Skizze in die Intent-Folge, die die Zeichenfläche erzeugen würde.
fn sketch_intents(sketch: &SketchFile) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    if let Some(panel_type) = sketch.panel_type {
        intents.push(AppIntent::PanelTypeSelected { panel_type });
    }
    if let Some(color) = sketch.panel_color {
        intents.push(AppIntent::PanelColorSelected { color });
    }
    if let Some(post_type) = sketch.post_type {
        intents.push(AppIntent::PostTypeSelected { post_type });
    }
    if let Some(color) = sketch.post_color {
        intents.push(AppIntent::PostColorSelected { color });
    }

    for stroke in &sketch.strokes {
        let mut points = stroke.iter().map(|&[x, y]| glam::Vec2::new(x, y));
        let Some(press) = points.next() else {
            continue;
        };
        intents.push(AppIntent::PointerPressed { screen_pos: press });
        intents.extend(points.map(|screen_pos| AppIntent::PointerMoved { screen_pos }));
        intents.push(AppIntent::PointerReleased);
    }

    intents
}
