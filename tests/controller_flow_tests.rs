//! Integrationstests für den Intent/Command-Fluss:
//! - Strich-Lifecycle (Drücken / Ziehen / Loslassen)
//! - Undo/Redo und Clear
//! - Materialauswahl und abgeleitete Konfiguration

use fence_planner::{AppCommand, AppController, AppIntent, AppState};
use fence_planner::shared::{HISTORY_DEPTH, PIXELS_PER_UNIT};
use fence_planner::{FenceColor, GridVertex, PanelType, PostType};
use glam::Vec2;

/// Rastergröße der Standard-Optionen (Pixel pro Meter).
const PX: f32 = PIXELS_PER_UNIT;

fn px(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * PX, y as f32 * PX)
}

/// Zeichnet einen Strich: Drücken bei `press`, Ziehen über `drag`, Loslassen.
fn draw(controller: &mut AppController, state: &mut AppState, press: Vec2, drag: &[Vec2]) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { screen_pos: press })
        .expect("PointerPressed darf nicht fehlschlagen");
    for &screen_pos in drag {
        controller
            .handle_intent(state, AppIntent::PointerMoved { screen_pos })
            .expect("PointerMoved darf nicht fehlschlagen");
    }
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased darf nicht fehlschlagen");
}

/// Setzt einen Punkt per Klick (Drücken + Loslassen ohne Ziehen).
fn click(controller: &mut AppController, state: &mut AppState, x: i32, y: i32) {
    draw(controller, state, px(x, y), &[]);
}

fn intent(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent darf nicht fehlschlagen");
}

#[test]
fn test_two_clicks_produce_three_metre_run() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 0, 0);
    click(&mut controller, &mut state, 3, 0);

    let config = state.configuration();
    assert_eq!(
        config.layout,
        vec![GridVertex::new(0, 0), GridVertex::new(3, 0)]
    );
    assert_eq!(config.panel_count(), 2);
    assert_eq!(config.post_count(), 2);
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_drag_through_fifty_positions_creates_one_history_entry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);
    let entries_before = state.history.len();

    let drag: Vec<Vec2> = (1..=50).map(|i| Vec2::new(i as f32 * 3.0, 7.0)).collect();
    draw(&mut controller, &mut state, px(0, 1), &drag);

    assert_eq!(state.history.len(), entries_before + 1);
    // 150 px / 20 = 7.5 → 8, 7 px / 20 = 0.35 → 0
    assert_eq!(state.polyline.vertices().last(), Some(&GridVertex::new(8, 0)));
    assert_eq!(
        state
            .command_log
            .count_matching(|c| matches!(c, AppCommand::DragTo { .. })),
        50
    );
}

#[test]
fn test_configuration_follows_live_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);

    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: px(1, 0),
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: px(6, 0),
        },
    );

    assert!(state.is_drawing());
    assert_eq!(state.configuration().panel_count(), 4);
    assert_eq!(state.history.len(), 1, "Drag erzeugt keinen History-Eintrag");

    intent(&mut controller, &mut state, AppIntent::PointerLeft);
    assert!(!state.is_drawing());
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_zero_displacement_click_collapses_and_records_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 2, 2);
    click(&mut controller, &mut state, 5, 2);
    let entries_before = state.history.len();

    click(&mut controller, &mut state, 5, 2);

    assert_eq!(
        state.polyline.vertices(),
        &[GridVertex::new(2, 2), GridVertex::new(5, 2)]
    );
    assert_eq!(state.history.len(), entries_before);
}

#[test]
fn test_undo_redo_roundtrip_after_first_committed_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);
    let before = state.polyline.vertices().to_vec();

    let points = [(2, 0), (2, 3), (5, 3), (5, 7)];
    for (x, y) in points {
        click(&mut controller, &mut state, x, y);
    }
    let after = state.polyline.vertices().to_vec();

    for _ in 0..points.len() {
        intent(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    assert_eq!(state.polyline.vertices(), before.as_slice());
    assert!(!state.can_undo());

    for _ in 0..points.len() {
        intent(&mut controller, &mut state, AppIntent::RedoRequested);
    }
    assert_eq!(state.polyline.vertices(), after.as_slice());
    assert!(!state.can_redo());
    assert_eq!(state.configuration().layout, after);
}

#[test]
fn test_undo_never_goes_below_first_committed_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0, 0), (3, 0), (3, 3)] {
        click(&mut controller, &mut state, x, y);
    }

    for _ in 0..3 {
        intent(&mut controller, &mut state, AppIntent::UndoRequested);
    }

    // Der erste Eintrag ist die Untergrenze, leer wird die Linie nur per Clear
    assert_eq!(state.polyline.vertices(), &[GridVertex::new(0, 0)]);
    assert_eq!(state.history.cursor(), Some(0));

    for _ in 0..2 {
        intent(&mut controller, &mut state, AppIntent::RedoRequested);
    }
    assert_eq!(state.polyline.len(), 3);
}

#[test]
fn test_commit_after_undo_discards_redo_branch() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);
    click(&mut controller, &mut state, 3, 0);
    click(&mut controller, &mut state, 3, 3);

    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    click(&mut controller, &mut state, 0, 6);
    assert!(!state.can_redo());

    intent(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(
        state.polyline.vertices(),
        &[GridVertex::new(0, 0), GridVertex::new(0, 6)]
    );
}

#[test]
fn test_clear_after_five_commits_then_undo_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for i in 0..5 {
        click(&mut controller, &mut state, i * 2, i);
    }
    assert_eq!(state.history.len(), 5);

    intent(&mut controller, &mut state, AppIntent::ClearLayoutRequested);
    intent(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.polyline.is_empty());
    assert_eq!(state.history.cursor(), None);
    assert!(state.configuration().is_empty());
    assert!(state.configuration().layout.is_empty());
}

#[test]
fn test_undo_during_drag_discards_live_vertex() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);
    click(&mut controller, &mut state, 4, 0);

    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: px(4, 4),
        },
    );
    intent(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(!state.is_drawing());
    assert_eq!(state.polyline.vertices(), &[GridVertex::new(0, 0)]);

    // Loslassen nach Undo darf nichts mehr festschreiben
    intent(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(state.can_redo());
}

#[test]
fn test_non_finite_pointer_never_enters_layout() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 1, 1);

    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(f32::NAN, 40.0),
        },
    );
    assert!(!state.is_drawing());

    draw(
        &mut controller,
        &mut state,
        px(2, 1),
        &[Vec2::new(f32::INFINITY, 0.0), px(4, 1)],
    );

    assert_eq!(
        state.polyline.vertices(),
        &[GridVertex::new(1, 1), GridVertex::new(4, 1)]
    );
    assert!(state.configuration().total_length().is_finite());
}

#[test]
fn test_material_selection_recomputes_configuration() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);
    click(&mut controller, &mut state, 6, 0);

    intent(
        &mut controller,
        &mut state,
        AppIntent::PanelTypeSelected {
            panel_type: PanelType::FullSteel,
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::PanelColorSelected {
            color: FenceColor::Ral9005,
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::PostTypeSelected {
            post_type: PostType::StrongFix80x80,
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::PostColorSelected {
            color: FenceColor::Custom,
        },
    );

    let config = state.configuration();
    assert_eq!(config.panel_count(), 4);
    assert!(config
        .panels
        .iter()
        .all(|p| p.panel_type == PanelType::FullSteel && p.color == FenceColor::Ral9005));
    assert!(config
        .posts
        .iter()
        .all(|p| p.post_type == PostType::StrongFix80x80 && p.color == FenceColor::Custom));
    // Materialwechsel erzeugt keinen History-Eintrag
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_options_change_applies_grid_and_panel_policy() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0, 0);
    // 10 px bei 20 px/m → 0.5 → 1 m; round(1 / 1.5) = 1
    draw(&mut controller, &mut state, Vec2::new(0.0, 10.0), &[]);
    assert_eq!(state.polyline.vertices().last(), Some(&GridVertex::new(0, 1)));

    let mut options = state.options.clone();
    options.pixels_per_unit = 40.0;
    options.panel_count_policy = fence_planner::PanelCountPolicy::AtLeastOne;
    intent(&mut controller, &mut state, AppIntent::OptionsChanged { options });

    // 40 px bei 40 px/m → 1 m; 20 px → 0.5 → 1 m
    draw(&mut controller, &mut state, Vec2::new(20.0, 40.0), &[]);
    assert_eq!(state.polyline.vertices().last(), Some(&GridVertex::new(1, 1)));
    // Segmente: (0,0)→(0,1) und (0,1)→(1,1), je Länge 1 → je 1 Feld
    assert_eq!(state.configuration().panel_count(), 2);

    intent(&mut controller, &mut state, AppIntent::ResetOptionsRequested);
    assert_eq!(state.options.pixels_per_unit, PIXELS_PER_UNIT);
    assert_eq!(state.options.history_depth, HISTORY_DEPTH);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ResetOptions)
    ));
}

#[test]
fn test_shrinking_history_depth_keeps_displayed_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for x in 0..6 {
        click(&mut controller, &mut state, x, 0);
    }
    for _ in 0..3 {
        intent(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    let shown = state.polyline.vertices().to_vec();
    assert_eq!(shown.len(), 3);

    let mut options = state.options.clone();
    options.history_depth = 2;
    intent(&mut controller, &mut state, AppIntent::OptionsChanged { options });

    assert_eq!(
        state.history.current().map(|snap| snap.layout.clone()),
        Some(shown.clone())
    );

    intent(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.polyline.vertices(), shown.as_slice());

    // Erneuter Klick auf den letzten Punkt ändert nichts und schreibt keinen Eintrag
    click(&mut controller, &mut state, 2, 0);
    assert_eq!(state.history.len(), 2);

    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.polyline.len(), 2);
}

#[test]
fn test_invalid_grid_size_keeps_drawing_possible() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let mut options = state.options.clone();
    options.pixels_per_unit = 0.0;
    intent(&mut controller, &mut state, AppIntent::OptionsChanged { options });
    assert_eq!(state.options.pixels_per_unit, PIXELS_PER_UNIT);

    click(&mut controller, &mut state, 0, 0);
    click(&mut controller, &mut state, 3, 0);
    assert_eq!(state.configuration().panel_count(), 2);
}
