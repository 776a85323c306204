use crate::{move_to, press_at, send};
use approx::assert_abs_diff_eq;
use glam::DVec2;
use std::path::PathBuf;
use triangle_editor::{
    AppController, AppIntent, AppState, EdgeLabel, EditorOptions, VertexLabel,
};

/// Eigene Optionen-Datei je Test im Temp-Verzeichnis.
fn options_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "triangle_editor_flow_{}_{}.toml",
        name,
        std::process::id()
    ))
}

fn bearing(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

#[test]
fn test_applied_options_are_saved_and_drive_snapping() {
    let path = options_file("apply");
    let mut controller = AppController::with_options_path(&path);
    let mut state = AppState::new();
    assert_eq!(controller.options_path(), path.as_path());

    let mut options = EditorOptions::default();
    options.angle_snap_degrees = 5.0;
    options.grid_units_per_cm = 2.0;
    assert!(send(
        &mut controller,
        &mut state,
        AppIntent::OptionsApplied {
            options: options.clone()
        }
    ));
    assert_eq!(state.options, options);
    assert_eq!(EditorOptions::load_from_file(&path), options);

    // Winkel-Drag rastet jetzt in 5°-Schritten ein
    let a = state.triangle.vertex(VertexLabel::A);
    let start_bearing = bearing(state.triangle.vertex(VertexLabel::B) - a);
    let interior = state.measurements().angle_a;
    let handle = state.handles_for(EdgeLabel::AB).expect("AB hat Länge")[1];
    assert!(press_at(&mut controller, &mut state, handle.position));

    let cursor = a + DVec2::from_angle(7f64.to_radians()).rotate(handle.position - a);
    move_to(&mut controller, &mut state, cursor);
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    let rounding = (interior - (interior / 5.0).round() * 5.0).to_radians();
    assert_abs_diff_eq!(
        bearing(state.triangle.vertex(VertexLabel::B) - a),
        start_bearing - rounding + 5f64.to_radians(),
        epsilon = 1e-9
    );

    // 3 cm bei 2 Rastereinheiten pro cm
    assert!(send(
        &mut controller,
        &mut state,
        AppIntent::DistanceInputChanged {
            edge: EdgeLabel::AB,
            input: "3".into(),
        }
    ));
    assert_abs_diff_eq!(state.measurements().len_ab, 6.0, epsilon = 1e-9);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_reset_options_restores_and_saves_defaults() {
    let path = options_file("reset");
    let mut controller = AppController::with_options_path(&path);
    let mut state = AppState::new();

    let mut options = EditorOptions::default();
    options.length_snap_units = 2.0;
    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsApplied { options },
    );
    assert_eq!(state.options.length_snap_units, 2.0);

    assert!(send(
        &mut controller,
        &mut state,
        AppIntent::OptionsResetRequested
    ));
    assert_eq!(state.options, EditorOptions::default());
    assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_option_values_fall_back_to_defaults() {
    let path = options_file("invalid");
    let mut controller = AppController::with_options_path(&path);
    let mut state = AppState::new();

    let mut options = EditorOptions::default();
    options.grid_units_per_cm = 0.0;
    options.angle_snap_degrees = -5.0;
    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsApplied { options },
    );
    assert_eq!(state.options, EditorOptions::default());

    // Ein Abstand von 4 cm bleibt ein gültiges Dreieck statt auf null zu schrumpfen
    let before = state.triangle;
    send(
        &mut controller,
        &mut state,
        AppIntent::DistanceInputChanged {
            edge: EdgeLabel::CA,
            input: "4".into(),
        },
    );
    assert_ne!(state.triangle, before);
    assert_abs_diff_eq!(state.measurements().len_ca, 4.0, epsilon = 1e-9);
    assert!(state.ui.validation_message.is_none());

    std::fs::remove_file(&path).ok();
}
