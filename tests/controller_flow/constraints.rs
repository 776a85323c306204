use crate::send;
use approx::assert_abs_diff_eq;
use triangle_editor::{
    AppController, AppIntent, AppState, ConstructionKind, EdgeLabel, Triangle, VertexLabel,
};

fn set_angle(controller: &mut AppController, state: &mut AppState, vertex: VertexLabel, degrees: f64) {
    assert!(send(
        controller,
        state,
        AppIntent::AngleInputChanged { vertex, degrees }
    ));
}

#[test]
fn test_angle_inputs_keep_last_edited_angle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_angle(&mut controller, &mut state, VertexLabel::A, 80.0);
    set_angle(&mut controller, &mut state, VertexLabel::B, 30.0);

    let scene = controller.build_scene(&state);
    assert_abs_diff_eq!(scene.measurements.angle_a, 80.0, epsilon = 1e-6);
    assert_abs_diff_eq!(scene.measurements.angle_b, 30.0, epsilon = 1e-6);
    assert_abs_diff_eq!(scene.measurements.angle_c, 70.0, epsilon = 1e-6);
    assert_eq!(scene.input_fields.angle_c, "70.0");

    // 100 + 80 lässt keinen Platz für B: Eingabe wird verworfen
    let before = state.triangle;
    set_angle(&mut controller, &mut state, VertexLabel::C, 100.0);
    assert_eq!(state.triangle, before);
    assert!(state.ui.validation_message.is_none());
}

#[test]
fn test_invalid_distances_show_message_until_dismissed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.triangle;

    assert!(send(
        &mut controller,
        &mut state,
        AppIntent::DistancesSubmitted {
            ab: "1".into(),
            bc: "1".into(),
            ac: "5".into(),
        },
    ));
    assert_eq!(state.triangle, before);
    let scene = controller.build_scene(&state);
    assert_eq!(
        scene.validation_message.as_deref(),
        Some("Diese Abstände bilden kein gültiges Dreieck")
    );

    assert!(send(
        &mut controller,
        &mut state,
        AppIntent::ValidationMessageDismissed
    ));
    assert!(state.ui.validation_message.is_none());
    assert!(!send(
        &mut controller,
        &mut state,
        AppIntent::ValidationMessageDismissed
    ));
}

#[test]
fn test_single_distance_input_updates_one_side() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.measurements();

    send(
        &mut controller,
        &mut state,
        AppIntent::DistanceInputChanged {
            edge: EdgeLabel::CA,
            input: "7".into(),
        },
    );

    let m = state.measurements();
    assert_abs_diff_eq!(m.len_ca, 7.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.len_ab, before.len_ab, epsilon = 1e-9);
    assert_abs_diff_eq!(m.len_bc, before.len_bc, epsilon = 1e-9);
    assert_abs_diff_eq!(m.angle_sum(), 180.0, epsilon = 1e-6);
    assert_eq!(controller.build_scene(&state).input_fields.dist_ac, "7.00");
}

#[test]
fn test_reset_restores_initial_triangle_and_clears_edit_memory() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let initial = Triangle::from_coords(state.options.initial_vertices);

    set_angle(&mut controller, &mut state, VertexLabel::A, 50.0);
    assert_ne!(state.triangle, initial);

    assert!(send(&mut controller, &mut state, AppIntent::ResetTriangleRequested));
    assert_eq!(state.triangle, initial);
    assert_eq!(state.constraint.last_edited_angle, None);
}

#[test]
fn test_construction_toggles_are_reflected_in_scene() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for kind in [ConstructionKind::Incircle, ConstructionKind::CoordinateSystem] {
        assert!(send(
            &mut controller,
            &mut state,
            AppIntent::ConstructionToggled { kind }
        ));
    }

    let scene = controller.build_scene(&state);
    assert!(scene.display.is_shown(ConstructionKind::Incircle));
    assert!(!scene.display.is_shown(ConstructionKind::CoordinateSystem));
    assert!(!scene.display.is_shown(ConstructionKind::Medians));
    // Konstruktionen werden unabhängig von der Sichtbarkeit berechnet
    assert!(scene.constructions.incircle.is_some());
    assert!(scene.inradius_to_circumradius.is_some_and(|q| q > 0.0 && q <= 0.5));
}
