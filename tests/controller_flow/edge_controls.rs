use crate::{move_to, press_at, send};
use approx::assert_abs_diff_eq;
use glam::DVec2;
use triangle_editor::{
    AppController, AppIntent, AppState, ControlKind, EdgeControl, EdgeLabel, Interaction,
    VertexLabel,
};

fn bearing(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Startet den Drag des Bedienelements `index` (Layout-Reihenfolge) der Kante AB.
fn grab_ab_handle(
    controller: &mut AppController,
    state: &mut AppState,
    index: usize,
) -> (EdgeControl, DVec2) {
    let handle = state.handles_for(EdgeLabel::AB).expect("AB hat Länge")[index];
    assert!(press_at(controller, state, handle.position));
    assert_eq!(state.interaction.active_control(), Some(handle.control));
    (handle.control, handle.position)
}

#[test]
fn test_angle_control_rotates_edge_about_pivot() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = state.triangle.vertex(VertexLabel::A);
    let b = state.triangle.vertex(VertexLabel::B);
    let c = state.triangle.vertex(VertexLabel::C);
    let interior = state.measurements().angle_a;
    let start_bearing = bearing(b - a);

    let (control, grab) = grab_ab_handle(&mut controller, &mut state, 1);
    assert_eq!(
        control,
        EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::A)
    );

    // Cursor um 10° um A weiterdrehen
    let cursor = a + DVec2::from_angle(10f64.to_radians()).rotate(grab - a);
    assert!(move_to(&mut controller, &mut state, cursor));

    let moved_b = state.triangle.vertex(VertexLabel::B);
    assert_eq!(state.triangle.vertex(VertexLabel::A), a);
    assert_eq!(state.triangle.vertex(VertexLabel::C), c);
    assert_abs_diff_eq!(a.distance(moved_b), a.distance(b), epsilon = 1e-9);

    let rounding = (interior - interior.round()).to_radians();
    assert_abs_diff_eq!(
        bearing(moved_b - a),
        start_bearing - rounding + 10f64.to_radians(),
        epsilon = 1e-9
    );

    assert!(send(&mut controller, &mut state, AppIntent::PointerReleased));
    assert_eq!(state.interaction, Interaction::Idle);
    assert_eq!(state.triangle.vertex(VertexLabel::B), moved_b);
    assert_abs_diff_eq!(state.measurements().angle_sum(), 180.0, epsilon = 1e-6);
}

#[test]
fn test_length_control_extends_edge_in_half_units() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = state.triangle.vertex(VertexLabel::A);
    let dir = (state.triangle.vertex(VertexLabel::B) - a).normalize();

    let (control, grab) = grab_ab_handle(&mut controller, &mut state, 3);
    assert_eq!(control.kind, ControlKind::Length);
    assert_eq!(control.endpoint, VertexLabel::B);

    // √80 ≈ 8.94 wird auf 9.0 gerundet, +1.1 entlang der Kante ergibt +1.0
    move_to(&mut controller, &mut state, grab + dir * 1.1);
    assert_abs_diff_eq!(state.measurements().len_ab, 10.0, epsilon = 1e-9);
    assert_eq!(state.triangle.vertex(VertexLabel::A), a);

    // Quer zur Kante ändert sich die Länge nicht
    move_to(
        &mut controller,
        &mut state,
        grab + dir * 1.1 + dir.perp() * 3.0,
    );
    assert_abs_diff_eq!(state.measurements().len_ab, 10.0, epsilon = 1e-9);

    // Weit zurück: Mindestlänge einer halben Rastereinheit
    move_to(&mut controller, &mut state, grab - dir * 40.0);
    assert_abs_diff_eq!(state.measurements().len_ab, 0.5, epsilon = 1e-9);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.interaction, Interaction::Idle);
}

#[test]
fn test_edits_are_ignored_while_dragging() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    grab_ab_handle(&mut controller, &mut state, 0);
    let before = state.triangle;

    // Blockierte Eingaben gelten als nicht verbraucht
    assert!(!send(
        &mut controller,
        &mut state,
        AppIntent::AngleInputChanged {
            vertex: VertexLabel::C,
            degrees: 45.0,
        },
    ));
    assert!(!send(
        &mut controller,
        &mut state,
        AppIntent::DistanceInputChanged {
            edge: EdgeLabel::BC,
            input: "6".into(),
        },
    ));
    assert!(!send(
        &mut controller,
        &mut state,
        AppIntent::DistancesSubmitted {
            ab: "3".into(),
            bc: "4".into(),
            ac: "5".into(),
        },
    ));
    assert_eq!(state.triangle, before);
    assert!(state.ui.validation_message.is_none());
    assert!(state.interaction.is_dragging());

    // Ein zweiter Druck startet keinen weiteren Drag
    let c = state.triangle.vertex(VertexLabel::C);
    assert!(!send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed { world_pos: c }
    ));
    assert!(state.interaction.active_control().is_some());
}

#[test]
fn test_hover_resumes_after_release() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    grab_ab_handle(&mut controller, &mut state, 2);
    assert_eq!(state.interaction.hovered_edge(), None);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.interaction.hovered_edge(), None);

    // Kantenmitte CA
    move_to(&mut controller, &mut state, DVec2::new(-4.0, -1.0));
    assert_eq!(state.interaction.hovered_edge(), Some(EdgeLabel::CA));

    let scene = controller.build_scene(&state);
    assert_eq!(scene.handles.len(), 4);
}
