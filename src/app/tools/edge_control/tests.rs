use super::drag::{begin, update, MIN_EDGE_LENGTH};
use super::state::DragBaseline;
use super::*;
use crate::core::geometry::bearing;
use crate::core::measurement::angle_at;
use crate::core::{EdgeLabel, Triangle, VertexLabel};
use approx::assert_abs_diff_eq;
use glam::DVec2;

fn right_triangle() -> Triangle {
    Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(0.0, 3.0),
    )
}

fn layout(spacing: f64, gap: f64, detect_radius: f64) -> HandleLayout {
    HandleLayout {
        spacing,
        gap,
        icon_size: detect_radius * 0.8,
        detect_radius,
    }
}

fn cursor_at_degrees(pivot: DVec2, degrees: f64, radius: f64) -> DVec2 {
    pivot + DVec2::from_angle(degrees.to_radians()) * radius
}

// ── Layout & Trefferprüfung ──

#[test]
fn test_handle_positions_follow_layout_order() {
    let tri = Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(0.0, 6.0),
    );
    let handles = handle_positions(&tri, EdgeLabel::AB, &layout(1.0, 1.0, 0.5))
        .expect("Kante hat Länge");

    let expected = [
        (ControlKind::Length, VertexLabel::A, 3.0),
        (ControlKind::Angle, VertexLabel::A, 4.0),
        (ControlKind::Angle, VertexLabel::B, 6.0),
        (ControlKind::Length, VertexLabel::B, 7.0),
    ];
    for (handle, (kind, endpoint, x)) in handles.iter().zip(expected) {
        assert_eq!(handle.control.kind, kind);
        assert_eq!(handle.control.endpoint, endpoint);
        assert_eq!(handle.control.edge, EdgeLabel::AB);
        assert_abs_diff_eq!(handle.position.x, x, epsilon = 1e-12);
        assert_abs_diff_eq!(handle.position.y, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_handle_positions_respect_edge_direction() {
    // CA läuft von C nach A, P1 = C
    let handles = handle_positions(&right_triangle(), EdgeLabel::CA, &layout(0.5, 0.25, 0.2))
        .expect("Kante hat Länge");
    assert_eq!(handles[0].control.endpoint, VertexLabel::C);
    assert_abs_diff_eq!(handles[0].position.y, 1.5 + 0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(handles[3].position.y, 1.5 - 0.75, epsilon = 1e-12);
}

#[test]
fn test_hit_test_uses_strict_detect_radius() {
    let tri = Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(0.0, 6.0),
    );
    let l = layout(1.0, 1.0, 0.5);

    let hit = hit_test(&tri, EdgeLabel::AB, DVec2::new(4.2, 0.1), &l);
    assert_eq!(
        hit,
        Some(EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::A))
    );

    let hit = hit_test(&tri, EdgeLabel::AB, DVec2::new(7.4, 0.1), &l);
    assert_eq!(
        hit,
        Some(EdgeControl::new(EdgeLabel::AB, ControlKind::Length, VertexLabel::B))
    );

    // Genau auf dem Radius: kein Treffer
    assert!(hit_test(&tri, EdgeLabel::AB, DVec2::new(4.5, 0.0), &l).is_none());
}

#[test]
fn test_hit_test_prefers_angle_handle_on_overlap() {
    let tri = Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(0.0, 6.0),
    );
    // Alle vier Elemente überlappen sich
    let l = layout(0.2, 0.2, 1.0);
    let hit = hit_test(&tri, EdgeLabel::AB, DVec2::new(4.4, 0.0), &l);
    assert_eq!(
        hit,
        Some(EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::A))
    );
}

#[test]
fn test_zero_length_edge_has_no_handles() {
    let p = DVec2::new(1.0, 1.0);
    let tri = Triangle::new(p, p, DVec2::new(5.0, 5.0));
    let l = HandleLayout::default();
    assert!(handle_positions(&tri, EdgeLabel::AB, &l).is_none());
    assert!(hit_test(&tri, EdgeLabel::AB, p, &l).is_none());
}

#[test]
fn test_nearest_edge_within_hover_distance() {
    let tri = right_triangle();
    assert_eq!(
        nearest_edge(&tri, DVec2::new(2.0, 0.1), 0.2),
        Some(EdgeLabel::AB)
    );
    assert_eq!(nearest_edge(&tri, DVec2::new(2.0, 0.3), 0.2), None);
    // Jenseits des Segments zählt der Endpunkt, nicht die Gerade
    assert_eq!(nearest_edge(&tri, DVec2::new(5.0, 0.0), 0.5), None);
}

#[test]
fn test_nearest_edge_ties_resolve_in_label_order() {
    let tri = right_triangle();
    // A liegt auf AB und CA
    assert_eq!(nearest_edge(&tri, DVec2::ZERO, 0.1), Some(EdgeLabel::AB));
    // C liegt auf BC und CA
    assert_eq!(
        nearest_edge(&tri, DVec2::new(0.0, 3.0), 0.1),
        Some(EdgeLabel::BC)
    );
}

// ── Winkel-Drag ──

#[test]
fn test_angle_drag_snaps_to_whole_degrees() {
    let mut tri = right_triangle();
    let steps = SnapSteps::default();
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::A);
    let active = begin(&tri, control, DVec2::new(5.0, 0.0), &steps).expect("Drag startet");

    assert!(update(&mut tri, &active, cursor_at_degrees(DVec2::ZERO, 0.4, 5.0), &steps));
    let b = tri.vertex(VertexLabel::B);
    assert_abs_diff_eq!(b.x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.y, 0.0, epsilon = 1e-12);

    assert!(update(&mut tri, &active, cursor_at_degrees(DVec2::ZERO, 0.6, 5.0), &steps));
    let b = tri.vertex(VertexLabel::B);
    assert_abs_diff_eq!(bearing(b).to_degrees(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.length(), 4.0, epsilon = 1e-12);

    // Pivot und dritter Eckpunkt bleiben unverändert
    assert_eq!(tri.vertex(VertexLabel::A), DVec2::ZERO);
    assert_eq!(tri.vertex(VertexLabel::C), DVec2::new(0.0, 3.0));
    assert_abs_diff_eq!(tri.measure().angle_sum(), 180.0, epsilon = 1e-6);
}

#[test]
fn test_angle_drag_zero_movement_snaps_interior_angle() {
    // Dritter Eckpunkt in negativer Drehrichtung von der Kante
    let mut tri = Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(1.0, -3.0),
    );
    let before = angle_at(DVec2::ZERO, DVec2::new(4.0, 0.0), DVec2::new(1.0, -3.0));
    assert!((before - before.round()).abs() > 0.1);

    let steps = SnapSteps::default();
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::A);
    let cursor = DVec2::new(3.0, 1.0);
    let active = begin(&tri, control, cursor, &steps).expect("Drag startet");
    assert!(update(&mut tri, &active, cursor, &steps));

    let m = tri.measure();
    assert_abs_diff_eq!(m.angle_a, before.round(), epsilon = 1e-9);
    assert_abs_diff_eq!(m.len_ab, 4.0, epsilon = 1e-12);
}

#[test]
fn test_angle_drag_baseline_subtracts_interior_rounding() {
    let tri = Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(1.0, 3.0),
    );
    let interior = angle_at(DVec2::ZERO, DVec2::new(4.0, 0.0), DVec2::new(1.0, 3.0));
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::A);
    let active =
        begin(&tri, control, DVec2::new(2.0, 2.0), &SnapSteps::default()).expect("Drag startet");

    match active.baseline {
        DragBaseline::Angle {
            start_mouse_angle,
            snapped_start_edge_angle,
        } => {
            assert_abs_diff_eq!(
                start_mouse_angle,
                std::f64::consts::FRAC_PI_4,
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                snapped_start_edge_angle,
                -(interior - interior.round()).to_radians(),
                epsilon = 1e-12
            );
        }
        DragBaseline::Length { .. } => panic!("Winkel-Drag erwartet"),
    }
}

#[test]
fn test_angle_drag_from_second_endpoint_rotates_first() {
    let mut tri = right_triangle();
    let steps = SnapSteps::default();
    // Pivot B, bewegt wird A
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Angle, VertexLabel::B);
    let b = tri.vertex(VertexLabel::B);
    let active = begin(&tri, control, cursor_at_degrees(b, 180.0, 2.0), &steps).expect("Drag");

    let interior_b = tri.measure().angle_b;
    let snapped = interior_b.round();
    assert!(update(&mut tri, &active, cursor_at_degrees(b, 190.0, 2.0), &steps));

    assert_eq!(tri.vertex(VertexLabel::B), b);
    assert_abs_diff_eq!(tri.measure().len_ab, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(tri.measure().angle_b, snapped + 10.0, epsilon = 1e-9);
}

// ── Längen-Drag ──

#[test]
fn test_length_drag_snaps_projected_delta() {
    let mut tri = right_triangle();
    let steps = SnapSteps::default();
    // B bewegt sich, A bleibt fest
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Length, VertexLabel::B);
    let press = DVec2::new(7.0, 0.0);
    let active = begin(&tri, control, press, &steps).expect("Drag startet");

    assert!(update(&mut tri, &active, press + DVec2::new(0.24, 0.0), &steps));
    assert_eq!(tri.vertex(VertexLabel::B), DVec2::new(4.0, 0.0));

    assert!(update(&mut tri, &active, press + DVec2::new(0.3, 0.0), &steps));
    assert_abs_diff_eq!(tri.vertex(VertexLabel::B).x, 4.5, epsilon = 1e-12);

    // Senkrechte Bewegung projiziert auf null
    assert!(update(&mut tri, &active, press + DVec2::new(0.0, 5.0), &steps));
    assert_abs_diff_eq!(tri.vertex(VertexLabel::B).x, 4.0, epsilon = 1e-12);

    assert_eq!(tri.vertex(VertexLabel::A), DVec2::ZERO);
    assert_eq!(tri.vertex(VertexLabel::C), DVec2::new(0.0, 3.0));
}

#[test]
fn test_length_drag_starts_from_snapped_length() {
    let mut tri = Triangle::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.2, 0.0),
        DVec2::new(0.0, 3.0),
    );
    let steps = SnapSteps::default();
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Length, VertexLabel::B);
    let press = DVec2::new(4.2, 0.0);
    let active = begin(&tri, control, press, &steps).expect("Drag startet");

    assert!(update(&mut tri, &active, press, &steps));
    assert_abs_diff_eq!(tri.vertex(VertexLabel::B).x, 4.0, epsilon = 1e-12);
}

#[test]
fn test_length_drag_has_minimum_length() {
    let mut tri = right_triangle();
    let steps = SnapSteps::default();
    let control = EdgeControl::new(EdgeLabel::AB, ControlKind::Length, VertexLabel::B);
    let press = DVec2::new(4.0, 0.0);
    let active = begin(&tri, control, press, &steps).expect("Drag startet");

    assert!(update(&mut tri, &active, DVec2::new(-20.0, 0.0), &steps));
    assert_abs_diff_eq!(tri.vertex(VertexLabel::B).x, MIN_EDGE_LENGTH, epsilon = 1e-12);
    assert_abs_diff_eq!(tri.vertex(VertexLabel::B).y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_length_drag_rederives_direction_each_update() {
    let mut tri = right_triangle();
    let steps = SnapSteps::default();
    // CA@A: A bewegt sich, C bleibt fest
    let control = EdgeControl::new(EdgeLabel::CA, ControlKind::Length, VertexLabel::A);
    let press = DVec2::ZERO;
    let active = begin(&tri, control, press, &steps).expect("Drag startet");

    // Kante dazwischen anderweitig gedreht: A liegt jetzt rechts von C
    tri.set_vertex(VertexLabel::A, DVec2::new(3.0, 3.0));
    assert!(update(&mut tri, &active, press + DVec2::new(1.0, 0.0), &steps));

    // Startlänge 3 + Projektion 1 entlang der neuen Richtung (+x)
    let a = tri.vertex(VertexLabel::A);
    assert_abs_diff_eq!(a.x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, 3.0, epsilon = 1e-12);
}

#[test]
fn test_zero_length_edge_update_is_noop() {
    let p = DVec2::new(2.0, 2.0);
    let start = Triangle::new(p, p, DVec2::new(6.0, 0.0));
    let steps = SnapSteps::default();

    for kind in [ControlKind::Angle, ControlKind::Length] {
        let mut tri = start;
        let control = EdgeControl::new(EdgeLabel::AB, kind, VertexLabel::A);
        let active = begin(&tri, control, DVec2::new(3.0, 3.0), &steps).expect("Drag startet");
        assert!(!update(&mut tri, &active, DVec2::new(9.0, -4.0), &steps));
        assert_eq!(tri, start);
    }
}

#[test]
fn test_moving_vertex_follows_role_table() {
    let angle = EdgeControl::new(EdgeLabel::BC, ControlKind::Angle, VertexLabel::C);
    assert_eq!(angle.moving_vertex(), Some(VertexLabel::B));
    let length = EdgeControl::new(EdgeLabel::BC, ControlKind::Length, VertexLabel::C);
    assert_eq!(length.moving_vertex(), Some(VertexLabel::C));
    let invalid = EdgeControl::new(EdgeLabel::BC, ControlKind::Length, VertexLabel::A);
    assert_eq!(invalid.moving_vertex(), None);
}
