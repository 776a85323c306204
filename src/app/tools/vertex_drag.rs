//! Eckpunkt-Drag: Eckpunkt greifen und auf Rasterpositionen ziehen.

use crate::core::geometry::snap_point_to_grid;
use crate::core::{Triangle, VertexLabel};
use glam::DVec2;

/// Erster Eckpunkt (Reihenfolge A, B, C) strikt innerhalb des Pick-Radius.
pub fn pick_vertex(triangle: &Triangle, cursor: DVec2, pick_radius: f64) -> Option<VertexLabel> {
    VertexLabel::ALL
        .into_iter()
        .find(|&v| triangle.vertex(v).distance(cursor) < pick_radius)
}

/// Setzt den Eckpunkt auf die gerundete Cursor-Position.
///
/// Gibt `true` zurück, wenn sich die Position geändert hat.
pub fn drag_to(triangle: &mut Triangle, vertex: VertexLabel, cursor: DVec2) -> bool {
    let snapped = snap_point_to_grid(cursor);
    if triangle.vertex(vertex) == snapped {
        return false;
    }
    triangle.set_vertex(vertex, snapped);
    true
}
