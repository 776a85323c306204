//! Drag-Logik der Kanten-Bedienelemente (Drehen und Verlängern mit Snapping).

use super::state::{ActiveControl, DragBaseline};
use crate::core::geometry::{angle_between, bearing, snap_to_step, unit_direction, GRID_UNIT};
use crate::core::{ControlKind, EdgeControl, Triangle};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Kürzeste Kantenlänge beim Längen-Drag (halbe Rasterzelle).
pub const MIN_EDGE_LENGTH: f64 = GRID_UNIT * 0.5;

/// Snap-Schritte während eines Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSteps {
    /// Winkel-Raster in Grad
    pub angle_degrees: f64,
    /// Längen-Raster in Rastereinheiten
    pub length_units: f64,
}

impl SnapSteps {
    /// Übernimmt die Snap-Schritte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            angle_degrees: options.angle_snap_degrees,
            length_units: options.length_snap_units,
        }
    }
}

impl Default for SnapSteps {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Startet einen Drag und hält die Ausgangswerte fest.
///
/// Winkel: Die Startrichtung wird um die Differenz zwischen aktuellem und
/// gerundetem Innenwinkel am Pivot verschoben, damit der Innenwinkel (nicht
/// die Kantenrichtung) auf ganze Grad einrastet.
///
/// Länge: Die Startlänge wird auf das Längen-Raster gerundet.
pub fn begin(
    triangle: &Triangle,
    control: EdgeControl,
    cursor: DVec2,
    steps: &SnapSteps,
) -> Option<ActiveControl> {
    let roles = control.roles()?;
    let baseline = match control.kind {
        ControlKind::Angle => {
            let pivot = triangle.vertex(roles.pivot);
            let moving = triangle.vertex(roles.other);
            let third = triangle.vertex(roles.third);

            let start_edge_angle = bearing(moving - pivot);
            let start_mouse_angle = bearing(cursor - pivot);
            let interior = angle_between(moving - pivot, third - pivot)
                .abs()
                .to_degrees();
            let interior_diff = interior - snap_to_step(interior, steps.angle_degrees);

            DragBaseline::Angle {
                start_mouse_angle,
                snapped_start_edge_angle: start_edge_angle - interior_diff.to_radians(),
            }
        }
        ControlKind::Length => {
            let fixed = triangle.vertex(roles.other);
            let moving = triangle.vertex(roles.pivot);
            DragBaseline::Length {
                start_mouse_pos: cursor,
                snapped_start_length: snap_to_step(fixed.distance(moving), steps.length_units),
            }
        }
    };

    Some(ActiveControl { control, baseline })
}

/// Aktualisiert das Dreieck für die neue Cursor-Position.
///
/// Gibt `false` zurück, wenn der Frame nichts verändert hat (Kante der
/// Länge null, ungültiger Deskriptor).
pub fn update(
    triangle: &mut Triangle,
    active: &ActiveControl,
    cursor: DVec2,
    steps: &SnapSteps,
) -> bool {
    let Some(roles) = active.control.roles() else {
        return false;
    };

    match active.baseline {
        DragBaseline::Angle {
            start_mouse_angle,
            snapped_start_edge_angle,
        } => {
            let pivot = triangle.vertex(roles.pivot);
            let edge_length = pivot.distance(triangle.vertex(roles.other));
            if edge_length == 0.0 {
                return false;
            }

            let current_mouse_angle = bearing(cursor - pivot);
            let delta = snap_to_step(
                (current_mouse_angle - start_mouse_angle).to_degrees(),
                steps.angle_degrees,
            );
            let new_angle = snapped_start_edge_angle + delta.to_radians();
            triangle.set_vertex(
                roles.other,
                pivot + DVec2::from_angle(new_angle) * edge_length,
            );
            true
        }
        DragBaseline::Length {
            start_mouse_pos,
            snapped_start_length,
        } => {
            let fixed = triangle.vertex(roles.other);
            // Richtung jedes Mal aus den aktuellen Positionen
            let Some(dir) = unit_direction(fixed, triangle.vertex(roles.pivot)) else {
                return false;
            };

            let projected = (cursor - start_mouse_pos).dot(dir);
            let snapped_delta = snap_to_step(projected, steps.length_units);
            let new_length = (snapped_start_length + snapped_delta).max(MIN_EDGE_LENGTH);
            triangle.set_vertex(roles.pivot, fixed + dir * new_length);
            true
        }
    }
}
