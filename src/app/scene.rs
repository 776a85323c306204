//! Builder für Szene-Snapshots aus dem AppState.

use crate::app::tools::Interaction;
use crate::app::AppState;
use crate::shared::{InputFieldValues, TriangleScene};

/// Baut einen TriangleScene-Snapshot aus dem aktuellen AppState.
pub fn build(state: &AppState) -> TriangleScene {
    let measurements = state.measurements();
    let constructions = state.constructions();

    // Bedienelemente der gehoverten Kante, während eines Drags die der gezogenen
    let handle_edge = match state.interaction {
        Interaction::HoveringEdge(edge) => Some(edge),
        Interaction::DraggingControl(active) => Some(active.control.edge),
        Interaction::Idle | Interaction::DraggingVertex(_) => None,
    };
    let handles = handle_edge
        .and_then(|edge| state.handles_for(edge))
        .map(|handles| handles.to_vec())
        .unwrap_or_default();

    TriangleScene {
        vertices: state.triangle.vertices(),
        measurements,
        ratios: measurements.scaled_ratios(),
        constructions,
        inradius_to_circumradius: constructions.inradius_to_circumradius(),
        degenerate: state.is_degenerate(),
        hovered_edge: state.interaction.hovered_edge(),
        active_control: state.interaction.active_control(),
        dragged_vertex: state.interaction.dragged_vertex(),
        handles,
        display: state.view.display,
        input_fields: InputFieldValues::from_measurements(
            &measurements,
            state.options.grid_units_per_cm,
        ),
        validation_message: state.ui.validation_message.clone(),
    }
}
