//! Use-Cases für Zeiger-Eingaben: Kanten-Hover, Bedienelement- und Eckpunkt-Drag.

use crate::app::tools::edge_control::{self, nearest_edge};
use crate::app::tools::{vertex_drag, EdgeControl, Interaction};
use crate::app::AppState;
use crate::core::VertexLabel;
use glam::DVec2;

/// Bestimmt die gehoverte Kante neu.
///
/// Während eines Drags bleibt der Modus unverändert.
pub fn update_hover(state: &mut AppState, world_pos: DVec2) {
    if state.interaction.is_dragging() {
        return;
    }

    let hover_distance = state.options.edge_hover_distance();
    let next = match nearest_edge(&state.triangle, world_pos, hover_distance) {
        Some(edge) => Interaction::HoveringEdge(edge),
        None => Interaction::Idle,
    };
    if next != state.interaction {
        log::debug!("Hover: {:?} -> {:?}", state.interaction, next);
        state.interaction = next;
    }
}

/// Startet den Drag eines Bedienelements.
pub fn begin_control_drag(state: &mut AppState, control: EdgeControl, world_pos: DVec2) -> bool {
    let steps = state.snap_steps();
    match edge_control::drag::begin(&state.triangle, control, world_pos, &steps) {
        Some(active) => {
            log::debug!(
                "Bedienelement-Drag gestartet: {:?} {} @ {}",
                control.kind,
                control.edge.as_str(),
                control.endpoint.as_str()
            );
            state.interaction = Interaction::DraggingControl(active);
            true
        }
        None => false,
    }
}

/// Führt das aktive Bedienelement nach.
pub fn drag_control(state: &mut AppState, world_pos: DVec2) -> bool {
    let Interaction::DraggingControl(active) = state.interaction else {
        return false;
    };
    let steps = state.snap_steps();
    if !edge_control::drag::update(&mut state.triangle, &active, world_pos, &steps) {
        log::debug!("Bedienelement-Drag: Kante ohne Länge, Frame übersprungen");
    }
    true
}

/// Startet den Eckpunkt-Drag. Die Hover-Kante wird dabei verworfen.
pub fn begin_vertex_drag(state: &mut AppState, vertex: VertexLabel) {
    log::debug!("Eckpunkt-Drag gestartet: {}", vertex.as_str());
    state.interaction = Interaction::DraggingVertex(vertex);
}

/// Setzt den gezogenen Eckpunkt auf die gerundete Cursor-Position.
pub fn drag_vertex(state: &mut AppState, world_pos: DVec2) -> bool {
    let Interaction::DraggingVertex(vertex) = state.interaction else {
        return false;
    };
    vertex_drag::drag_to(&mut state.triangle, vertex, world_pos);
    true
}

/// Beendet jeden laufenden Drag; die letzte Position bleibt erhalten.
pub fn end_drag(state: &mut AppState) -> bool {
    if !state.interaction.is_dragging() {
        return false;
    }
    log::debug!("Drag beendet: {:?}", state.interaction);
    state.interaction = Interaction::Idle;
    true
}
