//! Mapping von UI-Intents auf mutierende App-Commands.

use super::tools::edge_control::hit_test;
use super::tools::vertex_drag::pick_vertex;
use super::tools::Interaction;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Eine leere Sequenz bedeutet: Eingabe nicht verbraucht (z.B. Klick ins
/// Leere, den der Aufrufer zum Verschieben der Ansicht nutzen kann).
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => map_pointer_pressed(state, world_pos),
        AppIntent::PointerMoved { world_pos } => match state.interaction {
            Interaction::DraggingControl(_) => vec![AppCommand::DragControl { world_pos }],
            Interaction::DraggingVertex(_) => vec![AppCommand::DragVertex { world_pos }],
            Interaction::Idle | Interaction::HoveringEdge(_) => {
                vec![AppCommand::UpdateHover { world_pos }]
            }
        },
        AppIntent::PointerReleased => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndPointerDrag]
            } else {
                vec![]
            }
        }
        AppIntent::AngleInputChanged { vertex, degrees } => {
            vec![AppCommand::ApplyAngle { vertex, degrees }]
        }
        AppIntent::DistanceInputChanged { edge, input } => {
            vec![AppCommand::ApplyDistance { edge, input }]
        }
        AppIntent::DistancesSubmitted { ab, bc, ac } => {
            vec![AppCommand::ApplyDistances { ab, bc, ac }]
        }
        AppIntent::ValidationMessageDismissed => vec![AppCommand::DismissValidationMessage],
        AppIntent::ConstructionToggled { kind } => vec![AppCommand::ToggleConstruction { kind }],
        AppIntent::ResetTriangleRequested => vec![AppCommand::ResetTriangle],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsResetRequested => vec![AppCommand::ResetOptions],
    }
}

/// Bedienelemente der gehoverten Kante haben Vorrang vor Eckpunkten.
fn map_pointer_pressed(state: &AppState, world_pos: glam::DVec2) -> Vec<AppCommand> {
    if state.interaction.is_dragging() {
        return vec![];
    }

    if let Some(edge) = state.interaction.hovered_edge() {
        let layout = state.handle_layout();
        if let Some(control) = hit_test(&state.triangle, edge, world_pos, &layout) {
            return vec![AppCommand::BeginControlDrag { control, world_pos }];
        }
    }

    let pick_radius = state.options.vertex_pick_radius();
    match pick_vertex(&state.triangle, world_pos, pick_radius) {
        Some(vertex) => vec![AppCommand::BeginVertexDrag { vertex }],
        None => vec![],
    }
}
