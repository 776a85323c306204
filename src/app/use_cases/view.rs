//! Use-Cases für Legende und Start-Dreieck.

use crate::app::tools::Interaction;
use crate::app::AppState;
use crate::core::Triangle;
use crate::shared::ConstructionKind;

/// Schaltet eine Konstruktion ein oder aus.
pub fn toggle_construction(state: &mut AppState, kind: ConstructionKind) {
    let shown = state.view.display.toggle(kind);
    log::debug!("{:?} {}", kind, if shown { "eingeblendet" } else { "ausgeblendet" });
}

/// Stellt das Start-Dreieck aus den Optionen wieder her.
///
/// Laufende Interaktion, „zuletzt geänderter Winkel" und Meldungen werden verworfen.
pub fn reset_triangle(state: &mut AppState) {
    state.triangle = Triangle::from_coords(state.options.initial_vertices);
    state.interaction = Interaction::Idle;
    state.constraint.last_edited_angle = None;
    state.ui.validation_message = None;
    log::info!("Dreieck auf Startposition zurückgesetzt");
}
