//! Handler für die Winkel- und Abstands-Eingabefelder.
//!
//! Abgelehnte Eingaben sind kein Fehler des Controllers: die Eingabe gilt
//! als verarbeitet, das Dreieck bleibt unverändert. Nur blockierte Eingaben
//! (laufende Rekonstruktion, aktiver Drag) gelten als nicht verbraucht.

use crate::app::use_cases;
use crate::app::use_cases::constraint::ConstraintError;
use crate::app::AppState;
use crate::core::{EdgeLabel, VertexLabel};

/// Verbraucht, sofern der Use-Case die Eingabe überhaupt geprüft hat.
fn consumed<T>(result: Result<T, ConstraintError>) -> bool {
    !matches!(result, Err(ref e) if e.is_blocked())
}

/// Übernimmt einen Winkel.
pub fn apply_angle(state: &mut AppState, vertex: VertexLabel, degrees: f64) -> bool {
    consumed(use_cases::constraint::apply_angle(state, vertex, degrees))
}

/// Übernimmt einen einzelnen Abstand.
pub fn apply_distance(state: &mut AppState, edge: EdgeLabel, input: &str) -> bool {
    consumed(use_cases::constraint::apply_distance(state, edge, input))
}

/// Übernimmt alle drei Abstände.
pub fn apply_distances(state: &mut AppState, ab: &str, bc: &str, ac: &str) -> bool {
    consumed(use_cases::constraint::apply_distances(state, ab, bc, ac))
}
