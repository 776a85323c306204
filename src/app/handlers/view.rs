//! Handler für Legende und Start-Dreieck.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ConstructionKind;

/// Schaltet eine Konstruktion um.
pub fn toggle_construction(state: &mut AppState, kind: ConstructionKind) -> bool {
    use_cases::view::toggle_construction(state, kind);
    true
}

/// Stellt das Start-Dreieck wieder her.
pub fn reset_triangle(state: &mut AppState) -> bool {
    use_cases::view::reset_triangle(state);
    true
}
