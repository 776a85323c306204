//! Handler für Zeiger-Eingaben (Hover, Drags).

use crate::app::tools::EdgeControl;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::VertexLabel;
use glam::DVec2;

/// Aktualisiert die Hover-Kante. Verbraucht die Eingabe nicht.
pub fn update_hover(state: &mut AppState, world_pos: DVec2) -> bool {
    use_cases::pointer::update_hover(state, world_pos);
    false
}

/// Startet den Drag eines Kanten-Bedienelements.
pub fn begin_control_drag(state: &mut AppState, control: EdgeControl, world_pos: DVec2) -> bool {
    use_cases::pointer::begin_control_drag(state, control, world_pos)
}

/// Führt das aktive Bedienelement nach.
pub fn drag_control(state: &mut AppState, world_pos: DVec2) -> bool {
    use_cases::pointer::drag_control(state, world_pos)
}

/// Startet einen Eckpunkt-Drag.
pub fn begin_vertex_drag(state: &mut AppState, vertex: VertexLabel) -> bool {
    use_cases::pointer::begin_vertex_drag(state, vertex);
    true
}

/// Führt den gezogenen Eckpunkt nach.
pub fn drag_vertex(state: &mut AppState, world_pos: DVec2) -> bool {
    use_cases::pointer::drag_vertex(state, world_pos)
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) -> bool {
    use_cases::pointer::end_drag(state)
}
