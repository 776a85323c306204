//! Zeiger-Werkzeuge: Kanten-Bedienelemente, Eckpunkt-Drag und der
//! gemeinsame Interaktionsmodus.
//!
//! Die Werkzeuge arbeiten als reine Funktionen auf `Triangle`; den Modus
//! (`Interaction`) hält der `AppState`.

/// Kanten-Bedienelemente (Drehen/Verlängern mit Snapping).
pub mod edge_control;
/// Interaktionsmodus (Idle, Hover, Drag).
mod interaction;
/// Eckpunkt-Drag mit Raster-Snapping.
pub mod vertex_drag;

pub use edge_control::{ActiveControl, ControlHandle, ControlKind, EdgeControl, HandleLayout};
pub use interaction::Interaction;
