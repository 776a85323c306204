//! Kanten-Bedienelemente: Drehen einer Kante um einen Endpunkt oder
//! Verlängern/Verkürzen von einem Endpunkt aus.
//!
//! Pro gehoverter Kante gibt es vier Elemente entlang der Kantenlinie
//! (Länge@P1, Winkel@P1, Winkel@P2, Länge@P2). Die Rollen-Tabelle aus
//! `core::triangle` legt fest, welcher Eckpunkt fest bleibt und welcher sich bewegt.
//!
//! Aufgeteilt in:
//! - `state`: aktiver Drag mit Ausgangswerten
//! - `handles`: Positionen, Trefferprüfung, Hover-Kante
//! - `drag`: begin/update mit Winkel- und Längen-Snapping

pub mod drag;
pub mod handles;
mod state;

pub use crate::core::{ControlHandle, ControlKind, EdgeControl};
pub use drag::SnapSteps;
pub use handles::{handle_positions, hit_test, nearest_edge, HandleLayout};
pub use state::ActiveControl;

#[cfg(test)]
mod tests;
