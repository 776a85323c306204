use crate::core::VertexLabel;

/// Zustand der Text-Eingabe-Rekonstruktion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Gesetzt, solange eine Rekonstruktion läuft (Reentrancy-Schutz)
    pub applying: bool,
    /// Zuletzt vom User geänderter Winkel
    pub last_edited_angle: Option<VertexLabel>,
}
