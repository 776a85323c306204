use crate::core::{EdgeControl, EdgeLabel, VertexLabel};
use crate::shared::{ConstructionKind, EditorOptions};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Zeiger ===
    /// Hover-Kante für die Cursor-Position neu bestimmen
    UpdateHover { world_pos: DVec2 },
    /// Drag eines Kanten-Bedienelements starten
    BeginControlDrag {
        control: EdgeControl,
        world_pos: DVec2,
    },
    /// Aktives Bedienelement nachführen
    DragControl { world_pos: DVec2 },
    /// Eckpunkt-Drag starten
    BeginVertexDrag { vertex: VertexLabel },
    /// Gezogenen Eckpunkt nachführen
    DragVertex { world_pos: DVec2 },
    /// Laufenden Drag beenden (ohne Rücksetzen)
    EndPointerDrag,

    // === Eingabefelder ===
    /// Winkel setzen und Dreieck rekonstruieren
    ApplyAngle { vertex: VertexLabel, degrees: f64 },
    /// Einen Abstand setzen, die beiden anderen bleiben
    ApplyDistance { edge: EdgeLabel, input: String },
    /// Alle drei Abstände setzen
    ApplyDistances { ab: String, bc: String, ac: String },
    /// Validierungsmeldung entfernen
    DismissValidationMessage,

    // === Ansicht ===
    /// Sichtbarkeit einer Konstruktion umschalten
    ToggleConstruction { kind: ConstructionKind },
    /// Start-Dreieck wiederherstellen
    ResetTriangle,

    // === Optionen ===
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
