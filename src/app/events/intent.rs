use crate::core::{EdgeLabel, VertexLabel};
use crate::shared::{ConstructionKind, EditorOptions};
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger gedrückt (Weltkoordinaten)
    PointerPressed { world_pos: DVec2 },
    /// Zeiger bewegt, gedrückt oder nicht
    PointerMoved { world_pos: DVec2 },
    /// Zeiger losgelassen
    PointerReleased,
    /// Winkelfeld geändert (Grad)
    AngleInputChanged { vertex: VertexLabel, degrees: f64 },
    /// Einzelnes Abstandsfeld geändert (Text in cm)
    DistanceInputChanged { edge: EdgeLabel, input: String },
    /// Alle drei Abstände auf einmal übernehmen (Text in cm)
    DistancesSubmitted { ab: String, bc: String, ac: String },
    /// Validierungsmeldung geschlossen
    ValidationMessageDismissed,
    /// Legenden-Eintrag angeklickt
    ConstructionToggled { kind: ConstructionKind },
    /// Start-Dreieck wiederherstellen
    ResetTriangleRequested,
    /// Optionen wurden geändert
    OptionsApplied { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
}
