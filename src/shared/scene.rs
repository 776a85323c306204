//! Szene-Snapshot als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie zeichnet.

use super::DisplayFlags;
use crate::core::{
    Constructions, ControlHandle, EdgeControl, EdgeLabel, Measurements, ScaledRatios,
    VertexLabel,
};
use glam::DVec2;
use serde::Serialize;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleScene {
    /// Eckpunkte A, B, C in Rastereinheiten
    pub vertices: [DVec2; 3],
    pub measurements: Measurements,
    /// Auf AB normierte Kennzahlen (`None` bei AB der Länge null)
    pub ratios: Option<ScaledRatios>,
    pub constructions: Constructions,
    /// Inkreis- zu Umkreisradius (`None` bei entartetem Dreieck)
    pub inradius_to_circumradius: Option<f64>,
    pub degenerate: bool,
    pub hovered_edge: Option<EdgeLabel>,
    pub active_control: Option<EdgeControl>,
    pub dragged_vertex: Option<VertexLabel>,
    /// Sichtbare Bedienelemente (gehoverte bzw. aktiv gezogene Kante)
    pub handles: Vec<ControlHandle>,
    pub display: DisplayFlags,
    pub input_fields: InputFieldValues,
    /// Offene Validierungsmeldung der Abstands-Eingabe
    pub validation_message: Option<String>,
}

impl TriangleScene {
    /// Gibt zurück, ob gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.active_control.is_some() || self.dragged_vertex.is_some()
    }
}

/// Texte der sechs Eingabefelder für die aktuelle Geometrie.
///
/// Winkel mit einer Nachkommastelle, Abstände in Zentimetern mit zwei.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFieldValues {
    pub angle_a: String,
    pub angle_b: String,
    pub angle_c: String,
    pub dist_ab: String,
    pub dist_bc: String,
    pub dist_ac: String,
}

impl InputFieldValues {
    /// Formatiert die Messwerte für die Eingabefelder.
    pub fn from_measurements(m: &Measurements, grid_units_per_cm: f64) -> Self {
        let cm = |edge| format!("{:.2}", m.length_cm(edge, grid_units_per_cm));
        Self {
            angle_a: format!("{:.1}", m.angle_a),
            angle_b: format!("{:.1}", m.angle_b),
            angle_c: format!("{:.1}", m.angle_c),
            dist_ab: cm(EdgeLabel::AB),
            dist_bc: cm(EdgeLabel::BC),
            dist_ac: cm(EdgeLabel::CA),
        }
    }
}
