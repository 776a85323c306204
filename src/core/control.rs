//! Deskriptoren der Kanten-Bedienelemente (Drehen/Verlängern).

use super::triangle::{edge_roles, EdgeLabel, EdgeRoles, VertexLabel};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art des Bedienelements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Kante um den Endpunkt drehen
    Angle,
    /// Kante vom anderen Endpunkt aus verlängern/verkürzen
    Length,
}

/// Welches der vier Bedienelemente einer Kante gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeControl {
    pub edge: EdgeLabel,
    pub kind: ControlKind,
    /// Endpunkt, an dem das Element sitzt
    pub endpoint: VertexLabel,
}

impl EdgeControl {
    /// Erstellt einen Deskriptor.
    pub fn new(edge: EdgeLabel, kind: ControlKind, endpoint: VertexLabel) -> Self {
        Self {
            edge,
            kind,
            endpoint,
        }
    }

    /// Rollen (pivot/other/third) laut Rollen-Tabelle.
    pub fn roles(&self) -> Option<EdgeRoles> {
        edge_roles(self.edge, self.endpoint)
    }

    /// Der Eckpunkt, der sich während des Drags bewegt.
    ///
    /// Winkel: der andere Endpunkt. Länge: der Endpunkt selbst.
    pub fn moving_vertex(&self) -> Option<VertexLabel> {
        let roles = self.roles()?;
        Some(match self.kind {
            ControlKind::Angle => roles.other,
            ControlKind::Length => roles.pivot,
        })
    }
}

/// Ein Bedienelement mit Weltposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlHandle {
    pub control: EdgeControl,
    pub position: DVec2,
}

impl ControlHandle {
    /// Liegt `cursor` innerhalb des Trefferradius (strikt)?
    #[inline]
    pub fn contains(&self, cursor: DVec2, detect_radius: f64) -> bool {
        self.position.distance(cursor) < detect_radius
    }
}
