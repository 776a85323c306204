//! Aktueller Interaktionsmodus des Zeigers.

use super::edge_control::{ActiveControl, EdgeControl};
use crate::core::{EdgeLabel, VertexLabel};

/// Genau ein Modus ist zu jedem Zeitpunkt aktiv: Eckpunkt-Drag,
/// Bedienelement-Drag und Kanten-Hover schließen sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Cursor nahe einer Kante, deren Bedienelemente sichtbar sind
    HoveringEdge(EdgeLabel),
    /// Eckpunkt folgt dem Cursor (auf das Raster gerundet)
    DraggingVertex(VertexLabel),
    /// Kanten-Bedienelement wird gezogen
    DraggingControl(ActiveControl),
}

impl Interaction {
    /// Gehoverte Kante, nur im Hover-Modus gesetzt.
    pub fn hovered_edge(&self) -> Option<EdgeLabel> {
        match self {
            Interaction::HoveringEdge(edge) => Some(*edge),
            _ => None,
        }
    }

    /// Deskriptor des gezogenen Bedienelements.
    pub fn active_control(&self) -> Option<EdgeControl> {
        match self {
            Interaction::DraggingControl(active) => Some(active.control),
            _ => None,
        }
    }

    /// Gezogener Eckpunkt.
    pub fn dragged_vertex(&self) -> Option<VertexLabel> {
        match self {
            Interaction::DraggingVertex(vertex) => Some(*vertex),
            _ => None,
        }
    }

    /// Läuft gerade ein Drag (Eckpunkt oder Bedienelement)?
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Interaction::DraggingVertex(_) | Interaction::DraggingControl(_)
        )
    }
}
