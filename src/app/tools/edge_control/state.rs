//! Aktiver Drag eines Kanten-Bedienelements samt Ausgangswerten.

use crate::core::EdgeControl;
use glam::DVec2;

/// Beim Drücken festgehaltene Ausgangswerte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragBaseline {
    Angle {
        /// atan2(Cursor - Pivot) beim Drücken
        start_mouse_angle: f64,
        /// Kantenrichtung, bereits um die Innenwinkel-Rundung korrigiert (Radiant)
        snapped_start_edge_angle: f64,
    },
    Length {
        start_mouse_pos: DVec2,
        /// Startlänge auf das Längen-Raster gerundet
        snapped_start_length: f64,
    },
}

/// Das gerade gezogene Bedienelement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveControl {
    pub control: EdgeControl,
    pub(crate) baseline: DragBaseline,
}

impl ActiveControl {
    /// Deskriptor des aktiven Elements.
    pub fn control(&self) -> EdgeControl {
        self.control
    }
}
