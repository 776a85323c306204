//! Positionen und Trefferprüfung der vier Bedienelemente einer Kante,
//! sowie die Hover-Erkennung der nächstgelegenen Kante.

use crate::core::geometry::distance_to_segment;
use crate::core::{ControlHandle, ControlKind, EdgeControl, EdgeLabel, Triangle};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Abstände der Bedienelemente in Welteinheiten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLayout {
    /// Abstand Winkel- ↔ Längen-Element (S)
    pub spacing: f64,
    /// Abstand der Winkel-Elemente zur Kantenmitte (G)
    pub gap: f64,
    /// Gezeichnete Icon-Größe
    pub icon_size: f64,
    /// Trefferradius
    pub detect_radius: f64,
}

impl HandleLayout {
    /// Rechnet die Pixel-Werte der Optionen in Welteinheiten um.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            spacing: options.px_to_world(options.control_spacing_px),
            gap: options.px_to_world(options.control_gap_px),
            icon_size: options.px_to_world(options.control_icon_size_px),
            detect_radius: options.px_to_world(options.control_detect_radius_px),
        }
    }
}

impl Default for HandleLayout {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Die vier Bedienelemente einer Kante in Layout-Reihenfolge:
/// Länge@P1, Winkel@P1, Winkel@P2, Länge@P2.
///
/// `None` bei einer Kante der Länge null (keine Richtung).
pub fn handle_positions(
    triangle: &Triangle,
    edge: EdgeLabel,
    layout: &HandleLayout,
) -> Option<[ControlHandle; 4]> {
    let geometry = triangle.edge(edge);
    let dir = geometry.direction()?;
    let mid = geometry.midpoint();
    let (p1, p2) = edge.endpoints();
    let outer = layout.spacing + layout.gap;

    let at = |kind, endpoint, offset: f64| ControlHandle {
        control: EdgeControl::new(edge, kind, endpoint),
        position: mid + dir * offset,
    };

    Some([
        at(ControlKind::Length, p1, -outer),
        at(ControlKind::Angle, p1, -layout.gap),
        at(ControlKind::Angle, p2, layout.gap),
        at(ControlKind::Length, p2, outer),
    ])
}

/// Reihenfolge der Trefferprüfung (Indizes in `handle_positions`).
const HIT_TEST_ORDER: [usize; 4] = [1, 0, 2, 3];

/// Welches Bedienelement der Kante liegt unter dem Cursor?
///
/// Geprüft wird Winkel@P1, Länge@P1, Winkel@P2, Länge@P2; der erste Treffer gewinnt.
pub fn hit_test(
    triangle: &Triangle,
    edge: EdgeLabel,
    cursor: DVec2,
    layout: &HandleLayout,
) -> Option<EdgeControl> {
    let handles = handle_positions(triangle, edge, layout)?;
    HIT_TEST_ORDER
        .iter()
        .map(|&i| handles[i])
        .find(|h| h.contains(cursor, layout.detect_radius))
        .map(|h| h.control)
}

/// Nächstgelegene Kante unterhalb des Hover-Abstands.
///
/// Abstand zum Segment (nicht zur Geraden). Bei Gleichstand gewinnt die
/// erste Kante in der Reihenfolge AB, BC, CA.
pub fn nearest_edge(triangle: &Triangle, cursor: DVec2, hover_distance: f64) -> Option<EdgeLabel> {
    let mut best: Option<(EdgeLabel, f64)> = None;
    for edge in EdgeLabel::ALL {
        let geometry = triangle.edge(edge);
        let dist = distance_to_segment(cursor, geometry.start, geometry.end);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((edge, dist)),
        }
    }

    best.filter(|(_, dist)| *dist < hover_distance)
        .map(|(edge, _)| edge)
}
