//! Dreieck-Datenmodell: drei benannte Eckpunkte, abgeleitete Kanten und die
//! Rollen-Tabelle für Kanten-Bedienelemente.

use super::geometry::{midpoint, triangle_area_signed, unit_direction};
use super::measurement::Measurements;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bezeichner eines Eckpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexLabel {
    A,
    B,
    C,
}

impl VertexLabel {
    /// Alle Eckpunkte in fester Reihenfolge.
    pub const ALL: [VertexLabel; 3] = [VertexLabel::A, VertexLabel::B, VertexLabel::C];

    /// Index in das Eckpunkt-Array des Dreiecks.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            VertexLabel::A => 0,
            VertexLabel::B => 1,
            VertexLabel::C => 2,
        }
    }

    /// Anzeigename ("A", "B", "C").
    pub fn as_str(self) -> &'static str {
        match self {
            VertexLabel::A => "A",
            VertexLabel::B => "B",
            VertexLabel::C => "C",
        }
    }

    /// Die beiden übrigen Eckpunkte in zyklischer Reihenfolge.
    pub fn others(self) -> (VertexLabel, VertexLabel) {
        match self {
            VertexLabel::A => (VertexLabel::B, VertexLabel::C),
            VertexLabel::B => (VertexLabel::C, VertexLabel::A),
            VertexLabel::C => (VertexLabel::A, VertexLabel::B),
        }
    }
}

/// Bezeichner einer Kante (ungeordnetes Eckpunkt-Paar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeLabel {
    AB,
    BC,
    CA,
}

impl EdgeLabel {
    /// Alle Kanten in Auswertungsreihenfolge (bestimmt Tie-Break beim Hover).
    pub const ALL: [EdgeLabel; 3] = [EdgeLabel::AB, EdgeLabel::BC, EdgeLabel::CA];

    /// Endpunkte (P1, P2) in Layout-Reihenfolge der Bedienelemente.
    pub fn endpoints(self) -> (VertexLabel, VertexLabel) {
        match self {
            EdgeLabel::AB => (VertexLabel::A, VertexLabel::B),
            EdgeLabel::BC => (VertexLabel::B, VertexLabel::C),
            EdgeLabel::CA => (VertexLabel::C, VertexLabel::A),
        }
    }

    /// Der Eckpunkt, der nicht auf dieser Kante liegt.
    pub fn opposite(self) -> VertexLabel {
        match self {
            EdgeLabel::AB => VertexLabel::C,
            EdgeLabel::BC => VertexLabel::A,
            EdgeLabel::CA => VertexLabel::B,
        }
    }

    /// Kante gegenüber einem Eckpunkt.
    pub fn opposite_of(vertex: VertexLabel) -> EdgeLabel {
        match vertex {
            VertexLabel::A => EdgeLabel::BC,
            VertexLabel::B => EdgeLabel::CA,
            VertexLabel::C => EdgeLabel::AB,
        }
    }

    /// Liegt `vertex` auf dieser Kante?
    pub fn contains(self, vertex: VertexLabel) -> bool {
        self.opposite() != vertex
    }

    /// Der andere Endpunkt, `None` wenn `vertex` nicht auf der Kante liegt.
    pub fn other_endpoint(self, vertex: VertexLabel) -> Option<VertexLabel> {
        let (p1, p2) = self.endpoints();
        if vertex == p1 {
            Some(p2)
        } else if vertex == p2 {
            Some(p1)
        } else {
            None
        }
    }

    /// Kante aus zwei Eckpunkten (Reihenfolge egal).
    pub fn from_vertices(a: VertexLabel, b: VertexLabel) -> Option<EdgeLabel> {
        EdgeLabel::ALL
            .into_iter()
            .find(|edge| a != b && edge.contains(a) && edge.contains(b))
    }

    /// Anzeigename ("AB", "BC", "CA").
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeLabel::AB => "AB",
            EdgeLabel::BC => "BC",
            EdgeLabel::CA => "CA",
        }
    }
}

/// Rollen der drei Eckpunkte, wenn ein Bedienelement am Endpunkt `pivot` sitzt.
///
/// Winkel-Drag: `pivot` bleibt fest, `other` dreht sich.
/// Längen-Drag: `other` bleibt fest, `pivot` wird verschoben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRoles {
    /// Eckpunkt, an dem das Bedienelement sitzt
    pub pivot: VertexLabel,
    /// Anderer Endpunkt der Kante
    pub other: VertexLabel,
    /// Eckpunkt abseits der Kante
    pub third: VertexLabel,
}

const fn roles(pivot: VertexLabel, other: VertexLabel, third: VertexLabel) -> EdgeRoles {
    EdgeRoles {
        pivot,
        other,
        third,
    }
}

/// (Kante, Endpunkt) → Rollen. Einzige Stelle, an der diese Zuordnung lebt.
const EDGE_ROLE_TABLE: [(EdgeLabel, VertexLabel, EdgeRoles); 6] = {
    use VertexLabel::{A, B, C};
    [
        (EdgeLabel::AB, A, roles(A, B, C)),
        (EdgeLabel::AB, B, roles(B, A, C)),
        (EdgeLabel::BC, B, roles(B, C, A)),
        (EdgeLabel::BC, C, roles(C, B, A)),
        (EdgeLabel::CA, C, roles(C, A, B)),
        (EdgeLabel::CA, A, roles(A, C, B)),
    ]
};

/// Schlägt die Rollen für ein Bedienelement nach.
///
/// `None`, wenn `endpoint` nicht auf `edge` liegt.
pub fn edge_roles(edge: EdgeLabel, endpoint: VertexLabel) -> Option<EdgeRoles> {
    EDGE_ROLE_TABLE
        .iter()
        .find(|(e, v, _)| *e == edge && *v == endpoint)
        .map(|(_, _, r)| *r)
}

/// Momentaufnahme einer Kante, bei jeder Abfrage neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    /// Position von P1
    pub start: DVec2,
    /// Position von P2
    pub end: DVec2,
}

impl EdgeGeometry {
    /// Länge der Kante in Rastereinheiten.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Mittelpunkt der Kante.
    pub fn midpoint(&self) -> DVec2 {
        midpoint(self.start, self.end)
    }

    /// Einheitsrichtung P1 → P2, `None` bei Kante der Länge null.
    pub fn direction(&self) -> Option<DVec2> {
        unit_direction(self.start, self.end)
    }
}

/// Das Dreieck: genau drei Eckpunkte in Rasterkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    vertices: [DVec2; 3],
}

impl Triangle {
    /// Erstellt ein Dreieck aus drei Eckpunkten.
    pub fn new(a: DVec2, b: DVec2, c: DVec2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Erstellt ein Dreieck aus Koordinaten-Arrays (Format der Optionen-Datei).
    pub fn from_coords(coords: [[f64; 2]; 3]) -> Self {
        Self::new(
            DVec2::from(coords[0]),
            DVec2::from(coords[1]),
            DVec2::from(coords[2]),
        )
    }

    /// Position eines Eckpunkts.
    #[inline]
    pub fn vertex(&self, label: VertexLabel) -> DVec2 {
        self.vertices[label.index()]
    }

    /// Setzt die Position eines Eckpunkts.
    #[inline]
    pub fn set_vertex(&mut self, label: VertexLabel, position: DVec2) {
        self.vertices[label.index()] = position;
    }

    /// Alle drei Eckpunkte (A, B, C).
    pub fn vertices(&self) -> [DVec2; 3] {
        self.vertices
    }

    /// Geometrie einer Kante (P1/P2 gemäß `EdgeLabel::endpoints`).
    pub fn edge(&self, edge: EdgeLabel) -> EdgeGeometry {
        let (p1, p2) = edge.endpoints();
        EdgeGeometry {
            start: self.vertex(p1),
            end: self.vertex(p2),
        }
    }

    /// Vorzeichenbehaftete Fläche (Shoelace). Vorzeichen = Umlaufsinn.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        triangle_area_signed(a, b, c)
    }

    /// Betrag der Fläche in Rastereinheiten².
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Fläche unterhalb von `epsilon` oder nicht endliche Koordinaten.
    ///
    /// Ein degeneriertes Dreieck ist ein erwarteter Übergangszustand, kein Fehler.
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        !self.vertices.iter().all(|v| v.is_finite()) || self.area() < epsilon
    }

    /// Berechnet alle Messwerte neu.
    pub fn measure(&self) -> Measurements {
        Measurements::of(self)
    }
}
