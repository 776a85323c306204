//! Abgeleitete Konstruktionen: Schwerpunkt, Höhenschnittpunkt, Inkreis, Umkreis.
//!
//! Jede Konstruktion schneidet zwei Hilfsgeraden per `line_intersection`.
//! Bei (numerisch) degeneriertem Dreieck entfällt die Konstruktion für diesen
//! Frame (`None`), es werden nie NaN-Koordinaten gemeldet.

use super::geometry::{
    bisector_direction, line_intersection, midpoint, point_to_line_distance, unit_direction,
};
use super::triangle::{EdgeLabel, Triangle, VertexLabel};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kreis mit Mittelpunkt und Radius (Rastereinheiten)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

/// Schwerpunkt: Schnitt der Seitenhalbierenden aus A und B.
pub fn centroid(a: DVec2, b: DVec2, c: DVec2) -> Option<DVec2> {
    line_intersection(a, midpoint(b, c), b, midpoint(c, a))
}

/// Zwei Punkte auf der Höhe durch `vertex`, senkrecht zur Geraden `p`–`q`.
fn altitude_line(vertex: DVec2, p: DVec2, q: DVec2) -> Option<(DVec2, DVec2)> {
    let normal = unit_direction(p, q)?.perp();
    Some((vertex - normal, vertex + normal))
}

/// Höhenschnittpunkt: Schnitt der Höhen aus A und B.
pub fn orthocenter(a: DVec2, b: DVec2, c: DVec2) -> Option<DVec2> {
    let (a1, a2) = altitude_line(a, b, c)?;
    let (b1, b2) = altitude_line(b, a, c)?;
    line_intersection(a1, a2, b1, b2)
}

/// Fußpunkt der Höhe aus `vertex` auf der Geraden `p`–`q`.
pub fn altitude_foot(vertex: DVec2, p: DVec2, q: DVec2) -> Option<DVec2> {
    let (h1, h2) = altitude_line(vertex, p, q)?;
    line_intersection(h1, h2, p, q)
}

/// Inkreis: Schnitt der Winkelhalbierenden aus A und B, Radius = Abstand zu AB.
pub fn incircle(a: DVec2, b: DVec2, c: DVec2) -> Option<Circle> {
    let bis_a = bisector_direction(a, b, c)?;
    let bis_b = bisector_direction(b, a, c)?;
    let center = line_intersection(a, a + bis_a, b, b + bis_b)?;
    let radius = point_to_line_distance(center, a, b)?;
    radius.is_finite().then_some(Circle { center, radius })
}

/// Umkreis: Schnitt der Mittelsenkrechten von AB und BC, Radius = Abstand zu A.
pub fn circumcircle(a: DVec2, b: DVec2, c: DVec2) -> Option<Circle> {
    let m_ab = midpoint(a, b);
    let m_bc = midpoint(b, c);
    let center = line_intersection(m_ab, m_ab + (b - a).perp(), m_bc, m_bc + (c - b).perp())?;
    let radius = center.distance(a);
    radius.is_finite().then_some(Circle { center, radius })
}

/// Alle abgeleiteten Konstruktionen eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constructions {
    /// Kantenmittelpunkte in Reihenfolge AB, BC, CA
    pub edge_midpoints: [DVec2; 3],
    /// Höhenfußpunkte in Reihenfolge A, B, C (jeweils auf der Gegenseite)
    pub altitude_feet: [Option<DVec2>; 3],
    pub centroid: Option<DVec2>,
    pub orthocenter: Option<DVec2>,
    pub incircle: Option<Circle>,
    pub circumcircle: Option<Circle>,
}

impl Constructions {
    /// Berechnet alle Konstruktionen.
    ///
    /// Liegt die Fläche unter `degenerate_area_epsilon`, bleiben alle Punkte
    /// und Kreise leer; nur die Kantenmittelpunkte sind immer definiert.
    pub fn compute(triangle: &Triangle, degenerate_area_epsilon: f64) -> Self {
        let [a, b, c] = triangle.vertices();
        let edge_midpoints = EdgeLabel::ALL.map(|e| triangle.edge(e).midpoint());

        if triangle.is_degenerate(degenerate_area_epsilon) {
            return Self {
                edge_midpoints,
                altitude_feet: [None; 3],
                centroid: None,
                orthocenter: None,
                incircle: None,
                circumcircle: None,
            };
        }

        let altitude_feet = VertexLabel::ALL.map(|v| {
            let edge = triangle.edge(EdgeLabel::opposite_of(v));
            altitude_foot(triangle.vertex(v), edge.start, edge.end)
        });

        Self {
            edge_midpoints,
            altitude_feet,
            centroid: centroid(a, b, c),
            orthocenter: orthocenter(a, b, c),
            incircle: incircle(a, b, c),
            circumcircle: circumcircle(a, b, c),
        }
    }

    /// Alle Punkte/Kreise fehlen (degeneriertes Dreieck).
    pub fn is_empty(&self) -> bool {
        self.centroid.is_none()
            && self.orthocenter.is_none()
            && self.incircle.is_none()
            && self.circumcircle.is_none()
    }

    /// Verhältnis Inkreis- zu Umkreisradius, `None` wenn einer fehlt.
    pub fn inradius_to_circumradius(&self) -> Option<f64> {
        let r = self.incircle?.radius;
        let big_r = self.circumcircle?.radius;
        (big_r > 0.0).then(|| r / big_r)
    }
}
