//! Messwerte des Dreiecks: Innenwinkel, Seitenlängen, Fläche.
//!
//! Reine Funktion der drei Eckpunkte, pro Frame neu berechnet.

use super::geometry::{angle_between, triangle_area_signed};
use super::triangle::{EdgeLabel, Triangle, VertexLabel};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Innenwinkel am Eckpunkt `vertex` zwischen den Strahlen zu `other1` und `other2`, in Grad.
///
/// Über den Winkel zwischen Vektoren berechnet, nicht über Arkus-Funktionen
/// auf Seitenlängen.
pub fn angle_at(vertex: DVec2, other1: DVec2, other2: DVec2) -> f64 {
    angle_between(other1 - vertex, other2 - vertex)
        .abs()
        .to_degrees()
}

/// Euklidischer Abstand zweier Punkte.
#[inline]
pub fn side_length(p: DVec2, q: DVec2) -> f64 {
    p.distance(q)
}

/// Betrag der Dreiecksfläche (Shoelace).
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    triangle_area_signed(a, b, c).abs()
}

/// Messwert-Snapshot: drei Innenwinkel (Grad), drei Seitenlängen (Rastereinheiten), Fläche.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
    pub len_ab: f64,
    pub len_bc: f64,
    pub len_ca: f64,
    pub area: f64,
}

impl Measurements {
    /// Misst ein Dreieck.
    pub fn of(triangle: &Triangle) -> Self {
        let [a, b, c] = triangle.vertices();
        Self {
            angle_a: angle_at(a, b, c),
            angle_b: angle_at(b, c, a),
            angle_c: angle_at(c, a, b),
            len_ab: side_length(a, b),
            len_bc: side_length(b, c),
            len_ca: side_length(c, a),
            area: triangle_area(a, b, c),
        }
    }

    /// Innenwinkel an einem Eckpunkt in Grad.
    pub fn angle(&self, vertex: VertexLabel) -> f64 {
        match vertex {
            VertexLabel::A => self.angle_a,
            VertexLabel::B => self.angle_b,
            VertexLabel::C => self.angle_c,
        }
    }

    /// Seitenlänge in Rastereinheiten.
    pub fn length(&self, edge: EdgeLabel) -> f64 {
        match edge {
            EdgeLabel::AB => self.len_ab,
            EdgeLabel::BC => self.len_bc,
            EdgeLabel::CA => self.len_ca,
        }
    }

    /// Seitenlänge in Zentimetern.
    pub fn length_cm(&self, edge: EdgeLabel, grid_units_per_cm: f64) -> f64 {
        self.length(edge) / grid_units_per_cm
    }

    /// Alle Winkel, Längen und die Fläche sind endlich.
    pub fn is_finite(&self) -> bool {
        [
            self.angle_a,
            self.angle_b,
            self.angle_c,
            self.len_ab,
            self.len_bc,
            self.len_ca,
            self.area,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Summe der Innenwinkel (180° für jedes gültige Dreieck).
    pub fn angle_sum(&self) -> f64 {
        self.angle_a + self.angle_b + self.angle_c
    }

    /// Auf AB = 1 normierte Verhältnisse, `None` wenn AB die Länge null hat.
    pub fn scaled_ratios(&self) -> Option<ScaledRatios> {
        if self.len_ab <= 0.0 {
            return None;
        }
        Some(ScaledRatios {
            ac_to_ab: self.len_ca / self.len_ab,
            bc_to_ab: self.len_bc / self.len_ab,
            area_over_ab_sq: self.area / (self.len_ab * self.len_ab),
        })
    }
}

/// Maßstabsfreie Kennzahlen (AB = 1) für die Legende.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledRatios {
    /// AC / AB
    pub ac_to_ab: f64,
    /// BC / AB
    pub bc_to_ab: f64,
    /// Fläche / AB²
    pub area_over_ab_sq: f64,
}
