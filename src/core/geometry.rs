//! Geometrie-Kernel: Linienschnitt, Abstände, Winkel und Raster-Snapping.
//!
//! Alle Funktionen sind rein und arbeiten in Rastereinheiten (1.0 = eine Rasterzelle).
//! Degenerierte Eingaben (Null-Vektoren, parallele Linien) liefern `None`
//! statt NaN oder Division durch Null.

use glam::DVec2;

/// Länge einer Rasterzelle in Welteinheiten.
pub const GRID_UNIT: f64 = 1.0;

/// Schnittpunkt zweier unendlicher Geraden, jeweils durch zwei Punkte definiert.
///
/// Gibt `None` zurück, wenn die Determinante exakt null ist (parallel/kollinear)
/// oder das Ergebnis nicht endlich ist.
pub fn line_intersection(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<DVec2> {
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if den == 0.0 {
        return None;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / den;
    let hit = p1 + t * (p2 - p1);
    hit.is_finite().then_some(hit)
}

/// Senkrechter Abstand eines Punkts zur unendlichen Geraden durch `p1` und `p2`.
///
/// `None`, wenn `p1 == p2` (Gerade undefiniert).
pub fn point_to_line_distance(point: DVec2, p1: DVec2, p2: DVec2) -> Option<f64> {
    let line = p2 - p1;
    let len = line.length();
    if len == 0.0 {
        return None;
    }
    Some(line.perp_dot(point - p1).abs() / len)
}

/// Abstand eines Punkts zum Segment `p1`–`p2`.
///
/// Der Projektionsparameter wird auf [0, 1] begrenzt, Punkte jenseits der
/// Endpunkte messen also zum nächsten Endpunkt.
pub fn distance_to_segment(point: DVec2, p1: DVec2, p2: DVec2) -> f64 {
    let d = p2 - p1;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return point.distance(p1);
    }

    let t = ((point - p1).dot(d) / len_sq).clamp(0.0, 1.0);
    point.distance(p1 + t * d)
}

/// Rundet einen Wert auf das nächste Vielfache von `step`.
///
/// Bei `step <= 0` wird der Wert unverändert zurückgegeben.
#[inline]
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Rundet einen Wert auf die nächste Rasterlinie.
#[inline]
pub fn snap_to_grid(value: f64) -> f64 {
    snap_to_step(value, GRID_UNIT)
}

/// Rastet beide Koordinaten eines Punkts auf das Raster ein.
pub fn snap_point_to_grid(point: DVec2) -> DVec2 {
    DVec2::new(snap_to_grid(point.x), snap_to_grid(point.y))
}

/// Vorzeichenbehafteter Winkel von `v1` nach `v2` in Radiant, Bereich [-π, π].
///
/// Null-Vektoren liefern 0.
pub fn angle_between(v1: DVec2, v2: DVec2) -> f64 {
    v1.perp_dot(v2).atan2(v1.dot(v2))
}

/// Richtungswinkel (atan2) eines Vektors in Radiant.
#[inline]
pub fn bearing(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Mittelpunkt zweier Punkte.
#[inline]
pub fn midpoint(p: DVec2, q: DVec2) -> DVec2 {
    (p + q) * 0.5
}

/// Einheitsvektor von `from` nach `to`, `None` bei identischen Punkten.
#[inline]
pub fn unit_direction(from: DVec2, to: DVec2) -> Option<DVec2> {
    (to - from).try_normalize()
}

/// Vorzeichenbehaftete Dreiecksfläche nach der Shoelace-Formel.
pub fn triangle_area_signed(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0
}

/// Richtung der inneren Winkelhalbierenden am Eckpunkt `vertex`.
///
/// Summe der beiden Kanten-Einheitsvektoren, normalisiert. Bei gestrecktem
/// Winkel (Summe verschwindet) wird die Senkrechte zur ersten Kante verwendet.
pub fn bisector_direction(vertex: DVec2, p1: DVec2, p2: DVec2) -> Option<DVec2> {
    let u1 = unit_direction(vertex, p1)?;
    let u2 = unit_direction(vertex, p2)?;
    let sum = u1 + u2;
    if sum.length() < 1e-6 {
        return Some(u1.perp());
    }
    sum.try_normalize()
}
