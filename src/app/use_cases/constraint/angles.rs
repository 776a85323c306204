//! Winkel-Eingabe: übrige Winkel bestimmen, dann C per Sinussatz neu setzen.

use super::{finite_or_reject, guarded, ConstraintError};
use crate::app::AppState;
use crate::core::geometry::bearing;
use crate::core::{Measurements, Triangle, VertexLabel};
use glam::DVec2;
use std::f64::consts::PI;

/// Die drei Zielwinkel in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAngles {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ResolvedAngles {
    /// Winkel an einem Eckpunkt.
    pub fn get(&self, vertex: VertexLabel) -> f64 {
        match vertex {
            VertexLabel::A => self.a,
            VertexLabel::B => self.b,
            VertexLabel::C => self.c,
        }
    }

    fn set(&mut self, vertex: VertexLabel, degrees: f64) {
        match vertex {
            VertexLabel::A => self.a = degrees,
            VertexLabel::B => self.b = degrees,
            VertexLabel::C => self.c = degrees,
        }
    }
}

#[inline]
fn is_open_angle(degrees: f64) -> bool {
    degrees > 0.0 && degrees < 180.0
}

/// Bestimmt alle drei Winkel nach einer Eingabe an `edited`.
///
/// Ohne vorherige Eingabe oder bei erneuter Eingabe am selben Winkel wird
/// der Rest gleichmäßig verteilt. Sonst bleibt der zuletzt eingegebene
/// Winkel (aus der aktuellen Geometrie) stehen und der dritte ergibt sich.
pub fn resolve_angles(
    edited: VertexLabel,
    value: f64,
    last_edited: Option<VertexLabel>,
    current: &Measurements,
) -> Result<ResolvedAngles, ConstraintError> {
    if !is_open_angle(value) {
        return Err(ConstraintError::AngleOutOfRange { value });
    }

    let remainder = 180.0 - value;
    let (o1, o2) = edited.others();
    let mut angles = ResolvedAngles {
        a: 0.0,
        b: 0.0,
        c: 0.0,
    };
    angles.set(edited, value);

    match last_edited {
        Some(kept) if kept != edited => {
            let kept_value = current.angle(kept);
            let derived = remainder - kept_value;
            if !is_open_angle(derived) {
                return Err(ConstraintError::DerivedAngleOutOfRange { value: derived });
            }
            let third = if kept == o1 { o2 } else { o1 };
            angles.set(kept, kept_value);
            angles.set(third, derived);
        }
        _ => {
            angles.set(o1, remainder / 2.0);
            angles.set(o2, remainder / 2.0);
        }
    }

    Ok(angles)
}

/// Setzt C so, dass das Dreieck die Zielwinkel hat. A und B bleiben fest.
///
/// BC = AB · sin(A) / sin(C), C liegt von B aus in Richtung AB + π − B.
pub fn reconstruct_from_angles(
    triangle: &Triangle,
    angles: &ResolvedAngles,
) -> Result<Triangle, ConstraintError> {
    let a = triangle.vertex(VertexLabel::A);
    let b = triangle.vertex(VertexLabel::B);
    let ab = a.distance(b);
    if ab == 0.0 {
        return Err(ConstraintError::DegenerateBase);
    }

    let bc = ab * angles.a.to_radians().sin() / angles.c.to_radians().sin();
    let b_to_c = bearing(b - a) + PI - angles.b.to_radians();

    let mut result = *triangle;
    result.set_vertex(VertexLabel::C, b + DVec2::from_angle(b_to_c) * bc);
    finite_or_reject(result)
}

/// Übernimmt einen eingegebenen Winkel.
///
/// Abgelehnte Eingaben lassen Dreieck und „zuletzt geändert" unverändert.
pub fn apply_angle(
    state: &mut AppState,
    vertex: VertexLabel,
    degrees: f64,
) -> Result<ResolvedAngles, ConstraintError> {
    let result = guarded(state, |state| {
        let current = state.measurements();
        let angles = resolve_angles(vertex, degrees, state.constraint.last_edited_angle, &current)?;
        let triangle = reconstruct_from_angles(&state.triangle, &angles)?;

        state.constraint.last_edited_angle = Some(vertex);
        state.triangle = triangle;
        Ok(angles)
    });

    match &result {
        Ok(angles) => log::debug!(
            "Winkel {} = {:.1}° übernommen (A {:.1}°, B {:.1}°, C {:.1}°)",
            vertex.as_str(),
            degrees,
            angles.a,
            angles.b,
            angles.c
        ),
        Err(e) => log::debug!("Winkel {} nicht übernommen: {}", vertex.as_str(), e),
    }
    result
}
