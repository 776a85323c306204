//! Abstands-Eingabe in Zentimetern: A und die Richtung von AB bleiben,
//! B und C werden neu gesetzt.

use super::{finite_or_reject, guarded, ConstraintError};
use crate::app::AppState;
use crate::core::geometry::bearing;
use crate::core::{EdgeLabel, Triangle, VertexLabel};
use glam::DVec2;

/// Drei Seitenlängen in Rastereinheiten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideLengths {
    pub ab: f64,
    pub bc: f64,
    pub ac: f64,
}

impl SideLengths {
    /// Strikte Dreiecksungleichung für alle drei Kombinationen.
    pub fn is_valid_triangle(&self) -> bool {
        self.ab + self.bc > self.ac && self.ab + self.ac > self.bc && self.bc + self.ac > self.ab
    }
}

/// Liest einen Abstand als endliche Zahl (Leerraum wird ignoriert).
pub fn parse_distance(input: &str) -> Result<f64, ConstraintError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConstraintError::NotANumber {
            input: trimmed.to_string(),
        })
}

fn validated(sides: SideLengths) -> Result<SideLengths, ConstraintError> {
    if sides.is_valid_triangle() {
        Ok(sides)
    } else {
        Err(ConstraintError::TriangleInequality)
    }
}

/// Liest drei Abstände (cm), rechnet in Rastereinheiten um und prüft sie.
pub fn resolve_distances(
    ab: &str,
    bc: &str,
    ac: &str,
    grid_units_per_cm: f64,
) -> Result<SideLengths, ConstraintError> {
    validated(SideLengths {
        ab: parse_distance(ab)? * grid_units_per_cm,
        bc: parse_distance(bc)? * grid_units_per_cm,
        ac: parse_distance(ac)? * grid_units_per_cm,
    })
}

/// Setzt B und C für die gegebenen Seitenlängen.
///
/// A und die Richtung von AB bleiben erhalten, C liegt immer auf der Seite
/// von AB, die sich durch Drehen um +A ergibt. Der Kosinussatz rechnet auf
/// die längste Seite normiert; ein nicht darstellbares Ergebnis wird mit
/// `NumericOverflow` abgelehnt.
pub fn reconstruct_from_distances(
    triangle: &Triangle,
    sides: &SideLengths,
) -> Result<Triangle, ConstraintError> {
    let a = triangle.vertex(VertexLabel::A);
    let ab_bearing = bearing(triangle.vertex(VertexLabel::B) - a);

    let longest = sides.ab.max(sides.bc).max(sides.ac);
    let (ab, bc, ac) = (sides.ab / longest, sides.bc / longest, sides.ac / longest);
    let cos_a = ((ab * ab + ac * ac - bc * bc) / (2.0 * ab * ac)).clamp(-1.0, 1.0);
    if !cos_a.is_finite() {
        return Err(ConstraintError::NumericOverflow);
    }
    let angle_a = cos_a.acos();

    let mut result = *triangle;
    result.set_vertex(VertexLabel::B, a + DVec2::from_angle(ab_bearing) * sides.ab);
    result.set_vertex(
        VertexLabel::C,
        a + DVec2::from_angle(ab_bearing + angle_a) * sides.ac,
    );
    finite_or_reject(result)
}

fn apply_sides(
    state: &mut AppState,
    resolve: impl FnOnce(&AppState) -> Result<SideLengths, ConstraintError>,
) -> Result<SideLengths, ConstraintError> {
    let result = guarded(state, |state| {
        let sides = resolve(state)?;
        state.triangle = reconstruct_from_distances(&state.triangle, &sides)?;
        Ok(sides)
    });

    match &result {
        Ok(sides) => {
            state.ui.validation_message = None;
            log::debug!(
                "Abstände übernommen (AB {:.2}, BC {:.2}, AC {:.2})",
                sides.ab,
                sides.bc,
                sides.ac
            );
        }
        Err(e) if e.is_user_facing() => {
            log::warn!("Abstände abgelehnt: {}", e);
            state.ui.validation_message = Some(e.to_string());
        }
        Err(e) => log::debug!("Abstände nicht übernommen: {}", e),
    }
    result
}

/// Übernimmt alle drei eingegebenen Abstände (Text in cm).
///
/// Ungültige Eingaben setzen die Validierungsmeldung und verändern nichts.
pub fn apply_distances(
    state: &mut AppState,
    ab: &str,
    bc: &str,
    ac: &str,
) -> Result<SideLengths, ConstraintError> {
    apply_sides(state, |state| {
        resolve_distances(ab, bc, ac, state.options.grid_units_per_cm)
    })
}

/// Übernimmt einen einzelnen Abstand; die anderen beiden Seiten behalten
/// ihre aktuelle Länge.
pub fn apply_distance(
    state: &mut AppState,
    edge: EdgeLabel,
    input: &str,
) -> Result<SideLengths, ConstraintError> {
    apply_sides(state, |state| {
        let value = state.options.cm_to_grid(parse_distance(input)?);
        let m = state.measurements();
        let mut sides = SideLengths {
            ab: m.len_ab,
            bc: m.len_bc,
            ac: m.len_ca,
        };
        match edge {
            EdgeLabel::AB => sides.ab = value,
            EdgeLabel::BC => sides.bc = value,
            EdgeLabel::CA => sides.ac = value,
        }
        validated(sides)
    })
}
