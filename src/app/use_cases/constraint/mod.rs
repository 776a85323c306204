//! Rekonstruktion der Eckpunkte aus eingegebenen Winkeln oder Abständen.
//!
//! Aufgeteilt nach Eingabe:
//! - `angles`: Winkel-Eingabe (Sinussatz, nur C bewegt sich)
//! - `distances`: Abstands-Eingabe in cm (Kosinussatz, A bleibt fest)
//!
//! Beide Einstiegspunkte laufen unter einem Reentrancy-Schutz und werden
//! während eines Zeiger-Drags abgewiesen.

mod angles;
mod distances;

pub use angles::{apply_angle, reconstruct_from_angles, resolve_angles, ResolvedAngles};
pub use distances::{
    apply_distance, apply_distances, parse_distance, reconstruct_from_distances,
    resolve_distances, SideLengths,
};

use crate::app::AppState;
use crate::core::Triangle;
use thiserror::Error;

/// Gründe, aus denen eine Eingabe nicht übernommen wird.
///
/// Keiner davon ist fatal: das Dreieck bleibt jeweils unverändert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("Winkel {value}° liegt nicht zwischen 0° und 180°")]
    AngleOutOfRange { value: f64 },
    #[error("Abgeleiteter Winkel {value}° liegt nicht zwischen 0° und 180°")]
    DerivedAngleOutOfRange { value: f64 },
    #[error("Bitte gültige Zahlen für alle Abstände eingeben")]
    NotANumber { input: String },
    #[error("Diese Abstände bilden kein gültiges Dreieck")]
    TriangleInequality,
    #[error("Diese Abstände sind zu groß für die Darstellung")]
    NumericOverflow,
    #[error("Seite AB hat die Länge null")]
    DegenerateBase,
    #[error("Eine Rekonstruktion läuft bereits")]
    Reentrant,
    #[error("Während eines Drags werden keine Eingaben übernommen")]
    DragInProgress,
}

impl ConstraintError {
    /// Wird dem User als Validierungsmeldung angezeigt (nur Abstände).
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ConstraintError::NotANumber { .. }
                | ConstraintError::TriangleInequality
                | ConstraintError::NumericOverflow
        )
    }

    /// Eingabe wurde gar nicht erst verarbeitet (Rekonstruktion läuft, Drag aktiv).
    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            ConstraintError::Reentrant | ConstraintError::DragInProgress
        )
    }
}

/// Lässt nur Dreiecke durch, deren Koordinaten und Messwerte endlich sind.
fn finite_or_reject(triangle: Triangle) -> Result<Triangle, ConstraintError> {
    let finite_vertices = triangle.vertices().iter().all(|v| v.is_finite());
    if finite_vertices && triangle.measure().is_finite() {
        Ok(triangle)
    } else {
        Err(ConstraintError::NumericOverflow)
    }
}

/// Führt `apply` mit gesetztem Reentrancy-Flag aus.
///
/// Verschachtelte Aufrufe und Aufrufe während eines Drags kehren sofort zurück.
fn guarded<T>(
    state: &mut AppState,
    apply: impl FnOnce(&mut AppState) -> Result<T, ConstraintError>,
) -> Result<T, ConstraintError> {
    if state.constraint.applying {
        return Err(ConstraintError::Reentrant);
    }
    if state.interaction.is_dragging() {
        return Err(ConstraintError::DragInProgress);
    }

    state.constraint.applying = true;
    let result = apply(state);
    state.constraint.applying = false;
    result
}
