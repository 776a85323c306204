//! Sichtbarkeit der Hilfskonstruktionen (Legende).

use serde::{Deserialize, Serialize};

/// Ein- und ausblendbare Konstruktion der Legende
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionKind {
    /// Seitenhalbierende (mit Schwerpunkt)
    Medians,
    /// Höhen (mit Höhenschnittpunkt)
    Altitudes,
    /// Winkelhalbierende
    AngleBisectors,
    /// Mittelsenkrechte
    PerpendicularBisectors,
    Incircle,
    Circumcircle,
    /// Koordinatenbeschriftung der Eckpunkte
    CoordinateSystem,
}

impl ConstructionKind {
    /// Alle Konstruktionen in Legenden-Reihenfolge.
    pub const ALL: [ConstructionKind; 7] = [
        ConstructionKind::Medians,
        ConstructionKind::Altitudes,
        ConstructionKind::AngleBisectors,
        ConstructionKind::PerpendicularBisectors,
        ConstructionKind::Incircle,
        ConstructionKind::Circumcircle,
        ConstructionKind::CoordinateSystem,
    ];
}

/// Sichtbarkeit der Konstruktionen. Nur die Koordinaten sind anfangs an.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    pub medians: bool,
    pub altitudes: bool,
    pub angle_bisectors: bool,
    pub perpendicular_bisectors: bool,
    pub incircle: bool,
    pub circumcircle: bool,
    pub coordinate_system: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            medians: false,
            altitudes: false,
            angle_bisectors: false,
            perpendicular_bisectors: false,
            incircle: false,
            circumcircle: false,
            coordinate_system: true,
        }
    }
}

impl DisplayFlags {
    fn flag_mut(&mut self, kind: ConstructionKind) -> &mut bool {
        match kind {
            ConstructionKind::Medians => &mut self.medians,
            ConstructionKind::Altitudes => &mut self.altitudes,
            ConstructionKind::AngleBisectors => &mut self.angle_bisectors,
            ConstructionKind::PerpendicularBisectors => &mut self.perpendicular_bisectors,
            ConstructionKind::Incircle => &mut self.incircle,
            ConstructionKind::Circumcircle => &mut self.circumcircle,
            ConstructionKind::CoordinateSystem => &mut self.coordinate_system,
        }
    }

    /// Ist die Konstruktion sichtbar?
    pub fn is_shown(&self, kind: ConstructionKind) -> bool {
        match kind {
            ConstructionKind::Medians => self.medians,
            ConstructionKind::Altitudes => self.altitudes,
            ConstructionKind::AngleBisectors => self.angle_bisectors,
            ConstructionKind::PerpendicularBisectors => self.perpendicular_bisectors,
            ConstructionKind::Incircle => self.incircle,
            ConstructionKind::Circumcircle => self.circumcircle,
            ConstructionKind::CoordinateSystem => self.coordinate_system,
        }
    }

    /// Schaltet die Sichtbarkeit um und gibt den neuen Wert zurück.
    pub fn toggle(&mut self, kind: ConstructionKind) -> bool {
        let flag = self.flag_mut(kind);
        *flag = !*flag;
        *flag
    }
}
