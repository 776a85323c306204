use crate::app::tools::edge_control::{handle_positions, SnapSteps};
use crate::app::tools::{ControlHandle, HandleLayout, Interaction};
use crate::app::CommandLog;
use crate::core::{Constructions, EdgeLabel, Measurements, Triangle};
use crate::shared::EditorOptions;

use super::{ConstraintState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Dreieck (einzige Quelle der Eckpunkt-Positionen)
    pub triangle: Triangle,
    /// Aktueller Zeiger-Modus (Hover/Drag)
    pub interaction: Interaction,
    /// Reentrancy-Schutz und zuletzt geänderter Winkel
    pub constraint: ConstraintState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Raster, Snapping, Bedienelemente)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen und Start-Dreieck.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen (bereinigt).
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            triangle: Triangle::from_coords(options.initial_vertices),
            interaction: Interaction::Idle,
            constraint: ConstraintState::default(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Messwerte des aktuellen Dreiecks.
    pub fn measurements(&self) -> Measurements {
        self.triangle.measure()
    }

    /// Abgeleitete Konstruktionen (leer bei degeneriertem Dreieck).
    pub fn constructions(&self) -> Constructions {
        Constructions::compute(&self.triangle, self.options.degenerate_area_epsilon)
    }

    /// Fläche unterhalb der Degenerations-Schwelle?
    pub fn is_degenerate(&self) -> bool {
        self.triangle
            .is_degenerate(self.options.degenerate_area_epsilon)
    }

    /// Layout der Bedienelemente in Welteinheiten.
    pub fn handle_layout(&self) -> HandleLayout {
        HandleLayout::from_options(&self.options)
    }

    /// Snap-Schritte für Kanten-Drags.
    pub fn snap_steps(&self) -> SnapSteps {
        SnapSteps::from_options(&self.options)
    }

    /// Die vier Bedienelemente einer Kante (zum Zeichnen und für eigene Trefferprüfung).
    pub fn handles_for(&self, edge: EdgeLabel) -> Option<[ControlHandle; 4]> {
        handle_positions(&self.triangle, edge, &self.handle_layout())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
