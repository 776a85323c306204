//! Application Controller für zentrale Event-Verarbeitung.

use super::scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{EditorOptions, TriangleScene};
use std::path::{Path, PathBuf};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    /// Zieldatei für übernommene oder zurückgesetzte Optionen
    options_path: PathBuf,
}

impl Default for AppController {
    fn default() -> Self {
        Self::with_options_path(EditorOptions::config_path())
    }
}

impl AppController {
    /// Erstellt einen neuen Controller, Optionen landen neben der Binary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller, der Optionen nach `path` schreibt.
    pub fn with_options_path(path: impl Into<PathBuf>) -> Self {
        Self {
            options_path: path.into(),
        }
    }

    /// Pfad, unter dem Optionen gespeichert werden.
    pub fn options_path(&self) -> &Path {
        &self.options_path
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Gibt `true` zurück, wenn mindestens ein Command die Eingabe verbraucht
    /// hat. Bei `false` darf der Aufrufer die Eingabe selbst nutzen (Verschieben).
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<bool> {
        let commands = self.map_intent_to_commands(state, intent);
        let mut handled = false;
        for command in commands {
            handled |= self.handle_command(state, command)?;
        }

        Ok(handled)
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<bool> {
        state.command_log.record(&command);
        use super::handlers;

        let handled = match command {
            // === Zeiger ===
            AppCommand::UpdateHover { world_pos } => {
                handlers::pointer::update_hover(state, world_pos)
            }
            AppCommand::BeginControlDrag { control, world_pos } => {
                handlers::pointer::begin_control_drag(state, control, world_pos)
            }
            AppCommand::DragControl { world_pos } => {
                handlers::pointer::drag_control(state, world_pos)
            }
            AppCommand::BeginVertexDrag { vertex } => {
                handlers::pointer::begin_vertex_drag(state, vertex)
            }
            AppCommand::DragVertex { world_pos } => handlers::pointer::drag_vertex(state, world_pos),
            AppCommand::EndPointerDrag => handlers::pointer::end_drag(state),

            // === Eingabefelder ===
            AppCommand::ApplyAngle { vertex, degrees } => {
                handlers::constraint::apply_angle(state, vertex, degrees)
            }
            AppCommand::ApplyDistance { edge, input } => {
                handlers::constraint::apply_distance(state, edge, &input)
            }
            AppCommand::ApplyDistances { ab, bc, ac } => {
                handlers::constraint::apply_distances(state, &ab, &bc, &ac)
            }
            AppCommand::DismissValidationMessage => {
                handlers::dialog::dismiss_validation_message(state)
            }

            // === Legende & Ansicht ===
            AppCommand::ToggleConstruction { kind } => {
                handlers::view::toggle_construction(state, kind)
            }
            AppCommand::ResetTriangle => handlers::view::reset_triangle(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options, &self.options_path)?
            }
            AppCommand::ResetOptions => {
                handlers::dialog::reset_options(state, &self.options_path)?
            }
        };

        Ok(handled)
    }

    /// Baut den Szene-Snapshot für den Host.
    pub fn build_scene(&self, state: &AppState) -> TriangleScene {
        scene::build(state)
    }
}
