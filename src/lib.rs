//! Interaktiver Dreiecks-Editor mit Winkel- und Abstands-Constraints.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, Interaction, UiState, ViewState};
pub use app::use_cases::constraint::ConstraintError;
pub use core::{
    Constructions, ControlHandle, ControlKind, EdgeControl, EdgeLabel, Measurements, Triangle,
    VertexLabel,
};
pub use shared::{ConstructionKind, DisplayFlags, EditorOptions, TriangleScene};
