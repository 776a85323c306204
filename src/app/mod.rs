//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dreieck, Interaktion, Anzeige).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use scene::build as build_scene;
pub use state::{AppState, ConstraintState, UiState, ViewState};
pub use tools::Interaction;
