//! Application State: zentrale Datenhaltung.
//!
//! Ein einziger `AppState` besitzt das Dreieck und allen Interaktionszustand;
//! Handler bekommen ihn per `&mut` übergeben.

mod app_state;
mod constraint;
mod ui;
mod view;

pub use app_state::AppState;
pub use constraint::ConstraintState;
pub use ui::UiState;
pub use view::ViewState;
