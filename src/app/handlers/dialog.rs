//! Handler für Validierungsmeldung und Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Entfernt die Validierungsmeldung.
pub fn dismiss_validation_message(state: &mut AppState) -> bool {
    state.ui.validation_message.take().is_some()
}

/// Wendet neue Optionen an und persistiert sie nach `path`.
///
/// Ungültige Einzelwerte werden vorher durch ihre Standardwerte ersetzt.
pub fn apply_options(
    state: &mut AppState,
    options: EditorOptions,
    path: &Path,
) -> anyhow::Result<bool> {
    state.options = options.sanitized();
    state.options.save_to_file(path)?;
    Ok(true)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie nach `path`.
pub fn reset_options(state: &mut AppState, path: &Path) -> anyhow::Result<bool> {
    state.options = EditorOptions::default();
    state.options.save_to_file(path)?;
    Ok(true)
}
