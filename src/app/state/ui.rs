/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Validierungsfehler der Abstands-Eingabe (bis zur Bestätigung sichtbar)
    pub validation_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (keine Meldung).
    pub fn new() -> Self {
        Self::default()
    }
}
