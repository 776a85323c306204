use crate::shared::DisplayFlags;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Sichtbare Konstruktionen
    pub display: DisplayFlags,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
