//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs
//! und meldet zurück, ob die Eingabe verbraucht wurde.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod constraint;
pub mod dialog;
pub mod pointer;
pub mod view;
