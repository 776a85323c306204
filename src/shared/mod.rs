//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem zeichnenden Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod display;
pub mod options;
mod scene;

pub use display::{ConstructionKind, DisplayFlags};
pub use options::EditorOptions;
pub use scene::{InputFieldValues, TriangleScene};
