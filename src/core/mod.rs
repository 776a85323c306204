//! Core-Domänentypen: Geometrie-Kernel, Dreieck, Messwerte, Konstruktionen.
//!
//! Rein funktional, ohne Zustand und ohne Logging.

pub mod constructions;
pub mod control;
pub mod geometry;
pub mod measurement;
pub mod triangle;

pub use constructions::{Circle, Constructions};
pub use control::{ControlHandle, ControlKind, EdgeControl};
pub use measurement::{Measurements, ScaledRatios};
pub use triangle::{edge_roles, EdgeGeometry, EdgeLabel, EdgeRoles, Triangle, VertexLabel};
