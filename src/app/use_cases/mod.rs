//! Use-Cases der Application-Layer-Orchestrierung.

pub mod constraint;
pub mod pointer;
pub mod view;
