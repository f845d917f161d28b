//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod file_io;
pub mod reroute;
pub mod selection;
pub mod view;
pub mod wiring;
