//! JSON Import/Export für Schaltpläne.
//!
//! Das Dokument enthält Bauteil-Instanzen (mit Referenz auf die
//! Bibliotheks-ID), Wires samt Junction-Markern und die ID-Zähler.

pub mod document;
pub mod parser;
pub mod writer;

pub use document::{InstanceRecord, LoadedSchematic, SchematicDocument, DOCUMENT_VERSION};
pub use parser::parse_schematic;
pub use writer::write_schematic;
