//! Use-Case-Funktionen für Bauteil- und Wire-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `place` — Bauteil aus der Bibliothek platzieren
//! - `transform` — Verschieben, Drehen, Spiegeln selektierter Bauteile
//! - `label` — Beschriftung setzen
//! - `duplicate` — Selektierte Bauteile duplizieren
//! - `delete_components` — Selektierte Bauteile löschen
//! - `delete_wires` — Selektierte Wires löschen
//! - `clear` — Schaltplan leeren

mod clear;
mod delete_components;
mod delete_wires;
mod duplicate;
mod label;
mod place;
mod transform;

pub use clear::clear_schematic;
pub use delete_components::delete_selected_instances;
pub use delete_wires::{delete_selected_wires, delete_wires_by_ids};
pub use duplicate::duplicate_selected;
pub use label::set_label_of_selected;
pub use place::place_component;
pub use transform::{flip_selected, move_instance, move_selected_by, rotate_selected};
