//! Use-Case-Funktionen für Bauteil- und Wire-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick` — Einzelklick auf Wire oder Bauteil
//! - `rect` — Rechteck-Selektion von Bauteilen
//! - `helpers` — Gemeinsame Hilfsfunktionen

mod helpers;
mod pick;
mod rect;

pub use helpers::clear_selection;
pub use pick::{pick_instance_at, pick_wire_at, select_instance, select_wire};
pub use rect::select_instances_in_rect;
