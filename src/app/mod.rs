//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
pub mod session;
/// Editor-Zustand und Controller-Anbindung
///
/// Dieses Modul verwaltet den Zustand des Editors (Stores, Session, View).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use session::{RoutingSession, SessionPhase};
pub use state::{SchematicEditor, SelectionState, UiState, ViewState};
