//! Schaltplan-Editor-Kern.
//! Manhattan-Wire-Routing, Junctions, Routing-Session und Undo als Library,
//! unabhängig von einem konkreten Frontend.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;

pub use app::{
    AppCommand, AppController, AppIntent, RoutingSession, SchematicEditor, SelectionState,
    UiState, ViewState,
};
pub use core::{
    ComponentDef, ComponentInstance, ComponentLibrary, Direction, EndpointRef, GridView,
    InstanceStore, ManhattanRouter, Obstacle, Rotation, RouterConfig, Wire, WireEnd, WireHealth,
    WireRouting, WireStore,
};
pub use shared::{DanglingWirePolicy, EditorOptions, RenderScene};
pub use storage::{parse_schematic, write_schematic};
