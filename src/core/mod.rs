//! Core-Domänentypen: Bauteile, Instanzen, Wires, Grid-Ansicht und Router.

pub mod component;
pub mod electrical;
pub mod geometry;
pub mod grid;
pub mod instance;
pub mod obstacle;
/// Manhattan-Routing zwischen Bauteil-Pins
///
/// - RouterConfig: Stub-Länge, Hindernis-Marge, Suchweite
/// - ManhattanRouter: Pfadberechnung mit Hindernis-Prüfung
pub mod router;
pub mod wire;
pub mod wire_store;

pub use component::{ComponentDef, ComponentLibrary, EndpointDef};
pub use electrical::{connection_hint, suggest_endpoint, ComponentRole, ConnectionHint};
pub use geometry::{snap_orthogonal, Direction, Rotation};
pub use grid::GridView;
pub use instance::{ComponentInstance, InstanceStore, ResolvedEndpoint};
pub use obstacle::{collect_obstacles, Obstacle};
pub use router::{ManhattanRouter, RouterConfig};
pub use wire::{BrokenReason, EndpointRef, JunctionMarker, Wire, WireEnd, WireHealth, WireRouting};
pub use wire_store::WireStore;
