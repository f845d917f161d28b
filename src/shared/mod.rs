//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Render-Szene, die zwischen `app` und einem
//! Frontend geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::{DanglingWirePolicy, EditorOptions};
pub use render_scene::{ComponentBox, RenderScene, WirePath};
