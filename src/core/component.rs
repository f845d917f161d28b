//! Bauteil-Definitionen (unveränderlich) und die Bauteil-Bibliothek.

use super::Direction;
use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Anschluss-Pin einer Bauteil-Definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDef {
    /// Logische Pin-ID (z.B. "anode")
    pub id: String,
    /// X-Position relativ zum Bauteil-Ursprung (Grid-Einheiten)
    pub x: f32,
    /// Y-Position relativ zum Bauteil-Ursprung (Grid-Einheiten)
    pub y: f32,
    /// Natürliche Austrittsrichtung (unbekannt → Router ohne Stub)
    #[serde(default)]
    pub direction: Option<Direction>,
}

/// Unveränderliche Bauteil-Definition aus der Bibliothek
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDef {
    /// Bibliotheks-ID (z.B. "resistor")
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Breite in Grid-Einheiten
    pub width: f32,
    /// Höhe in Grid-Einheiten
    pub height: f32,
    /// Anschluss-Pins
    pub endpoints: Vec<EndpointDef>,
}

impl ComponentDef {
    /// Findet einen Pin per ID.
    pub fn endpoint(&self, endpoint_id: &str) -> Option<&EndpointDef> {
        self.endpoints.iter().find(|ep| ep.id == endpoint_id)
    }

    /// Prüft die Definition auf Vollständigkeit.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id.trim().is_empty() {
            bail!("Bauteil ohne ID");
        }
        if self.name.trim().is_empty() {
            bail!("Bauteil '{}' ohne Namen", self.id);
        }
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            bail!(
                "Bauteil '{}': Breite/Höhe müssen positive Zahlen sein ({} x {})",
                self.id,
                self.width,
                self.height
            );
        }
        if self.endpoints.is_empty() {
            bail!("Bauteil '{}' hat keine Anschlüsse", self.id);
        }
        let mut seen = HashSet::new();
        for ep in &self.endpoints {
            if !seen.insert(ep.id.as_str()) {
                bail!("Bauteil '{}': doppelte Pin-ID '{}'", self.id, ep.id);
            }
        }
        Ok(())
    }

    /// Zweipoliges Standard-Bauteil mit Pins links/rechts auf halber Höhe.
    pub fn two_terminal(id: &str, name: &str, width: f32, height: f32) -> Self {
        Self::two_terminal_with_pins(id, name, width, height, "left", "right")
    }

    fn two_terminal_with_pins(
        id: &str,
        name: &str,
        width: f32,
        height: f32,
        left_pin: &str,
        right_pin: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
            endpoints: vec![
                EndpointDef {
                    id: left_pin.to_string(),
                    x: 0.0,
                    y: height / 2.0,
                    direction: Some(Direction::Left),
                },
                EndpointDef {
                    id: right_pin.to_string(),
                    x: width,
                    y: height / 2.0,
                    direction: Some(Direction::Right),
                },
            ],
        }
    }

    fn single_pin(id: &str, name: &str, pin: &str, y: f32, direction: Direction) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width: 1.0,
            height: 1.0,
            endpoints: vec![EndpointDef {
                id: pin.to_string(),
                x: 0.5,
                y,
                direction: Some(direction),
            }],
        }
    }
}

/// Bibliothek aller verfügbaren Bauteil-Definitionen (geteilt, read-only)
#[derive(Debug, Clone, Default)]
pub struct ComponentLibrary {
    defs: IndexMap<String, Arc<ComponentDef>>,
}

impl ComponentLibrary {
    /// Erstellt eine leere Bibliothek.
    pub fn new() -> Self {
        Self::default()
    }

    /// Eingebaute Standard-Bauteile.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        let defs = [
            ComponentDef::two_terminal("resistor", "Resistor", 2.0, 1.0),
            ComponentDef::two_terminal("capacitor", "Capacitor", 1.0, 1.0),
            ComponentDef::two_terminal("impedance", "Impedance", 2.0, 1.0),
            ComponentDef::two_terminal_with_pins("diode", "Diode", 2.0, 1.0, "anode", "cathode"),
            ComponentDef::two_terminal_with_pins("led", "LED", 2.0, 1.0, "anode", "cathode"),
            ComponentDef::single_pin("ground", "Ground", "top", 0.0, Direction::Up),
            ComponentDef::single_pin("vcc", "VCC", "bottom", 1.0, Direction::Down),
            ComponentDef::single_pin("probe", "Probe", "connection", 1.0, Direction::Down),
        ];
        for def in defs {
            // Eingebaute Definitionen sind konstant gültig und eindeutig
            library.defs.insert(def.id.clone(), Arc::new(def));
        }
        library
    }

    /// Lädt Definitionen aus einem JSON-Array und validiert jede einzelne.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let defs: Vec<ComponentDef> =
            serde_json::from_str(json).context("Bauteil-Bibliothek ist kein gültiges JSON")?;
        let mut library = Self::new();
        for def in defs {
            library.insert(def)?;
        }
        log::info!("Bauteil-Bibliothek geladen: {} Definitionen", library.len());
        Ok(library)
    }

    /// Fügt eine validierte Definition hinzu. Doppelte IDs werden abgelehnt.
    pub fn insert(&mut self, def: ComponentDef) -> anyhow::Result<Arc<ComponentDef>> {
        def.validate()?;
        if self.defs.contains_key(&def.id) {
            bail!("Bauteil mit ID '{}' existiert bereits", def.id);
        }
        let def = Arc::new(def);
        self.defs.insert(def.id.clone(), Arc::clone(&def));
        Ok(def)
    }

    /// Lookup per Bibliotheks-ID.
    pub fn get(&self, component_id: &str) -> Option<Arc<ComponentDef>> {
        self.defs.get(component_id).cloned()
    }

    /// Iterator über alle Definitionen in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComponentDef>> {
        self.defs.values()
    }

    /// Anzahl der Definitionen.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Gibt `true` zurück, wenn die Bibliothek leer ist.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_library_is_valid() {
        let library = ComponentLibrary::builtin();
        assert!(library.len() >= 7);
        for def in library.iter() {
            def.validate().expect("eingebaute Definition muss gültig sein");
        }
        let diode = library.get("diode").expect("Diode vorhanden");
        assert!(diode.endpoint("anode").is_some());
        assert!(diode.endpoint("gate").is_none());
    }

    #[test]
    fn json_library_rejects_missing_endpoints() {
        let json = r#"[{"id":"x","name":"X","width":2,"height":1,"endpoints":[]}]"#;
        let err = ComponentLibrary::from_json_str(json).expect_err("muss fehlschlagen");
        assert!(err.to_string().contains("keine Anschlüsse"));
    }

    #[test]
    fn json_library_rejects_duplicate_ids() {
        let json = r#"[
            {"id":"r","name":"R","width":2,"height":1,"endpoints":[{"id":"a","x":0,"y":0.5}]},
            {"id":"r","name":"R2","width":2,"height":1,"endpoints":[{"id":"a","x":0,"y":0.5}]}
        ]"#;
        let err = ComponentLibrary::from_json_str(json).expect_err("Duplikat");
        assert!(err.to_string().contains("existiert bereits"));
    }

    #[test]
    fn json_library_parses_directions() {
        let json = r#"[{"id":"r","name":"R","width":2,"height":1,
            "endpoints":[{"id":"a","x":0,"y":0.5,"direction":"left"},{"id":"b","x":2,"y":0.5}]}]"#;
        let library = ComponentLibrary::from_json_str(json).expect("gültig");
        let def = library.get("r").expect("r vorhanden");
        assert_eq!(def.endpoints[0].direction, Some(Direction::Left));
        assert_eq!(def.endpoints[1].direction, None);
    }

    #[test]
    fn validate_rejects_non_positive_size() {
        let mut def = ComponentDef::two_terminal("r", "R", 2.0, 1.0);
        def.height = 0.0;
        assert!(def.validate().is_err());
    }
}
