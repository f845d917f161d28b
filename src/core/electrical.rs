//! Elektrische Hinweise (rein beratend, keine Simulation).

use super::ComponentInstance;
use glam::Vec2;

/// Elektrische Rolle eines Bauteils
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRole {
    /// Gepolt mit Ein-/Ausgangs-Pin (Diode, LED)
    Polarized {
        /// Eingangs-Pin
        input: &'static str,
        /// Ausgangs-Pin
        output: &'static str,
    },
    /// Aktives Bauteil mit mehreren Ein-/Ausgängen
    Active {
        /// Eingangs-Pins
        inputs: &'static [&'static str],
        /// Ausgangs-Pins
        outputs: &'static [&'static str],
    },
    /// Symmetrisches passives Bauteil
    SymmetricPassive,
    /// Masse
    Ground(&'static str),
    /// Versorgung
    Power(&'static str),
    /// Messpunkt
    Probe(&'static str),
}

/// Regel-Tabelle nach Bibliotheks-ID. `None` für unbekannte Bauteile.
pub fn role_of(component_id: &str) -> Option<ComponentRole> {
    const TRANSISTOR_OUT: &[&str] = &["collector", "emitter"];
    const OPAMP_IN: &[&str] = &["in+", "in-"];
    let role = match component_id {
        "diode" | "led" => ComponentRole::Polarized {
            input: "anode",
            output: "cathode",
        },
        "npn-transistor" | "phototransistor" => ComponentRole::Active {
            inputs: &["base"],
            outputs: TRANSISTOR_OUT,
        },
        "op-amp-1" | "op-amp-2" => ComponentRole::Active {
            inputs: OPAMP_IN,
            outputs: &["out"],
        },
        "resistor" | "capacitor" | "impedance" => ComponentRole::SymmetricPassive,
        "ground" => ComponentRole::Ground("top"),
        "vcc" => ComponentRole::Power("bottom"),
        "probe" => ComponentRole::Probe("connection"),
        _ => return None,
    };
    Some(role)
}

/// Ergebnis der Verbindungsprüfung
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionHint {
    /// `false` bei typischen Fehlern (Masse↔Masse, Versorgung↔Versorgung)
    pub valid: bool,
    /// Hinweistext für die Statuszeile
    pub message: Option<String>,
}

/// Prüft eine Verbindung zwischen zwei Bauteil-Typen.
pub fn connection_hint(start_component: &str, end_component: &str) -> ConnectionHint {
    match (role_of(start_component), role_of(end_component)) {
        (Some(ComponentRole::Ground(_)), Some(ComponentRole::Ground(_))) => ConnectionHint {
            valid: false,
            message: Some("Warning: Connecting ground to ground".to_string()),
        },
        (Some(ComponentRole::Power(_)), Some(ComponentRole::Power(_))) => ConnectionHint {
            valid: false,
            message: Some("Warning: Connecting power to power directly".to_string()),
        },
        (Some(ComponentRole::Polarized { .. }), Some(ComponentRole::Polarized { .. })) => {
            ConnectionHint {
                valid: true,
                message: Some("Check polarity: anode to cathode".to_string()),
            }
        }
        _ => ConnectionHint {
            valid: true,
            message: None,
        },
    }
}

/// Schlägt einen Pin der Instanz vor.
///
/// `is_starting`: Wire beginnt an dieser Instanz. `from`: Herkunft des Wires
/// (nur für symmetrische Bauteile relevant, dort gewinnt der nächste Pin).
pub fn suggest_endpoint(
    instance: &ComponentInstance,
    is_starting: bool,
    from: Option<Vec2>,
    grid_size: f32,
) -> Option<String> {
    let first = instance.def.endpoints.first().map(|ep| ep.id.clone());
    let Some(role) = role_of(&instance.def.id) else {
        return first;
    };

    match role {
        ComponentRole::Polarized { input, output } => {
            let pin = if is_starting { input } else { output };
            Some(pin.to_string())
        }
        ComponentRole::Active { inputs, outputs } => {
            let preferred = if is_starting { outputs } else { inputs };
            preferred.first().map(|s| s.to_string()).or(first)
        }
        ComponentRole::SymmetricPassive => {
            let Some(from) = from else {
                return first;
            };
            instance
                .def
                .endpoints
                .iter()
                .filter_map(|ep| {
                    instance
                        .resolve_endpoint(&ep.id, grid_size)
                        .map(|resolved| (ep.id.as_str(), resolved.position.distance(from)))
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(id, _)| id.to_string())
                .or(first)
        }
        ComponentRole::Ground(pin) | ComponentRole::Power(pin) | ComponentRole::Probe(pin) => {
            Some(pin.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentLibrary, InstanceStore};
    use glam::IVec2;

    #[test]
    fn ground_to_ground_is_flagged() {
        let hint = connection_hint("ground", "ground");
        assert!(!hint.valid);
        assert!(hint.message.is_some());
        assert!(!connection_hint("vcc", "vcc").valid);
    }

    #[test]
    fn polarized_pair_gets_reminder() {
        let hint = connection_hint("diode", "led");
        assert!(hint.valid);
        assert_eq!(hint.message.as_deref(), Some("Check polarity: anode to cathode"));
        assert_eq!(connection_hint("resistor", "unknown").message, None);
    }

    #[test]
    fn suggestions_follow_roles() {
        let library = ComponentLibrary::builtin();
        let mut store = InstanceStore::new();
        let diode = store.place(library.get("diode").expect("diode"), IVec2::ZERO);
        let resistor = store.place(library.get("resistor").expect("resistor"), IVec2::ZERO);
        let ground = store.place(library.get("ground").expect("ground"), IVec2::ZERO);

        let get = |id| store.get(id).expect("Instanz");
        assert_eq!(
            suggest_endpoint(get(diode), true, None, 80.0).as_deref(),
            Some("anode")
        );
        assert_eq!(
            suggest_endpoint(get(diode), false, None, 80.0).as_deref(),
            Some("cathode")
        );
        assert_eq!(
            suggest_endpoint(get(resistor), false, Some(Vec2::new(400.0, 40.0)), 80.0).as_deref(),
            Some("right")
        );
        assert_eq!(
            suggest_endpoint(get(resistor), false, None, 80.0).as_deref(),
            Some("left")
        );
        assert_eq!(
            suggest_endpoint(get(ground), true, None, 80.0).as_deref(),
            Some("top")
        );
    }
}
