use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand.
///
/// Bauteil- und Wire-Selektion schließen sich gegenseitig aus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Instanz-IDs in Klick-Reihenfolge (Arc für O(1)-Clone in RenderScene)
    pub instance_ids: Arc<IndexSet<u64>>,
    /// Selektierte Wire-IDs in Klick-Reihenfolge
    pub wire_ids: Arc<IndexSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable Instanz-Selektion (CoW: klont nur wenn nötig).
    #[inline]
    pub fn instance_ids_mut(&mut self) -> &mut IndexSet<u64> {
        Arc::make_mut(&mut self.instance_ids)
    }

    /// Mutable Wire-Selektion (CoW: klont nur wenn nötig).
    #[inline]
    pub fn wire_ids_mut(&mut self) -> &mut IndexSet<u64> {
        Arc::make_mut(&mut self.wire_ids)
    }

    /// Selektiert einen Wire; hebt jede Bauteil-Selektion auf.
    pub fn select_wire(&mut self, wire_id: u64, additive: bool) {
        if !self.instance_ids.is_empty() {
            self.instance_ids_mut().clear();
        }
        let wires = self.wire_ids_mut();
        if !additive {
            wires.clear();
        }
        wires.insert(wire_id);
    }

    /// Selektiert ein Bauteil; hebt jede Wire-Selektion auf.
    pub fn select_instance(&mut self, instance_id: u64, additive: bool) {
        if !self.wire_ids.is_empty() {
            self.wire_ids_mut().clear();
        }
        let instances = self.instance_ids_mut();
        if !additive {
            instances.clear();
        }
        instances.insert(instance_id);
    }

    /// Hebt beide Selektionen auf.
    pub fn clear(&mut self) {
        if !self.instance_ids.is_empty() {
            self.instance_ids_mut().clear();
        }
        if !self.wire_ids.is_empty() {
            self.wire_ids_mut().clear();
        }
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.instance_ids.is_empty() && self.wire_ids.is_empty()
    }
}
