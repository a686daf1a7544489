//! Page-scoped registry keeping at most one control open.

use std::sync::{Arc, RwLock};

use crate::control::{ControlId, SelectControl};

/// Registry of the controls connected to one page.
///
/// Which control is open is not stored; it is re-derived by asking every
/// registered control. Cheap to clone; clones share the registry.
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    instances: Arc<RwLock<Vec<SelectControl>>>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control. Registering the same control twice keeps one entry.
    pub fn register(&self, control: &SelectControl) {
        let id = control.id();
        let mut instances = self
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if instances.iter().any(|c| c.id() == id) {
            return;
        }
        log::debug!("[coordinator] register {id}");
        instances.push(control.clone());
    }

    /// Returns true if the control was registered.
    pub fn unregister(&self, id: ControlId) -> bool {
        let mut instances = self
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = instances.len();
        instances.retain(|c| c.id() != id);
        let removed = instances.len() != before;
        if removed {
            log::debug!("[coordinator] unregister {id}");
        }
        removed
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.instances().iter().any(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the registered controls in registration order.
    pub fn instances(&self) -> Vec<SelectControl> {
        self.instances
            .read()
            .map(|instances| instances.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Controls that currently report themselves open.
    pub fn open_instances(&self) -> Vec<SelectControl> {
        self.instances()
            .into_iter()
            .filter(SelectControl::opened)
            .collect()
    }

    /// Close every open control except `keep`. Returns the ids it closed.
    pub fn close_all_except(&self, keep: Option<ControlId>) -> Vec<ControlId> {
        let mut closed = Vec::new();
        for control in self.open_instances() {
            let id = control.id();
            if Some(id) == keep {
                continue;
            }
            control.set_opened(false);
            closed.push(id);
        }
        closed
    }

    /// The registered control owning `element_id`, if any.
    pub fn instance_containing(&self, element_id: &str) -> Option<SelectControl> {
        self.instances()
            .into_iter()
            .find(|control| control.contains_element(element_id))
    }
}
