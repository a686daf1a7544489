//! The host document: connects controls and routes clicks.

use pagedom::{hit_test, DomEvent, Element, EventTarget, LayoutResult, ListenerId};

use crate::control::{ClickAction, ControlId, SelectControl};
use crate::coordinator::Coordinator;

/// Result of routing one document click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Control the click landed in, if any.
    pub origin: Option<ControlId>,
    /// Controls closed because the click happened elsewhere.
    pub closed: Vec<ControlId>,
    pub action: ClickAction,
}

/// A page hosting select controls.
///
/// Owns the document event target that `change` events bubble to, and the
/// coordinator enforcing a single open control. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Page {
    document: EventTarget,
    coordinator: Coordinator,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            document: EventTarget::new("document"),
            coordinator: Coordinator::new(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// Insert a control into the document.
    pub fn connect(&self, control: &SelectControl) {
        log::debug!("[page] connect {}", control.id());
        control.connected_callback(self.document.clone());
        self.coordinator.register(control);
    }

    /// Remove a control from the document. Its state is kept for a later
    /// [`connect`](Self::connect).
    pub fn disconnect(&self, control: &SelectControl) {
        log::debug!("[page] disconnect {}", control.id());
        self.coordinator.unregister(control.id());
        control.disconnected_callback();
    }

    /// Connected controls in connection order.
    pub fn controls(&self) -> Vec<SelectControl> {
        self.coordinator.instances()
    }

    pub fn add_event_listener<F>(&self, kind: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&mut DomEvent) + Send + Sync + 'static,
    {
        self.document.add_event_listener(kind, listener)
    }

    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.document.remove_event_listener(id)
    }

    /// Route a click whose innermost target is `target_id`.
    ///
    /// Every open control other than the one clicked is closed first. A
    /// click inside a control then acts on the clicked part.
    pub fn click(&self, target_id: &str) -> ClickOutcome {
        let origin = self.coordinator.instance_containing(target_id);
        let origin_id = origin.as_ref().map(SelectControl::id);
        let closed = self.coordinator.close_all_except(origin_id);

        let action = match &origin {
            Some(control) => control.handle_click(target_id),
            None => ClickAction::Ignored,
        };

        log::debug!(
            "[page] click {target_id}: origin {:?}, closed {:?}, {:?}",
            origin_id.map(|id| id.to_string()),
            closed,
            action
        );

        ClickOutcome {
            origin: origin_id,
            closed,
            action,
        }
    }

    /// Route a click at terminal coordinates over a rendered tree.
    ///
    /// Points that hit no clickable element count as clicks outside every
    /// control.
    pub fn click_at(&self, x: u16, y: u16, layout: &LayoutResult, root: &Element) -> ClickOutcome {
        match hit_test(layout, root, x, y) {
            Some(target) => self.click(&target),
            None => self.click(self.document.id()),
        }
    }
}
