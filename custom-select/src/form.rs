//! The owning form: data collection, reset, restore and submission.

use std::sync::{Arc, RwLock};

use pagedom::{dispatch, DomEvent, EventTarget, ListenerId};
use url::form_urlencoded;

use crate::control::{ControlId, SelectControl};

/// Ordered `(name, value)` entries, as a form would submit them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization.
    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter())
            .finish()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Outcome of [`Form::request_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Submitted(FormData),
    /// Some controls failed validation; holds their names, or host ids for
    /// unnamed controls.
    Blocked { invalid: Vec<String> },
    /// A `submit` listener cancelled the submission.
    Cancelled,
}

/// A form owning select controls.
///
/// Cheap to clone; clones share the same controls and event target.
#[derive(Debug, Clone)]
pub struct Form {
    target: EventTarget,
    controls: Arc<RwLock<Vec<SelectControl>>>,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            target: EventTarget::new(name),
            controls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        self.target.id()
    }

    /// Event target that `change`, `reset` and `submit` events reach.
    pub fn target(&self) -> &EventTarget {
        &self.target
    }

    pub fn add_event_listener<F>(&self, kind: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&mut DomEvent) + Send + Sync + 'static,
    {
        self.target.add_event_listener(kind, listener)
    }

    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.target.remove_event_listener(id)
    }

    /// Make `control` part of this form. Returns false if it already was,
    /// or if its definition is not form-associated.
    pub fn associate(&self, control: &SelectControl) -> bool {
        if !control.is_form_associated() {
            log::debug!("[form {}] {} is not form-associated", self.name(), control.id());
            return false;
        }
        {
            let mut controls = self
                .controls
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if controls.iter().any(|c| c.id() == control.id()) {
                return false;
            }
            controls.push(control.clone());
        }
        control.form_associated(self.target.clone());
        true
    }

    /// Returns true if the control belonged to this form.
    pub fn disassociate(&self, control: &SelectControl) -> bool {
        let removed = {
            let mut controls = self
                .controls
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let before = controls.len();
            controls.retain(|c| c.id() != control.id());
            controls.len() != before
        };
        if removed {
            control.form_disassociated();
        }
        removed
    }

    /// Associated controls in association order.
    pub fn controls(&self) -> Vec<SelectControl> {
        self.controls
            .read()
            .map(|controls| controls.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls().iter().any(|c| c.id() == id)
    }

    /// Entries for named controls that have a form value.
    pub fn data(&self) -> FormData {
        self.controls()
            .iter()
            .filter_map(|control| Some((control.name()?, control.form_value()?)))
            .collect()
    }

    /// Reset every control unless a `reset` listener cancels.
    /// Returns false when cancelled.
    pub fn reset(&self) -> bool {
        let mut event = DomEvent::new("reset").bubbles(true).cancelable(true);
        if !dispatch(std::slice::from_ref(&self.target), &mut event) {
            log::debug!("[form {}] reset cancelled", self.name());
            return false;
        }

        for control in self.controls() {
            control.form_reset();
        }
        true
    }

    /// Restore saved entries. The first entry per name wins; controls
    /// without an entry are left alone.
    pub fn restore(&self, state: &FormData) {
        for control in self.controls() {
            let Some(name) = control.name() else {
                continue;
            };
            if let Some(value) = state.get(&name) {
                control.form_state_restore(value);
            }
        }
    }

    pub fn check_validity(&self) -> bool {
        // Every control is checked so each invalid one gets its event.
        self.controls()
            .iter()
            .fold(true, |valid, control| control.check_validity() && valid)
    }

    pub fn report_validity(&self) -> bool {
        self.controls()
            .iter()
            .fold(true, |valid, control| control.report_validity() && valid)
    }

    /// Validate, then dispatch a cancelable `submit` event.
    pub fn request_submit(&self) -> Submission {
        let invalid: Vec<String> = self
            .controls()
            .iter()
            .filter(|control| !control.report_validity())
            .map(|control| control.name().unwrap_or_else(|| control.host_id()))
            .collect();
        if !invalid.is_empty() {
            log::debug!("[form {}] submit blocked by {invalid:?}", self.name());
            return Submission::Blocked { invalid };
        }

        let mut event = DomEvent::new("submit").bubbles(true).cancelable(true);
        if !dispatch(std::slice::from_ref(&self.target), &mut event) {
            log::debug!("[form {}] submit cancelled", self.name());
            return Submission::Cancelled;
        }

        let data = self.data();
        log::debug!("[form {}] submitted {}", self.name(), data.to_urlencoded());
        Submission::Submitted(data)
    }
}
