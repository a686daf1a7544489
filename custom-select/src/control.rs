//! The form-associated select control.
//!
//! A [`SelectControl`] wraps a host element carrying `<option>` children.
//! On first connect it scans the options once, builds its shadow tree and
//! resolves a default value. Afterwards the host `value` attribute is the
//! single source of truth: every change runs the update contract
//!
//! 1. sync the form value,
//! 2. dispatch a bubbling, cancelable `change` event,
//! 3. re-render the selection from the current attribute,
//! 4. recompute validity.
//!
//! No lock is held while listeners run, so listeners may call back into the
//! control.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pagedom::element::{find_element, find_element_mut};
use pagedom::{dispatch, DomEvent, Element, EventTarget, ListenerId};

use crate::error::{Result, SelectError};
use crate::internals::{ElementInternals, ValidityFlags, ValidityReport};
use crate::option::{resolve_default, scan_options, SelectOption};
use crate::presentation::{self, PresentationModel};
use crate::registry::ElementDefinition;
use crate::style::{Part, StyleVars};

/// Tag name the control is registered under by default.
pub const TAG: &str = "custom-select";

/// Message attached to a missing required value.
pub const VALUE_MISSING_MESSAGE: &str = "Please select an item in the list.";

pub(crate) const VALUE: &str = "value";
pub(crate) const OPENED: &str = "opened";
pub(crate) const REQUIRED: &str = "required";
pub(crate) const PLACEHOLDER: &str = "placeholder";
pub(crate) const NAME: &str = "name";
const TABINDEX: &str = "tabindex";
const SELECTED: &str = "selected";

/// Identity of a control instance, stable across clones of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "select#{}", self.0)
    }
}

/// A dynamically typed property value, as a script host would pass it.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Str(String),
    Number(f64),
    Null,
    Undefined,
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "boolean",
            PropertyValue::Str(_) => "string",
            PropertyValue::Number(_) => "number",
            PropertyValue::Null => "null",
            PropertyValue::Undefined => "undefined",
        }
    }

    /// String conversion for values that have one. `Null` and `Undefined`
    /// have none.
    pub fn to_script_string(&self) -> Option<String> {
        match self {
            PropertyValue::Bool(b) => Some(b.to_string()),
            PropertyValue::Str(s) => Some(s.clone()),
            PropertyValue::Number(n) => Some(number_to_string(*n)),
            PropertyValue::Null | PropertyValue::Undefined => None,
        }
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".into()
    } else if (1e-6..1e21).contains(&n.abs()) {
        n.to_string()
    } else {
        // Shortest round-trip digits in exponent form, with an explicit `+`
        // on positive exponents: `1e+21`, `1.5e-7`.
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Null, Into::into)
    }
}

/// What a click inside a control did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// An option was clicked; its value was suggested and the list closed.
    Selected { value: Option<String> },
    /// The base box was clicked.
    Toggled { opened: bool },
    /// The clicked element is not a recognized part.
    Ignored,
}

struct ControlInner {
    id: ControlId,
    definition: ElementDefinition,
    host: Element,
    shadow: Element,
    options: Vec<SelectOption>,
    default_value: Option<String>,
    placeholder: Option<String>,
    rendered: bool,
    connected: bool,
    internals: ElementInternals,
    target: EventTarget,
    form: Option<EventTarget>,
    document: Option<EventTarget>,
}

impl ControlInner {
    fn part_id(&self, part: &str) -> String {
        format!("{}-{}", self.host.id, part)
    }

    fn anchor_id(&self) -> String {
        self.part_id("validation-anchor")
    }

    /// Scan options and build the shadow tree. Returns the resolved default.
    fn render_once(&mut self) -> Option<String> {
        self.placeholder = self.host.attribute(PLACEHOLDER).map(str::to_string);

        let host_id = self.host.id.clone();
        self.options = scan_options(&self.host, |index| format!("{host_id}-option-{index}"));

        let mut shadow = Element::new("#shadow-root").id(self.part_id("shadow"));
        shadow.push_child(
            Element::new("div")
                .id(self.part_id(Part::Base.as_str()))
                .part(Part::Base.as_str())
                .inner_text(self.placeholder.clone().unwrap_or_default()),
        );

        if !self.options.is_empty() {
            let items = self.options.iter().map(|option| {
                let item = Element::new("li")
                    .id(option.node.clone())
                    .part(Part::Option.as_str())
                    .attr(VALUE, option.value.clone())
                    .inner_text(option.label.clone());
                if option.initially_selected {
                    item.attr(SELECTED, "")
                } else {
                    item
                }
            });
            let list = Element::new("ul")
                .id(self.part_id(Part::Options.as_str()))
                .part(Part::Options.as_str())
                .children(items);
            shadow.push_child(
                Element::new("div")
                    .id(self.part_id(Part::OptionsWrapper.as_str()))
                    .part(Part::OptionsWrapper.as_str())
                    .child(list),
            );
        }

        shadow.push_child(
            Element::new("input")
                .id(self.anchor_id())
                .attr(TABINDEX, "-1"),
        );
        self.shadow = shadow;

        self.default_value = resolve_default(&self.options, self.placeholder.as_deref());
        log::debug!(
            "[{}] rendered {} options, default {:?}",
            self.id,
            self.options.len(),
            self.default_value
        );
        self.default_value.clone()
    }

    /// Mark the option matching the current value and show its label.
    /// Does nothing when no option matches.
    fn render_selection(&mut self) {
        let Some(current) = self.host.attribute(VALUE) else {
            return;
        };
        let Some(option) = self.options.iter().find(|o| o.value == current) else {
            return;
        };
        let (node, label) = (option.node.clone(), option.label.clone());

        self.clear_selected_markers();
        if let Some(element) = find_element_mut(&mut self.shadow, &node) {
            element.set_attribute(SELECTED, "");
        }
        self.set_base_text(label);
    }

    fn clear_selected_markers(&mut self) {
        for option in &self.options {
            if let Some(element) = find_element_mut(&mut self.shadow, &option.node) {
                element.remove_attribute(SELECTED);
            }
        }
    }

    fn set_base_text(&mut self, text: String) {
        let base_id = self.part_id(Part::Base.as_str());
        if let Some(base) = find_element_mut(&mut self.shadow, &base_id) {
            base.set_text(text);
        }
    }

    fn base_text(&self) -> String {
        find_element(&self.shadow, &self.part_id(Part::Base.as_str()))
            .map(Element::text_content)
            .unwrap_or_default()
    }

    /// Update internals from `required` and the current value. Returns validity.
    fn compute_validity(&mut self) -> bool {
        let missing = self.host.has_attribute(REQUIRED)
            && self.host.attribute(VALUE).is_none_or(str::is_empty);

        if missing {
            let anchor = self.anchor_id();
            self.internals.set_validity(
                ValidityFlags::value_missing(),
                VALUE_MISSING_MESSAGE,
                Some(&anchor),
            );
        } else {
            self.internals.set_valid();
        }
        !missing
    }

    /// Targets a `change` event visits: control, owning form, document.
    fn event_path(&self) -> Vec<EventTarget> {
        std::iter::once(self.target.clone())
            .chain(self.form.clone())
            .chain(self.document.clone())
            .collect()
    }

    fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| {
                find_element(&self.shadow, &option.node).is_some_and(|e| e.has_attribute(SELECTED))
            })
            .map(|option| option.value.clone())
            .collect()
    }
}

/// Handle to a select control.
///
/// Cheap to clone; all clones refer to the same instance.
#[derive(Clone)]
pub struct SelectControl {
    inner: Arc<RwLock<ControlInner>>,
}

impl fmt::Debug for SelectControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("SelectControl")
            .field("id", &inner.id)
            .field("host", &inner.host.id)
            .field("value", &inner.host.attribute(VALUE))
            .field("opened", &inner.host.has_attribute(OPENED))
            .finish()
    }
}

impl PartialEq for SelectControl {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SelectControl {
    /// Wrap host markup under the default definition. Nothing is scanned
    /// until the control is connected.
    pub fn new(host: Element) -> Self {
        Self::with_definition(host, ElementDefinition::default())
    }

    /// Wrap host markup. `definition` decides which attribute changes run
    /// their handlers and whether a form may own the control.
    pub fn with_definition(host: Element, definition: ElementDefinition) -> Self {
        let id = ControlId::next();
        log::debug!("[{id}] created for <{} id={}>", host.tag, host.id);

        let target = EventTarget::new(host.id.clone());
        let shadow = Element::new("#shadow-root").id(format!("{}-shadow", host.id));

        Self {
            inner: Arc::new(RwLock::new(ControlInner {
                id,
                definition,
                host,
                shadow,
                options: Vec::new(),
                default_value: None,
                placeholder: None,
                rendered: false,
                connected: false,
                internals: ElementInternals::new(),
                target,
                form: None,
                document: None,
            })),
        }
    }

    /// Build host markup from `(value, label)` pairs.
    pub fn from_options<V, L>(
        host_id: impl Into<String>,
        options: impl IntoIterator<Item = (V, L)>,
    ) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        let host = Element::new(TAG).id(host_id).children(
            options
                .into_iter()
                .map(|(value, label)| Element::new("option").attr(VALUE, value).inner_text(label)),
        );
        Self::new(host)
    }

    fn read(&self) -> RwLockReadGuard<'_, ControlInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ControlInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn id(&self) -> ControlId {
        self.read().id
    }

    /// Id of the host element.
    pub fn host_id(&self) -> String {
        self.read().host.id.clone()
    }

    /// Snapshot of the host element, light DOM included.
    pub fn host(&self) -> Element {
        self.read().host.clone()
    }

    /// Snapshot of the shadow tree. Empty before the first connect.
    pub fn shadow_root(&self) -> Element {
        self.read().shadow.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.read().connected
    }

    pub fn is_rendered(&self) -> bool {
        self.read().rendered
    }

    pub fn definition(&self) -> ElementDefinition {
        self.read().definition.clone()
    }

    /// Whether changes to `attribute` run their handler.
    pub fn observes(&self, attribute: &str) -> bool {
        self.read().definition.observes(attribute)
    }

    /// Whether a form may own this control.
    pub fn is_form_associated(&self) -> bool {
        self.read().definition.form_associated
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.read().host.attribute(name).map(str::to_string)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.read().host.has_attribute(name)
    }

    /// Set a host attribute. Changing an observed `value` runs the update
    /// contract even when no option matches; only the re-render step is
    /// skipped then.
    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let previous = self.write().host.set_attribute(name, value.clone());
        self.attribute_changed(name, previous, Some(value));
    }

    pub fn remove_attribute(&self, name: &str) {
        let previous = self.write().host.remove_attribute(name);
        if previous.is_some() {
            self.attribute_changed(name, previous, None);
        }
    }

    fn attribute_changed(&self, name: &str, old: Option<String>, new: Option<String>) {
        if old == new {
            return;
        }
        // Constraint validation follows `required` whether or not it is observed.
        if name == REQUIRED {
            self.update_validity();
        }
        if !self.observes(name) {
            return;
        }
        match name {
            VALUE => self.value_changed(new),
            PLACEHOLDER => self.placeholder_changed(new),
            REQUIRED => {}
            other => log::debug!("[{}] observed {other} changed to {new:?}", self.id()),
        }
    }

    /// Show the new placeholder while nothing is selected.
    fn placeholder_changed(&self, new: Option<String>) {
        let mut inner = self.write();
        if !inner.rendered {
            return;
        }
        inner.placeholder = new.clone();
        if inner.host.attribute(VALUE).is_none() {
            inner.set_base_text(new.unwrap_or_default());
        }
    }

    fn value_changed(&self, new: Option<String>) {
        let (id, path) = {
            let mut inner = self.write();
            inner.internals.set_form_value(new.clone());
            (inner.id, inner.event_path())
        };

        let mut event = DomEvent::new("change")
            .bubbles(true)
            .cancelable(true)
            .with_detail(new);
        if !dispatch(&path, &mut event) {
            log::debug!("[{id}] change was cancelled; the value stands");
        }

        self.write().render_selection();
        self.update_validity();
    }

    fn update_validity(&self) {
        let mut inner = self.write();
        if !inner.compute_validity() {
            inner.internals.report_validity();
        }
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    pub fn value(&self) -> Option<String> {
        self.get_attribute(VALUE)
    }

    /// Suggest a new value. Applied only when it equals a known option value.
    pub fn set_value(&self, value: impl ToString) {
        let value = value.to_string();
        let known = {
            let inner = self.read();
            inner.options.iter().any(|option| option.value == value)
        };
        if !known {
            log::trace!("[{}] ignoring unknown value {value:?}", self.id());
            return;
        }
        self.set_attribute(VALUE, value);
    }

    /// Captured default, if any.
    pub fn default_value(&self) -> Option<String> {
        self.read().default_value.clone()
    }

    pub fn placeholder(&self) -> Option<String> {
        self.read().placeholder.clone()
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.read().options.clone()
    }

    /// Text currently shown in the base box.
    pub fn display_text(&self) -> String {
        self.read().base_text()
    }

    /// Values of the options whose rendered part carries `selected`.
    pub fn selected_values(&self) -> Vec<String> {
        self.read().selected_values()
    }

    // -------------------------------------------------------------------------
    // Open state
    // -------------------------------------------------------------------------

    pub fn opened(&self) -> bool {
        self.has_attribute(OPENED)
    }

    pub fn set_opened(&self, opened: bool) {
        log::debug!("[{}] opened = {opened}", self.id());
        if opened {
            self.set_attribute(OPENED, "");
        } else {
            self.remove_attribute(OPENED);
        }
    }

    /// Flip the open state and return the new one.
    pub fn toggle(&self) -> bool {
        self.set_opened(!self.opened());
        self.opened()
    }

    // -------------------------------------------------------------------------
    // Property bridge
    // -------------------------------------------------------------------------

    /// Assign a property the way a script would.
    ///
    /// `opened` only accepts booleans and fails otherwise. `value` converts
    /// its argument to a string and applies [`set_value`](Self::set_value);
    /// `Null` and `Undefined` are ignored.
    pub fn set_property(&self, name: &str, value: impl Into<PropertyValue>) -> Result<()> {
        let value = value.into();
        match name {
            OPENED => match value {
                PropertyValue::Bool(opened) => {
                    self.set_opened(opened);
                    Ok(())
                }
                other => Err(SelectError::TypeMismatch {
                    property: OPENED,
                    expected: "boolean",
                    found: other.type_name(),
                }),
            },
            VALUE => {
                match value.to_script_string() {
                    Some(value) => self.set_value(value),
                    None => log::trace!("[{}] ignoring {} value", self.id(), value.type_name()),
                }
                Ok(())
            }
            other => Err(SelectError::UnknownProperty(other.to_string())),
        }
    }

    pub fn get_property(&self, name: &str) -> Result<PropertyValue> {
        match name {
            OPENED => Ok(PropertyValue::Bool(self.opened())),
            VALUE => Ok(self.value().into()),
            other => Err(SelectError::UnknownProperty(other.to_string())),
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn add_event_listener<F>(&self, kind: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&mut DomEvent) + Send + Sync + 'static,
    {
        let target = self.read().target.clone();
        target.add_event_listener(kind, listener)
    }

    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        let target = self.read().target.clone();
        target.remove_event_listener(id)
    }

    // -------------------------------------------------------------------------
    // Validity
    // -------------------------------------------------------------------------

    /// Snapshot of the control's internals.
    pub fn internals(&self) -> ElementInternals {
        self.read().internals.clone()
    }

    pub fn form_value(&self) -> Option<String> {
        self.read().internals.form_value().map(str::to_string)
    }

    pub fn validity(&self) -> ValidityFlags {
        self.read().internals.validity()
    }

    pub fn validation_message(&self) -> String {
        self.read().internals.validation_message().to_string()
    }

    pub fn take_validity_reports(&self) -> Vec<ValidityReport> {
        self.write().internals.take_reports()
    }

    /// Current validity. When invalid, dispatches a cancelable `invalid`
    /// event at the control.
    pub fn check_validity(&self) -> bool {
        self.fire_invalid().is_none()
    }

    /// Like [`check_validity`](Self::check_validity), and records a report
    /// unless a listener cancelled the `invalid` event.
    pub fn report_validity(&self) -> bool {
        match self.fire_invalid() {
            None => true,
            Some(true) => {
                self.write().internals.report_validity();
                false
            }
            Some(false) => false,
        }
    }

    /// `None` when valid; otherwise whether the `invalid` event went uncancelled.
    fn fire_invalid(&self) -> Option<bool> {
        let (valid, target) = {
            let inner = self.read();
            (inner.internals.check_validity(), inner.target.clone())
        };
        if valid {
            return None;
        }

        let mut event = DomEvent::new("invalid").cancelable(true);
        Some(dispatch(std::slice::from_ref(&target), &mut event))
    }

    // -------------------------------------------------------------------------
    // Form callbacks
    // -------------------------------------------------------------------------

    /// Value of the `name` attribute, if present and non-empty.
    pub fn name(&self) -> Option<String> {
        self.get_attribute(NAME).filter(|name| !name.is_empty())
    }

    /// Return to the captured default, or to the valueless placeholder state.
    pub fn form_reset(&self) {
        log::debug!("[{}] form reset", self.id());
        match self.default_value() {
            Some(default) => self.set_value(default),
            None => {
                {
                    let mut inner = self.write();
                    inner.clear_selected_markers();
                    let text = inner.placeholder.clone().unwrap_or_default();
                    inner.set_base_text(text);
                }
                self.remove_attribute(VALUE);
            }
        }
    }

    /// Restore a value saved by the form; unknown values are ignored.
    pub fn form_state_restore(&self, state: &str) {
        log::debug!("[{}] restoring {state:?}", self.id());
        self.set_value(state);
    }

    /// Record the owning form so `change` events bubble through it.
    pub fn form_associated(&self, form: EventTarget) {
        log::debug!("[{}] associated with form {}", self.id(), form.id());
        self.write().form = Some(form);
    }

    pub fn form_disassociated(&self) {
        self.write().form = None;
    }

    /// Id of the owning form's event target.
    pub fn form_id(&self) -> Option<String> {
        self.read().form.as_ref().map(|form| form.id().to_string())
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach to a document.
    ///
    /// The first connect scans options, builds the shadow tree and applies
    /// the default. Every connect makes the host focusable and recomputes
    /// validity.
    pub(crate) fn connected_callback(&self, document: EventTarget) {
        let first_connect = {
            let mut inner = self.write();
            inner.document = Some(document);
            inner.connected = true;
            !std::mem::replace(&mut inner.rendered, true)
        };

        if first_connect {
            let default = self.write().render_once();
            match default {
                Some(value) => {
                    self.write().host.set_attribute(VALUE, value.clone());
                    if self.observes(VALUE) {
                        self.value_changed(Some(value));
                    }
                }
                None => {
                    let stray = self.write().host.remove_attribute(VALUE);
                    if let Some(stray) = stray {
                        log::debug!("[{}] dropped value {stray:?} without a default", self.id());
                    }
                }
            }
        } else {
            log::debug!("[{}] reconnected; keeping state", self.id());
        }

        {
            let mut inner = self.write();
            if !inner.host.has_attribute(TABINDEX) {
                inner.host.set_attribute(TABINDEX, "0");
            }
        }
        self.update_validity();
    }

    pub(crate) fn disconnected_callback(&self) {
        let mut inner = self.write();
        inner.connected = false;
        inner.document = None;
        log::debug!("[{}] disconnected", inner.id);
    }

    // -------------------------------------------------------------------------
    // Click handling
    // -------------------------------------------------------------------------

    /// Whether the host, its light DOM or its shadow tree has `element_id`.
    pub fn contains_element(&self, element_id: &str) -> bool {
        let inner = self.read();
        find_element(&inner.host, element_id).is_some()
            || find_element(&inner.shadow, element_id).is_some()
    }

    /// React to a click whose innermost target is `element_id`.
    ///
    /// Only the target's own `part` attribute counts; ancestors are not
    /// consulted.
    pub fn handle_click(&self, element_id: &str) -> ClickAction {
        let clicked = {
            let inner = self.read();
            find_element(&inner.shadow, element_id)
                .or_else(|| find_element(&inner.host, element_id))
                .map(|element| {
                    let part = element.attribute("part").and_then(Part::parse);
                    (part, element.attribute(VALUE).map(str::to_string))
                })
        };

        match clicked {
            Some((Some(Part::Option), value)) => {
                if let Some(value) = &value {
                    self.set_value(value);
                }
                self.set_opened(false);
                ClickAction::Selected { value }
            }
            Some((Some(Part::Base), _)) => ClickAction::Toggled {
                opened: self.toggle(),
            },
            _ => ClickAction::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Terminal rendering of the control. Element ids match the shadow tree,
    /// so hit testing resolves into [`handle_click`](Self::handle_click).
    pub fn presentation(&self, vars: &StyleVars) -> Element {
        let model = {
            let inner = self.read();
            PresentationModel {
                host_id: inner.host.id.clone(),
                base_id: inner.part_id(Part::Base.as_str()),
                wrapper_id: inner.part_id(Part::OptionsWrapper.as_str()),
                list_id: inner.part_id(Part::Options.as_str()),
                display_text: inner.base_text(),
                opened: inner.host.has_attribute(OPENED),
                options: inner.options.clone(),
                selected: inner.selected_values().into_iter().next(),
            }
        };
        presentation::build(&model, vars)
    }
}
