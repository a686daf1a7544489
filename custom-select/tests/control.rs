use std::sync::{Arc, Mutex};

use custom_select::{
    Page, PropertyValue, SelectControl, SelectError, VALUE_MISSING_MESSAGE,
};
use pagedom::element::{find_element, find_part};
use pagedom::focus::is_tabbable;
use pagedom::{DomEvent, Element};

fn host(id: &str, options: &[(&str, &str, bool)]) -> Element {
    Element::new("custom-select")
        .id(id)
        .children(options.iter().map(|(value, label, selected)| {
            let option = Element::new("option").attr("value", *value).inner_text(*label);
            if *selected {
                option.attr("selected", "")
            } else {
                option
            }
        }))
}

fn greek(id: &str) -> Element {
    host(
        id,
        &[
            ("a", "Alpha", false),
            ("b", "Beta", false),
            ("c", "Gamma", false),
        ],
    )
}

fn connect(host: Element) -> (Page, SelectControl) {
    let page = Page::new();
    let control = SelectControl::new(host);
    page.connect(&control);
    (page, control)
}

type Log = Arc<Mutex<Vec<Option<String>>>>;

/// Record the detail of every `change` event the control emits.
fn record_changes(control: &SelectControl) -> Log {
    let log: Log = Arc::default();
    let sink = Arc::clone(&log);
    control.add_event_listener("change", move |event: &mut DomEvent| {
        if let Ok(mut sink) = sink.lock() {
            sink.push(event.detail().map(str::to_string));
        }
    });
    log
}

fn changes(log: &Log) -> Vec<Option<String>> {
    log.lock().map(|g| g.clone()).unwrap_or_default()
}

// ============================================================================
// Default resolution
// ============================================================================

#[test]
fn test_flagged_option_is_default() {
    let (_page, control) = connect(host(
        "flagged",
        &[
            ("a", "Alpha", false),
            ("b", "Beta", true),
            ("c", "Gamma", false),
        ],
    ));

    assert_eq!(control.value().as_deref(), Some("b"));
    assert_eq!(control.default_value().as_deref(), Some("b"));
    assert_eq!(control.selected_values(), vec!["b"]);
    assert_eq!(control.display_text(), "Beta");
    assert_eq!(control.form_value().as_deref(), Some("b"));
}

#[test]
fn test_last_flagged_option_wins() {
    let (_page, control) = connect(host(
        "two-flags",
        &[
            ("a", "Alpha", true),
            ("b", "Beta", false),
            ("c", "Gamma", true),
        ],
    ));

    assert_eq!(control.value().as_deref(), Some("c"));
    assert_eq!(control.selected_values(), vec!["c"]);
}

#[test]
fn test_first_option_is_default_without_placeholder() {
    let (_page, control) = connect(greek("first"));

    assert_eq!(control.value().as_deref(), Some("a"));
    assert_eq!(control.selected_values(), vec!["a"]);
    assert_eq!(control.display_text(), "Alpha");
}

#[test]
fn test_placeholder_means_no_default() {
    let (_page, control) = connect(greek("placeholder").attr("placeholder", "Choose one"));

    assert_eq!(control.value(), None);
    assert_eq!(control.default_value(), None);
    assert_eq!(control.form_value(), None);
    assert_eq!(control.display_text(), "Choose one");
    assert!(control.selected_values().is_empty());
}

#[test]
fn test_stray_value_dropped_without_default() {
    let (_page, control) = connect(
        greek("stray")
            .attr("placeholder", "Choose one")
            .attr("value", "b"),
    );

    assert_eq!(control.value(), None);
    assert!(!control.has_attribute("value"));
}

#[test]
fn test_option_without_value_uses_text() {
    let markup = Element::new("custom-select")
        .id("textual")
        .child(Element::new("option").inner_text("  Red  "))
        .child(Element::new("option").inner_text("Light   Blue"));
    let (_page, control) = connect(markup);

    let values: Vec<String> = control.options().into_iter().map(|o| o.value).collect();
    assert_eq!(values, vec!["Red", "Light Blue"]);
    assert_eq!(control.value().as_deref(), Some("Red"));
    assert_eq!(control.display_text(), "  Red  ");
}

#[test]
fn test_options_in_nested_groups_are_scanned_in_order() {
    let markup = Element::new("custom-select")
        .id("grouped")
        .child(
            Element::new("optgroup")
                .child(Element::new("option").attr("value", "x").inner_text("X")),
        )
        .child(Element::new("option").attr("value", "y").inner_text("Y"));
    let (_page, control) = connect(markup);

    let values: Vec<String> = control.options().into_iter().map(|o| o.value).collect();
    assert_eq!(values, vec!["x", "y"]);
}

#[test]
fn test_no_options_degrades_gracefully() {
    let (_page, control) = connect(Element::new("custom-select").id("empty"));
    let shadow = control.shadow_root();

    assert_eq!(control.value(), None);
    assert_eq!(control.display_text(), "");
    assert!(find_part(&shadow, "base").is_some());
    assert!(find_part(&shadow, "options-wrapper").is_none());

    control.set_value("anything");
    assert_eq!(control.value(), None);
    assert!(control.toggle());
}

#[test]
fn test_shadow_tree_mirrors_options() {
    let (_page, control) = connect(greek("mirror"));
    let shadow = control.shadow_root();

    let list = find_part(&shadow, "options").expect("options part");
    assert_eq!(list.tag, "ul");
    let items: Vec<(&str, String)> = list
        .children_slice()
        .iter()
        .map(|li| (li.attribute("value").unwrap_or_default(), li.text_content()))
        .collect();
    assert_eq!(
        items,
        vec![
            ("a", "Alpha".to_string()),
            ("b", "Beta".to_string()),
            ("c", "Gamma".to_string()),
        ]
    );
    assert!(list.children_slice().iter().all(|li| li.has_part("option")));
}

// ============================================================================
// Value mutation
// ============================================================================

#[test]
fn test_set_value_updates_display_and_markers() {
    let (_page, control) = connect(greek("setter"));

    control.set_value("c");

    assert_eq!(control.value().as_deref(), Some("c"));
    assert_eq!(control.display_text(), "Gamma");
    assert_eq!(control.selected_values(), vec!["c"]);
    assert_eq!(control.form_value().as_deref(), Some("c"));
}

#[test]
fn test_set_same_value_emits_once() {
    let (_page, control) = connect(greek("idempotent"));
    let log = record_changes(&control);

    control.set_value("b");
    control.set_value("b");

    assert_eq!(changes(&log), vec![Some("b".to_string())]);
    assert_eq!(control.selected_values(), vec!["b"]);
}

#[test]
fn test_unknown_value_is_ignored() {
    let (_page, control) = connect(greek("unknown"));
    let log = record_changes(&control);

    control.set_value("zzz");

    assert_eq!(control.value().as_deref(), Some("a"));
    assert_eq!(control.display_text(), "Alpha");
    assert_eq!(control.selected_values(), vec!["a"]);
    assert!(changes(&log).is_empty());
}

#[test]
fn test_numbers_are_stringified() {
    let (_page, control) = connect(host(
        "numeric",
        &[
            ("1", "One", false),
            ("2", "Two", false),
            ("1.5", "One and a half", false),
        ],
    ));

    control.set_value(1.5);
    assert_eq!(control.value().as_deref(), Some("1.5"));

    control.set_value(2);
    assert_eq!(control.value().as_deref(), Some("2"));

    control.set_property("value", 1.0).unwrap();
    assert_eq!(control.value().as_deref(), Some("1"));
}

#[test]
fn test_extreme_numbers_use_exponent_form() {
    let (_page, control) = connect(host(
        "exponent",
        &[
            ("0", "Zero", false),
            ("1e+21", "Huge", false),
            ("1e-7", "Tiny", false),
        ],
    ));

    control.set_property("value", 1e21).unwrap();
    assert_eq!(control.value().as_deref(), Some("1e+21"));
    assert_eq!(control.display_text(), "Huge");

    control.set_property("value", 1e-7).unwrap();
    assert_eq!(control.value().as_deref(), Some("1e-7"));
}

#[test]
fn test_change_event_shape() {
    let (_page, control) = connect(greek("shape"));
    let seen: Arc<Mutex<Vec<(bool, bool, Option<String>)>>> = Arc::default();
    {
        let seen = Arc::clone(&seen);
        control.add_event_listener("change", move |event: &mut DomEvent| {
            if let Ok(mut seen) = seen.lock() {
                seen.push((
                    event.is_bubbling(),
                    event.is_cancelable(),
                    event.target().map(str::to_string),
                ));
            }
        });
    }

    control.set_value("b");

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen, vec![(true, true, Some("shape".to_string()))]);
}

#[test]
fn test_cancelling_change_keeps_new_value() {
    let (_page, control) = connect(greek("cancel"));
    control.add_event_listener("change", |event: &mut DomEvent| event.prevent_default());

    control.set_value("b");

    assert_eq!(control.value().as_deref(), Some("b"));
    assert_eq!(control.display_text(), "Beta");
}

#[test]
fn test_listener_reassignment_converges() {
    let (_page, control) = connect(greek("reentrant"));
    let log = record_changes(&control);
    {
        let inner = control.clone();
        control.add_event_listener("change", move |event: &mut DomEvent| {
            if event.detail() == Some("b") {
                inner.set_value("c");
            }
        });
    }

    control.set_value("b");

    assert_eq!(
        changes(&log),
        vec![Some("b".to_string()), Some("c".to_string())]
    );
    assert_eq!(control.value().as_deref(), Some("c"));
    assert_eq!(control.display_text(), "Gamma");
    assert_eq!(control.selected_values(), vec!["c"]);
    assert_eq!(control.form_value().as_deref(), Some("c"));
}

#[test]
fn test_unknown_value_attribute_keeps_display() {
    let (_page, control) = connect(greek("raw-attr"));
    let log = record_changes(&control);

    control.set_attribute("value", "zzz");

    assert_eq!(control.value().as_deref(), Some("zzz"));
    assert_eq!(control.form_value().as_deref(), Some("zzz"));
    assert_eq!(control.display_text(), "Alpha");
    assert_eq!(control.selected_values(), vec!["a"]);
    assert_eq!(changes(&log), vec![Some("zzz".to_string())]);
}

// ============================================================================
// Open state
// ============================================================================

#[test]
fn test_opened_rejects_non_boolean() {
    let (_page, control) = connect(greek("typed"));

    for value in [
        PropertyValue::from("true"),
        PropertyValue::from(1),
        PropertyValue::Null,
        PropertyValue::Undefined,
    ] {
        let found = value.type_name();
        assert_eq!(
            control.set_property("opened", value),
            Err(SelectError::TypeMismatch {
                property: "opened",
                expected: "boolean",
                found,
            })
        );
        assert!(!control.opened());
    }

    control.set_opened(true);
    assert!(control.set_property("opened", "no").is_err());
    assert!(control.opened());
}

#[test]
fn test_toggle_alternates() {
    let (_page, control) = connect(greek("toggle"));

    assert!(control.toggle());
    assert!(control.opened());
    assert!(!control.toggle());
    assert!(!control.opened());
    assert!(control.toggle());

    control.set_opened(true);
    assert!(!control.toggle());
}

#[test]
fn test_opened_reflects_attribute() {
    let (_page, control) = connect(greek("reflect"));

    control.set_property("opened", true).unwrap();
    assert!(control.has_attribute("opened"));
    assert_eq!(control.get_property("opened"), Ok(PropertyValue::Bool(true)));

    control.remove_attribute("opened");
    assert!(!control.opened());
}

#[test]
fn test_property_bridge() {
    let (_page, control) = connect(greek("bridge"));

    assert_eq!(
        control.get_property("value"),
        Ok(PropertyValue::Str("a".into()))
    );
    assert_eq!(
        control.set_property("colour", true),
        Err(SelectError::UnknownProperty("colour".into()))
    );
    assert!(control.get_property("colour").is_err());

    control.set_property("value", PropertyValue::Null).unwrap();
    assert_eq!(control.value().as_deref(), Some("a"));
}

// ============================================================================
// Validity
// ============================================================================

#[test]
fn test_required_without_value_is_invalid() {
    let (_page, control) = connect(
        greek("required")
            .attr("placeholder", "Choose one")
            .attr("required", ""),
    );

    assert!(!control.check_validity());
    assert!(control.validity().value_missing);
    assert_eq!(control.validation_message(), VALUE_MISSING_MESSAGE);
    assert!(!control.take_validity_reports().is_empty());

    control.set_value("b");
    assert!(control.check_validity());
    assert_eq!(control.validation_message(), "");
}

#[test]
fn test_validation_anchor_is_not_tabbable() {
    let (_page, control) = connect(
        greek("anchor")
            .attr("placeholder", "Choose one")
            .attr("required", ""),
    );

    let internals = control.internals();
    let anchor_id = internals.validation_anchor().expect("anchored failure");
    let shadow = control.shadow_root();
    let anchor = find_element(&shadow, anchor_id).expect("anchor in shadow tree");

    assert_eq!(anchor.tab_index(), Some(-1));
    assert!(!is_tabbable(anchor));
    assert!(internals.will_validate());
}

#[test]
fn test_required_attribute_changes_recompute_validity() {
    let (_page, control) = connect(greek("late-required").attr("placeholder", "Choose one"));
    assert!(control.check_validity());

    control.set_attribute("required", "");
    assert!(!control.check_validity());

    control.remove_attribute("required");
    assert!(control.check_validity());
}

#[test]
fn test_flagged_empty_value_fails_required() {
    let (_page, control) = connect(
        host(
            "empty-flag",
            &[("", "None", true), ("a", "Alpha", false)],
        )
        .attr("required", ""),
    );

    assert_eq!(control.value().as_deref(), Some(""));
    assert_eq!(control.display_text(), "None");
    assert!(!control.check_validity());
}

#[test]
fn test_check_validity_fires_invalid_event() {
    let (_page, control) = connect(
        greek("invalid-event")
            .attr("placeholder", "Choose one")
            .attr("required", ""),
    );
    control.take_validity_reports();

    let fired = Arc::new(Mutex::new(0));
    {
        let fired = Arc::clone(&fired);
        control.add_event_listener("invalid", move |event: &mut DomEvent| {
            assert!(!event.is_bubbling());
            if let Ok(mut fired) = fired.lock() {
                *fired += 1;
            }
            event.prevent_default();
        });
    }

    assert!(!control.check_validity());
    assert!(!control.report_validity());

    assert_eq!(*fired.lock().unwrap(), 2);
    // The listener cancelled the event, so nothing was reported.
    assert!(control.take_validity_reports().is_empty());
}

#[test]
fn test_report_validity_records_report() {
    let (_page, control) = connect(
        greek("report")
            .attr("placeholder", "Choose one")
            .attr("required", ""),
    );
    control.take_validity_reports();

    assert!(!control.report_validity());

    let reports = control.take_validity_reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].message, VALUE_MISSING_MESSAGE);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_host_becomes_focusable() {
    let (_page, control) = connect(greek("focus"));
    assert_eq!(control.get_attribute("tabindex").as_deref(), Some("0"));

    let (_page, control) = connect(greek("focus-kept").attr("tabindex", "3"));
    assert_eq!(control.get_attribute("tabindex").as_deref(), Some("3"));
}

#[test]
fn test_nothing_rendered_before_connect() {
    let control = SelectControl::new(greek("detached"));

    assert!(!control.is_rendered());
    assert!(control.options().is_empty());
    control.set_value("a");
    assert_eq!(control.value(), None);
}

#[test]
fn test_reconnect_keeps_state() {
    let (page, control) = connect(greek("reconnect"));
    control.set_value("c");

    page.disconnect(&control);
    assert!(!control.is_connected());
    assert!(!page.coordinator().contains(control.id()));

    page.connect(&control);
    assert!(control.is_connected());
    assert!(page.coordinator().contains(control.id()));
    assert_eq!(control.options().len(), 3);
    assert_eq!(control.value().as_deref(), Some("c"));
    assert_eq!(control.display_text(), "Gamma");
    assert_eq!(control.default_value().as_deref(), Some("a"));
}

#[test]
fn test_from_options_builds_markup() {
    let control = SelectControl::from_options("built", [("x", "Ex"), ("y", "Why")]);
    let host = control.host();

    assert_eq!(host.tag, "custom-select");
    assert_eq!(host.children_slice().len(), 2);

    let page = Page::new();
    page.connect(&control);
    assert_eq!(control.value().as_deref(), Some("x"));
    assert_eq!(control.display_text(), "Ex");
}
