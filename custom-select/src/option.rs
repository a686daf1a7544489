//! Options scanned from host markup.

use pagedom::element::query_all;
use pagedom::Element;

/// One entry of the dropdown, derived once from an `<option>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Text shown in the list and in the base box.
    pub label: String,
    /// Whether the markup carried the `selected` attribute.
    pub initially_selected: bool,
    /// Id of the rendered `option` part in the control's shadow tree.
    pub node: String,
}

impl SelectOption {
    /// Read value, label and selected flag from an `<option>` element.
    ///
    /// Without a `value` attribute the value falls back to the text with
    /// ASCII whitespace stripped and collapsed.
    pub fn from_element(element: &Element, node: impl Into<String>) -> Self {
        let label = element.text_content();
        let value = match element.attribute("value") {
            Some(value) => value.to_string(),
            None => collapse_whitespace(&label),
        };

        Self {
            value,
            label,
            initially_selected: element.has_attribute("selected"),
            node: node.into(),
        }
    }
}

/// Scan every `<option>` below `host` in document order.
///
/// `node_id` names the rendered part for the option at a given index.
pub fn scan_options(host: &Element, node_id: impl Fn(usize) -> String) -> Vec<SelectOption> {
    query_all(host, "option")
        .into_iter()
        .enumerate()
        .map(|(index, element)| SelectOption::from_element(element, node_id(index)))
        .collect()
}

/// Pick the value the control starts with and returns to on reset.
///
/// The last option flagged `selected` wins. Without one, a non-empty
/// placeholder means there is no default; otherwise the first option is.
pub fn resolve_default(options: &[SelectOption], placeholder: Option<&str>) -> Option<String> {
    if let Some(flagged) = options.iter().rev().find(|o| o.initially_selected) {
        return Some(flagged.value.clone());
    }

    if placeholder.is_some_and(|p| !p.is_empty()) {
        return None;
    }

    options.first().map(|o| o.value.clone())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, selected: bool) -> SelectOption {
        SelectOption {
            value: value.into(),
            label: value.to_uppercase(),
            initially_selected: selected,
            node: format!("node-{value}"),
        }
    }

    #[test]
    fn test_value_falls_back_to_collapsed_text() {
        let element = Element::new("option").inner_text("  New\n  York  ");
        let option = SelectOption::from_element(&element, "n");

        assert_eq!(option.value, "New York");
        assert_eq!(option.label, "  New\n  York  ");
        assert!(!option.initially_selected);
    }

    #[test]
    fn test_explicit_empty_value_is_kept() {
        let element = Element::new("option").attr("value", "").inner_text("None");
        assert_eq!(SelectOption::from_element(&element, "n").value, "");
    }

    #[test]
    fn test_last_flagged_option_wins() {
        let options = [option("a", true), option("b", false), option("c", true)];
        assert_eq!(resolve_default(&options, Some("Pick")), Some("c".into()));
    }

    #[test]
    fn test_placeholder_suppresses_default() {
        let options = [option("a", false), option("b", false)];
        assert_eq!(resolve_default(&options, Some("Pick")), None);
        assert_eq!(resolve_default(&options, Some("")), Some("a".into()));
        assert_eq!(resolve_default(&options, None), Some("a".into()));
    }

    #[test]
    fn test_no_options_no_default() {
        assert_eq!(resolve_default(&[], None), None);
    }
}
