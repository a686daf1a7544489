use custom_select::style::DEFAULT_VARS;
use custom_select::{Page, SelectError, StyleVars};
use pagedom::element::find_part;
use pagedom::render::render_to_buffer;
use pagedom::{Buffer, Color, ColorContext, Element, Rect, Size, Theme};

// ============================================================================
// Style variables
// ============================================================================

#[test]
fn test_defaults_in_declaration_order() {
    let vars = StyleVars::new();
    let names: Vec<&str> = vars.iter().map(|(name, _)| name).collect();

    assert_eq!(names.len(), 20);
    assert_eq!(names.first(), Some(&"--select-border-radius"));
    assert_eq!(names.last(), Some(&"--arrow-icon"));
    assert_eq!(vars.get("--base-border-color"), Some("black"));
    assert_eq!(vars.get("--options-max-display-items"), Some("5"));
    assert_eq!(vars.get("--transition-duration"), Some("0.3s"));
    assert_eq!(vars.get("--arrow-icon"), Some("▼"));
    assert_eq!(vars.get("--not-declared"), None);
}

#[test]
fn test_override_and_unset() {
    let mut vars = StyleVars::new();

    vars.set("--base-border-color", "tomato").unwrap();
    assert_eq!(vars.get("--base-border-color"), Some("tomato"));
    assert!(
        vars.iter()
            .any(|(name, value)| name == "--base-border-color" && value == "tomato")
    );

    assert!(vars.unset("--base-border-color"));
    assert_eq!(vars.get("--base-border-color"), Some("black"));
    assert!(!vars.unset("--base-border-color"));
}

#[test]
fn test_unknown_variable_is_an_error() {
    let mut vars = StyleVars::new();

    assert_eq!(
        vars.set("--made-up", "1"),
        Err(SelectError::UnknownVariable("--made-up".into()))
    );
    assert!(DEFAULT_VARS.iter().all(|(name, _)| StyleVars::is_declared(name)));
}

#[test]
fn test_vars_resolve_as_theme_colors() {
    let mut vars = StyleVars::new();

    assert_eq!(vars.resolve("--base-border-color"), Some(Color::rgb(0, 0, 0)));
    assert_eq!(
        vars.resolve("--base-border-color-opened"),
        Some(Color::rgb(173, 216, 230))
    );
    assert_eq!(vars.resolve("--transition-duration"), None);

    vars.set("--base-color-opened", "#f00").unwrap();
    let ctx = ColorContext::new(&vars);
    assert_eq!(
        ctx.resolve(&Color::var("--base-color-opened")),
        Color::rgb(255, 0, 0)
    );
}

// ============================================================================
// Presentation
// ============================================================================

fn connected(values: &[(&str, &str)]) -> custom_select::SelectControl {
    let control = custom_select::SelectControl::from_options("shown", values.iter().copied());
    Page::new().connect(&control);
    control
}

fn render(element: &Element, vars: &StyleVars) -> Buffer {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(element.clone());
    let layout = pagedom::layout::layout(&root, Rect::new(0, 0, 24, 12));
    let mut buf = Buffer::new(24, 12);
    render_to_buffer(&root, &layout, &mut buf, &ColorContext::new(vars));
    buf
}

#[test]
fn test_closed_presentation_shows_label_and_arrow() {
    let control = connected(&[("a", "Alpha"), ("b", "Beta")]);
    let vars = StyleVars::new();

    let tree = control.presentation(&vars);
    assert!(find_part(&tree, "options").is_none());

    let buf = render(&tree, &vars);
    assert!(buf.row_text(0).starts_with('╭'));
    assert!(buf.row_text(1).contains("Alpha"));
    assert!(buf.row_text(1).contains('▼'));
}

#[test]
fn test_open_presentation_lists_options() {
    let control = connected(&[("a", "Alpha"), ("b", "Beta")]);
    control.set_value("b");
    control.set_opened(true);
    let vars = StyleVars::new();

    let tree = control.presentation(&vars);
    let buf = render(&tree, &vars);

    assert!(buf.row_text(1).contains('▲'));
    let text: Vec<String> = (0..12).map(|y| buf.row_text(y)).collect();
    assert!(text.iter().any(|row| row.contains("Alpha")));
    assert!(text.iter().skip(2).any(|row| row.contains("Beta")));

    let selected = find_part(&tree, "options")
        .and_then(|list| {
            list.children_slice()
                .iter()
                .find(|row| row.style.text_style.bold)
        })
        .and_then(|row| row.attribute("value"));
    assert_eq!(selected, Some("b"));
}

#[test]
fn test_open_presentation_limits_rows() {
    let control = connected(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
    control.set_value("d");
    control.set_opened(true);
    let mut vars = StyleVars::new();
    vars.set("--options-max-display-items", "2").unwrap();

    let tree = control.presentation(&vars);
    let rows: Vec<&str> = find_part(&tree, "options")
        .map(|list| {
            list.children_slice()
                .iter()
                .filter_map(|row| row.attribute("value"))
                .collect()
        })
        .unwrap_or_default();

    assert_eq!(rows, vec!["c", "d"]);
}
