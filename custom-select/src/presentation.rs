//! Terminal rendering of a control.

use pagedom::{Border, Color, Edges, Element, Size, Style};

use crate::option::SelectOption;
use crate::style::{Part, StyleVars};

/// Everything needed to draw a control, captured under one lock.
pub(crate) struct PresentationModel {
    pub host_id: String,
    pub base_id: String,
    pub wrapper_id: String,
    pub list_id: String,
    pub display_text: String,
    pub opened: bool,
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
}

pub(crate) fn build(model: &PresentationModel, vars: &StyleVars) -> Element {
    let border_color = if model.opened {
        Color::var("--base-border-color-opened")
    } else {
        Color::var("--base-border-color")
    };
    let mut base_style = Style::new()
        .border(Border::Rounded)
        .border_color(border_color);
    let mut text_style = Style::new();
    if model.opened {
        base_style = base_style
            .background(Color::var("--base-background-color-opened"))
            .foreground(Color::var("--base-color-opened"));
        text_style = text_style.foreground(Color::var("--base-color-opened"));
    }

    let base = Element::row()
        .id(model.base_id.clone())
        .part(Part::Base.as_str())
        .width(Size::Fill)
        .padding(Edges::symmetric(0, 1))
        .gap(1)
        .style(base_style)
        .clickable(true)
        .child(
            Element::text(model.display_text.clone())
                .width(Size::Fill)
                .style(text_style.clone()),
        )
        .child(Element::text(vars.arrow_icon(model.opened)).style(text_style));

    let mut root = Element::col()
        .id(model.host_id.clone())
        .width(Size::Fill)
        .focusable(true)
        .child(base);

    if model.opened && !model.options.is_empty() {
        root = root.child(option_rows(model, vars));
    }

    root
}

/// The visible window of option rows, scrolled so the selection shows.
fn option_rows(model: &PresentationModel, vars: &StyleVars) -> Element {
    let limit = vars.max_display_items();
    let selected_index = model
        .selected
        .as_ref()
        .and_then(|value| model.options.iter().position(|o| &o.value == value));
    let start = selected_index.map_or(0, |index| index.saturating_sub(limit - 1));

    let rows = model
        .options
        .iter()
        .skip(start)
        .take(limit)
        .map(|option| {
            let mut style = Style::new();
            if model.selected.as_deref() == Some(option.value.as_str()) {
                style = style.bold();
            }
            Element::text(option.label.trim().to_string())
                .id(option.node.clone())
                .part(Part::Option.as_str())
                .attr("value", option.value.clone())
                .width(Size::Fill)
                .padding(Edges::symmetric(0, 1))
                .style(style)
                .clickable(true)
        });

    let list = Element::col()
        .id(model.list_id.clone())
        .part(Part::Options.as_str())
        .width(Size::Fill)
        .children(rows);

    Element::col()
        .id(model.wrapper_id.clone())
        .part(Part::OptionsWrapper.as_str())
        .width(Size::Fill)
        .style(Style::new().border(Border::Single).border_color(Color::var(
            "--base-border-color-opened",
        )))
        .child(list)
}
