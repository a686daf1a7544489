use pagedom::layout::layout;
use pagedom::{Border, Edges, Element, Rect, Size, Style};

// ============================================================================
// Column / Row stacking
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("Hello").id("a"))
        .child(Element::text("World!").id("b"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 20, 10)));
    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 5, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(0, 1, 6, 1)));
}

#[test]
fn test_column_gap() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .gap(1)
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result.get("b"), Some(&Rect::new(0, 2, 3, 1)));
}

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .gap(1)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cde").id("b"));

    let result = layout(&root, Rect::from_size(20, 10));

    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 2, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(3, 0, 3, 1)));
}

#[test]
fn test_fill_child_takes_remaining_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(Element::text("head").id("head"))
        .child(Element::box_().id("body").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(40, 40));

    assert_eq!(result.get("body"), Some(&Rect::new(0, 1, 10, 9)));
}

// ============================================================================
// Box model
// ============================================================================

#[test]
fn test_border_and_padding_offset_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(12))
        .height(Size::Fixed(6))
        .padding(Edges::symmetric(0, 1))
        .style(Style::new().border(Border::Single))
        .child(Element::text("x").id("x"));

    let result = layout(&root, Rect::from_size(40, 40));

    assert_eq!(result.get("x"), Some(&Rect::new(2, 1, 1, 1)));
}

#[test]
fn test_auto_size_includes_border() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::row()
                .id("boxed")
                .style(Style::new().border(Border::Rounded))
                .child(Element::text("Mango").id("label")),
        );

    let result = layout(&root, Rect::from_size(40, 40));

    assert_eq!(result.get("boxed"), Some(&Rect::new(0, 0, 7, 3)));
    assert_eq!(result.get("label"), Some(&Rect::new(1, 1, 5, 1)));
}

#[test]
fn test_children_clamped_to_available_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(1))
        .child(Element::text("too wide").id("a"))
        .child(Element::text("hidden").id("b"));

    let result = layout(&root, Rect::from_size(40, 40));

    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 4, 1)));
    assert_eq!(result.get("b").map(|r| r.height), Some(0));
}
