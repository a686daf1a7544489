use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Edges, Size};

/// Element id to its laid-out rectangle.
pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main_of(element: &Element) -> Self {
        match element.direction {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }

    fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    fn size(self, element: &Element) -> Size {
        match self {
            Axis::Horizontal => element.width,
            Axis::Vertical => element.height,
        }
    }

    fn extent(self, rect: Rect) -> u16 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }

    /// Leading and trailing edge along this axis.
    fn edges(self, edges: &Edges) -> (u16, u16) {
        match self {
            Axis::Horizontal => (edges.left, edges.right),
            Axis::Vertical => (edges.top, edges.bottom),
        }
    }

    fn total(self, edges: &Edges) -> u16 {
        let (before, after) = self.edges(edges);
        before + after
    }
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let m = &element.margin;
    let outer = available.shrink(m.top, m.right, m.bottom, m.left);

    let width = resolve_size(element, Axis::Horizontal, outer.width);
    let height = resolve_size(element, Axis::Vertical, outer.height);
    let rect = Rect::new(outer.x, outer.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let b = border_size(element);
    let p = &element.padding;
    let inner = rect.shrink(p.top + b, p.right + b, p.bottom + b, p.left + b);

    let main = Axis::main_of(element);
    let cross = main.cross();
    let main_size = main.extent(inner);
    let cross_size = cross.extent(inner);
    let gaps = element.gap * children.len().saturating_sub(1) as u16;

    // Fixed and content-sized children claim space first; Fill children split the rest.
    let mut claimed = 0u16;
    let mut fill_count = 0u16;
    for child in children {
        match main.size(child) {
            Size::Fill => fill_count += 1,
            _ => claimed += natural_size(child, main) + main.total(&child.margin),
        }
    }
    let fill_size = main_size
        .saturating_sub(claimed + gaps)
        .checked_div(fill_count)
        .unwrap_or(0);

    let mut offset = 0u16;
    for child in children {
        let (before, after) = main.edges(&child.margin);
        let (cross_before, cross_after) = cross.edges(&child.margin);

        let length = match main.size(child) {
            Size::Fill => fill_size,
            _ => natural_size(child, main),
        };
        let room = cross_size.saturating_sub(cross_before + cross_after);
        let thickness = match cross.size(child) {
            Size::Fill => room,
            _ => natural_size(child, cross),
        }
        .min(room);
        let clamped = length.min(main_size.saturating_sub(offset + before));

        let child_rect = match main {
            Axis::Horizontal => Rect::new(
                inner.x + offset + before,
                inner.y + cross_before,
                clamped,
                thickness,
            ),
            Axis::Vertical => Rect::new(
                inner.x + cross_before,
                inner.y + offset + before,
                thickness,
                clamped,
            ),
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(before + length + after + element.gap);
    }
}

fn border_size(element: &Element) -> u16 {
    u16::from(element.style.border != Border::None)
}

fn resolve_size(element: &Element, axis: Axis, available: u16) -> u16 {
    match axis.size(element) {
        Size::Fill => available,
        _ => natural_size(element, axis).min(available),
    }
}

/// Fixed size, or the content-derived size for Auto and Fill.
fn natural_size(element: &Element, axis: Axis) -> u16 {
    match axis.size(element) {
        Size::Fixed(n) => n,
        Size::Auto | Size::Fill => content_size(element, axis),
    }
}

fn content_size(element: &Element, axis: Axis) -> u16 {
    let content = match &element.content {
        Content::Text(text) => match axis {
            Axis::Horizontal => text.lines().map(display_width).max().unwrap_or(0) as u16,
            Axis::Vertical => text.lines().count().max(1) as u16,
        },
        Content::Children(children) if children.is_empty() => 0,
        Content::Children(children) => {
            let extents = children
                .iter()
                .map(|child| natural_size(child, axis) + axis.total(&child.margin));
            if Axis::main_of(element) == axis {
                extents.sum::<u16>() + element.gap * (children.len() - 1) as u16
            } else {
                extents.max().unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content + axis.total(&element.padding) + border_size(element) * 2
}
