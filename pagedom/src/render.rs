use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{ColorContext, Rgb};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
) {
    render_element(element, layout, buf, color_ctx);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, ctx: &ColorContext) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    // Render background if set
    if let Some(bg) = &element.style.background {
        fill_rect(buf, *rect, ctx.resolve(bg).to_rgb());
    }

    render_border(element, *rect, buf, ctx);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, *rect, buf, ctx),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, ctx);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn foreground(element: &Element, ctx: &ColorContext) -> Rgb {
    element
        .style
        .foreground
        .as_ref()
        .map(|c| ctx.resolve(c).to_rgb())
        .unwrap_or(DEFAULT_FG)
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer, ctx: &ColorContext) {
    let fg = foreground(element, ctx);
    let explicit_bg = element
        .style
        .background
        .as_ref()
        .map(|c| ctx.resolve(c).to_rgb());

    let border_size = if element.style.border.glyphs().is_some() { 1 } else { 0 };
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    for (line_no, line) in text.lines().enumerate() {
        let y = inner.y + line_no as u16;
        if y >= inner.bottom() {
            break;
        }

        let mut x = inner.x;
        for ch in truncate_to_width(line, inner.width as usize).chars() {
            // Preserve existing background if no explicit background set
            let bg = explicit_bg
                .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));

            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(element.style.text_style),
            );
            x += char_width(ch).max(1) as u16;
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, ctx: &ColorContext) {
    let Some((tl, tr, bl, br, h, v)) = element.style.border.glyphs() else {
        return;
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .border_color
        .as_ref()
        .map(|c| ctx.resolve(c).to_rgb())
        .unwrap_or_else(|| foreground(element, ctx));

    // Corners
    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
