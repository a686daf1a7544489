use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{ColorContext, Rgb, TextStyle};

/// Raw-mode alternate screen with mouse capture. Restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    front: Buffer,
    back: Buffer,
    last_layout: LayoutResult,
}

/// What was last written to the terminal, so unchanged attributes are not re-sent.
struct Pen {
    x: u16,
    y: u16,
    advance: u16,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: TextStyle,
}

impl Pen {
    fn new() -> Self {
        Self {
            x: u16::MAX,
            y: u16::MAX,
            advance: 1,
            fg: None,
            bg: None,
            style: TextStyle::new(),
        }
    }

    fn write(&mut self, out: &mut impl Write, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if y != self.y || x != self.x.wrapping_add(self.advance) {
            queue!(out, cursor::MoveTo(x, y))?;
        }

        if cell.style != self.style {
            // Attribute::Reset also drops colors, so both are re-sent below.
            queue!(out, SetAttribute(Attribute::Reset))?;
            for (on, attribute) in [
                (cell.style.bold, Attribute::Bold),
                (cell.style.dim, Attribute::Dim),
                (cell.style.italic, Attribute::Italic),
                (cell.style.underline, Attribute::Underlined),
            ] {
                if on {
                    queue!(out, SetAttribute(attribute))?;
                }
            }
            self.style = cell.style;
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_crossterm(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_crossterm(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        queue!(out, Print(cell.char))?;

        self.x = x;
        self.y = y;
        self.advance = char_width(cell.char).max(1) as u16;
        Ok(())
    }
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("[terminal] opened {width}x{height}");

        Ok(Self {
            stdout,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.front.width(), self.front.height())
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    /// `None` blocks until one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(timeout) => event::poll(timeout)?,
            None => return Ok(vec![event::read()?]),
        };

        let mut events = Vec::new();
        if ready {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Lay out and paint `root`, writing only cells that changed since the last frame.
    pub fn render(&mut self, root: &Element, color_ctx: &ColorContext) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("[terminal] resized to {width}x{height}");
            self.front = Buffer::new(width, height);
            self.back = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.front.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.front, color_ctx);

        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(&self.last_layout)
    }

    /// Layout of the last rendered frame.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut pen = Pen::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        for (x, y, cell) in self.front.diff(&self.back) {
            pen.write(&mut self.stdout, x, y, cell)?;
        }
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
