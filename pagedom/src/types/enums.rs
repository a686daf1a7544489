#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    Fill,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Double,
    Rounded,
    Thick,
}

impl Border {
    /// Box-drawing characters: (top-left, top-right, bottom-left, bottom-right, horizontal, vertical).
    pub const fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Self::None => None,
            Self::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            Self::Double => Some(('╔', '╗', '╚', '╝', '═', '║')),
            Self::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
            Self::Thick => Some(('┏', '┓', '┗', '┛', '━', '┃')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }
}
