use crate::types::Color;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Minimal default theme providing basic readable colors.
/// Like bare HTML defaults - ensures content is visible.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.0, c: 0.0, h: 0.0 }, // black
            foreground: Color::Oklch { l: 1.0, c: 0.0, h: 0.0 }, // white
            surface: Color::Oklch { l: 0.15, c: 0.0, h: 0.0 },   // dark gray
            border: Color::Oklch { l: 0.4, c: 0.0, h: 0.0 },     // gray
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "background" => Some(self.background.clone()),
            "foreground" => Some(self.foreground.clone()),
            "surface" => Some(self.surface.clone()),
            "border" => Some(self.border.clone()),
            _ => None,
        }
    }
}

/// Context for resolving color variables.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete Color (no Var variants).
    /// Variable chains are followed at most 8 levels deep.
    pub fn resolve(&self, color: &Color) -> Color {
        let mut current = color.clone();
        for _ in 0..8 {
            match current {
                Color::Var(ref name) => match self.theme.resolve(name) {
                    Some(next) => current = next,
                    None => break,
                },
                concrete => return concrete,
            }
        }
        // Unresolved variable: fall back to black
        Color::Rgb { r: 0, g: 0, b: 0 }
    }
}
