//! Structural parts and named style variables.

use std::collections::HashMap;

use pagedom::{Color, Theme};

use crate::error::{Result, SelectError};

/// Structural parts of the control that host styling may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The display box showing the current label.
    Base,
    OptionsWrapper,
    /// The list holding one [`Part::Option`] per option.
    Options,
    Option,
}

impl Part {
    pub const ALL: [Part; 4] = [Part::Base, Part::OptionsWrapper, Part::Options, Part::Option];

    pub const fn as_str(self) -> &'static str {
        match self {
            Part::Base => "base",
            Part::OptionsWrapper => "options-wrapper",
            Part::Options => "options",
            Part::Option => "option",
        }
    }

    /// Parse a single part name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.as_str() == name)
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared variables and their defaults, in declaration order.
pub const DEFAULT_VARS: [(&str, &str); 20] = [
    ("--select-border-radius", "5px"),
    ("--base-min-height", "2.5em"),
    ("--base-padding-inline", "0.5em"),
    ("--base-icon-width", "1em"),
    ("--base-border-width", "2px"),
    ("--base-font-size", "1em"),
    ("--options-padding-block", "0"),
    ("--options-font-size", "1em"),
    ("--options-max-display-items", "5"),
    ("--option-padding-block", "0.5em"),
    ("--base-border-color", "black"),
    ("--base-border-color-hover", "lightblue"),
    ("--base-background-color-hover", "white"),
    ("--base-border-color-opened", "lightblue"),
    ("--base-background-color-opened", "white"),
    ("--base-color-opened", "black"),
    ("--option-background-color-hover", "lightblue"),
    ("--transition-duration", "0.3s"),
    ("--transition-timing-function", "ease"),
    ("--arrow-icon", "▼"),
];

const MAX_DISPLAY_ITEMS: &str = "--options-max-display-items";
const ARROW_ICON: &str = "--arrow-icon";

/// Named, defaulted custom properties.
///
/// Only declared names can be overridden. Reads fall back to the default.
/// Also acts as a [`Theme`], so `Color::var("--base-border-color")` resolves
/// through the current value of the variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVars {
    overrides: HashMap<String, String>,
}

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_declared(name: &str) -> bool {
        DEFAULT_VARS.iter().any(|(declared, _)| *declared == name)
    }

    /// Override a variable.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !Self::is_declared(name) {
            return Err(SelectError::UnknownVariable(name.to_string()));
        }
        self.overrides.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Drop an override so the default applies again.
    pub fn unset(&mut self, name: &str) -> bool {
        self.overrides.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match self.overrides.get(name) {
            Some(value) => Some(value.as_str()),
            None => Self::default_of(name),
        }
    }

    pub fn default_of(name: &str) -> Option<&'static str> {
        DEFAULT_VARS
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, default)| *default)
    }

    /// All variables with their effective values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        DEFAULT_VARS.iter().map(|(name, default)| {
            let value = self.overrides.get(*name).map_or(*default, String::as_str);
            (*name, value)
        })
    }

    /// How many option rows are shown at once. Never less than one.
    pub fn max_display_items(&self) -> usize {
        self.get(MAX_DISPLAY_ITEMS)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(5)
            .max(1)
    }

    /// Arrow glyph for the base box, flipped when the list is open.
    pub fn arrow_icon(&self, opened: bool) -> String {
        let icon = self.get(ARROW_ICON).unwrap_or("▼");
        if !opened {
            return icon.to_string();
        }
        icon.chars()
            .map(|c| match c {
                '▼' => '▲',
                '▲' => '▼',
                '▾' => '▴',
                '▴' => '▾',
                'v' => '^',
                other => other,
            })
            .collect()
    }
}

impl Theme for StyleVars {
    fn resolve(&self, name: &str) -> Option<Color> {
        self.get(name).and_then(Color::named)
    }
}
