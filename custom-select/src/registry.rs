//! Custom element definitions.

use std::collections::HashMap;

use pagedom::Element;

use crate::control::{SelectControl, TAG, VALUE};
use crate::error::{Result, SelectError};

/// How a tag behaves once defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDefinition {
    /// Custom element name.
    pub tag: String,

    /// Attributes whose changes drive the update contract.
    pub observed_attributes: Vec<String>,

    /// Whether instances take part in form submission.
    pub form_associated: bool,
}

impl Default for ElementDefinition {
    fn default() -> Self {
        Self {
            tag: TAG.to_string(),
            observed_attributes: vec![VALUE.to_string()],
            form_associated: true,
        }
    }
}

impl ElementDefinition {
    /// Definition for `tag` with the default settings.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Observe another attribute.
    pub fn observe(mut self, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        if !self.observes(&attribute) {
            self.observed_attributes.push(attribute);
        }
        self
    }

    pub fn observes(&self, attribute: &str) -> bool {
        self.observed_attributes.iter().any(|a| a == attribute)
    }
}

/// Tag to definition map for one page.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: HashMap<String, ElementDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `tag`. Defining a tag twice keeps the first definition.
    pub fn define(&mut self, tag: &str) -> Result<()> {
        self.define_with(ElementDefinition::new(tag))
    }

    pub fn define_with(&mut self, definition: ElementDefinition) -> Result<()> {
        let tag = definition.tag.clone();
        if !is_valid_custom_element_name(&tag) {
            return Err(SelectError::InvalidName(tag));
        }
        if self.definitions.contains_key(&tag) {
            log::trace!("[registry] {tag} already defined");
            return Ok(());
        }

        log::debug!("[registry] define {tag}");
        self.definitions.insert(tag, definition);
        Ok(())
    }

    /// Define the default `custom-select` tag.
    pub fn define_default(&mut self) -> Result<()> {
        self.define(TAG)
    }

    pub fn get(&self, tag: &str) -> Option<&ElementDefinition> {
        self.definitions.get(tag)
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    /// Upgrade host markup into a control behaving as `tag`'s definition
    /// says. The host tag is set to `tag`.
    pub fn create(&self, tag: &str, mut host: Element) -> Result<SelectControl> {
        let definition = self
            .get(tag)
            .cloned()
            .ok_or_else(|| SelectError::NotDefined(tag.to_string()))?;
        host.tag = tag.to_string();
        Ok(SelectControl::with_definition(host, definition))
    }
}

/// Lowercase, starts with an ASCII letter, and contains a hyphen.
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };

    first.is_ascii_lowercase()
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace())
}
