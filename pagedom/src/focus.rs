use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next element in tab order (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let order = collect_focusable(root);
        if order.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => order[0].clone(),
            Some(current) => match order.iter().position(|id| id == current) {
                Some(i) => order[(i + 1) % order.len()].clone(),
                None => order[0].clone(),
            },
        };

        self.apply(new_focus)
    }

    /// Focus the previous element in tab order (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let order = collect_focusable(root);
        if order.is_empty() {
            return None;
        }

        let last = order.len() - 1;
        let new_focus = match &self.focused {
            None => order[last].clone(),
            Some(current) => match order.iter().position(|id| id == current) {
                Some(0) | None => order[last].clone(),
                Some(i) => order[i - 1].clone(),
            },
        };

        self.apply(new_focus)
    }

    fn apply(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    /// Left clicks focus the clicked element when it is focusable.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    // Handle Tab/BackTab for focus navigation
                    if matches!(key, Key::Tab | Key::BackTab) {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }
                CrosstermEvent::Mouse(mouse) => {
                    let MouseEventKind::Down(button) = mouse.kind else {
                        continue;
                    };

                    let target = hit_test(layout, root, mouse.column, mouse.row);
                    if let Some(id) = &target {
                        let focusable = crate::element::find_element(root, id)
                            .is_some_and(is_focusable);
                        if focusable && self.focused.as_deref() != Some(id.as_str()) {
                            if let Some(old) = self.focused.replace(id.clone()) {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: id.clone() });
                        }
                    }

                    events.push(Event::Click {
                        target,
                        x: mouse.column,
                        y: mouse.row,
                        button: button.into(),
                    });
                }
                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }
                _ => {}
            }
        }

        events
    }
}

/// Whether the element can receive focus at all (including programmatically).
pub fn is_focusable(element: &Element) -> bool {
    element.focusable || element.tab_index().is_some()
}

/// Whether the element takes part in sequential (Tab) navigation.
/// A negative `tabindex` makes an element focusable but not tabbable.
pub fn is_tabbable(element: &Element) -> bool {
    match element.tab_index() {
        Some(index) => index >= 0,
        None => element.focusable,
    }
}

/// Collect tabbable element IDs in tab order.
///
/// Elements with a positive `tabindex` come first, ascending; the rest follow
/// in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut found = Vec::new();
    collect_focusable_recursive(root, &mut found);
    // Stable sort keeps tree order within equal keys
    found.sort_by_key(|(index, _)| match *index {
        i if i > 0 => i,
        _ => i32::MAX,
    });
    found.into_iter().map(|(_, id)| id).collect()
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<(i32, String)>) {
    if is_tabbable(element) {
        result.push((element.tab_index().unwrap_or(0), element.id.clone()));
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
