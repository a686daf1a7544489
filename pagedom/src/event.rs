use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// High-level input events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

// -----------------------------------------------------------------------------
// Named events
// -----------------------------------------------------------------------------

/// A named event dispatched along a path of [`EventTarget`]s.
///
/// Mirrors the DOM `CustomEvent` shape: a type, an optional string detail,
/// and the bubbling/cancelable flags fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    kind: String,
    detail: Option<String>,
    bubbles: bool,
    cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
    target: Option<String>,
    current_target: Option<String>,
}

impl DomEvent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            detail: None,
            bubbles: false,
            cancelable: false,
            default_prevented: false,
            propagation_stopped: false,
            target: None,
            current_target: None,
        }
    }

    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_bubbling(&self) -> bool {
        self.bubbles
    }

    pub fn is_cancelable(&self) -> bool {
        self.cancelable
    }

    /// ID of the target the event was dispatched at.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// ID of the target whose listeners are currently running.
    pub fn current_target(&self) -> Option<&str> {
        self.current_target.as_deref()
    }

    /// Has no effect unless the event is cancelable.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

pub type Listener = Arc<dyn Fn(&mut DomEvent) + Send + Sync>;

/// Handle returned by [`EventTarget::add_event_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

struct ListenerEntry {
    id: ListenerId,
    kind: String,
    listener: Listener,
}

/// A node that listeners can be attached to.
///
/// Cheap to clone; clones share the same listener list.
#[derive(Clone)]
pub struct EventTarget {
    id: String,
    listeners: Arc<RwLock<Vec<ListenerEntry>>>,
}

impl fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("EventTarget")
            .field("id", &self.id)
            .field("listeners", &count)
            .finish()
    }
}

impl EventTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn add_event_listener<F>(&self, kind: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&mut DomEvent) + Send + Sync + 'static,
    {
        let id = ListenerId::new();
        let entry = ListenerEntry {
            id,
            kind: kind.into(),
            listener: Arc::new(listener),
        };
        self.listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
        id
    }

    /// Returns true if a listener was removed.
    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        let mut guard = self
            .listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = guard.len();
        guard.retain(|entry| entry.id != id);
        guard.len() != before
    }

    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners
            .read()
            .map(|guard| guard.iter().filter(|e| e.kind == kind).count())
            .unwrap_or(0)
    }

    fn invoke(&self, event: &mut DomEvent) {
        // Snapshot so listeners may add or remove listeners while running.
        let matching: Vec<Listener> = self
            .listeners
            .read()
            .map(|guard| {
                guard
                    .iter()
                    .filter(|e| e.kind == event.kind)
                    .map(|e| Arc::clone(&e.listener))
                    .collect()
            })
            .unwrap_or_default();

        for listener in matching {
            listener(event);
        }
    }
}

/// Dispatch `event` along `path`, target first.
///
/// Non-bubbling events only reach `path[0]`. Returns false if a listener
/// called `prevent_default` on a cancelable event.
pub fn dispatch(path: &[EventTarget], event: &mut DomEvent) -> bool {
    let Some(target) = path.first() else {
        return true;
    };
    event.target = Some(target.id.clone());

    for (depth, node) in path.iter().enumerate() {
        if depth > 0 && !event.bubbles {
            break;
        }
        event.current_target = Some(node.id.clone());
        node.invoke(event);
        if event.propagation_stopped {
            log::debug!(
                "[dispatch] {} propagation stopped at {}",
                event.kind,
                node.id
            );
            break;
        }
    }

    event.current_target = None;
    !event.default_prevented
}
