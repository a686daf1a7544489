//! Headless page model: an element tree with attributes and parts, DOM-style
//! named events, focus, and a flex layout that renders to the terminal.

pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use element::Element;
pub use event::{dispatch, DomEvent, Event, EventTarget, Key, Listener, ListenerId, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
