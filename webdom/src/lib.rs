pub mod element;
pub mod error;
pub mod event;
pub mod listener;
pub mod types;

pub use element::{Document, Element, Mutation, ROOT_ID};
pub use error::DomError;
pub use event::{DomEvent, EventKind, Modifiers, MouseButton};
pub use listener::{Listener, ListenerTable, ListenerTarget};
pub use types::*;
