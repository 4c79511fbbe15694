use serde::{Deserialize, Serialize};

/// DOM event types the controllers listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Click,
    MouseDown,
    MouseMove,
    MouseUp,
    MouseOver,
    MouseOut,
    MouseEnter,
    MouseLeave,
    /// Native form control value change.
    Change,
    /// Text selection start (suppressed on some engines during drags).
    SelectStart,
    /// The window lost focus.
    Blur,
}

/// Key modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn toggles(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// A browser event, after the host has resolved its target element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomEvent {
    pub kind: EventKind,
    /// Element the event originated on. `None` for document/window events.
    #[serde(default)]
    pub target: Option<String>,
    /// Element whose listener is being invoked. Set during dispatch.
    #[serde(skip)]
    pub current_target: Option<String>,
    #[serde(default)]
    pub client_x: i32,
    #[serde(default)]
    pub client_y: i32,
    #[serde(default)]
    pub button: MouseButton,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(skip)]
    pub default_prevented: bool,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: Option<String>) -> Self {
        Self {
            kind,
            target,
            current_target: None,
            client_x: 0,
            client_y: 0,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
            default_prevented: false,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::new(EventKind::Click, Some(target.into()))
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::new(EventKind::Change, Some(target.into()))
    }

    pub fn mouse_over(target: impl Into<String>) -> Self {
        Self::new(EventKind::MouseOver, Some(target.into()))
    }

    pub fn mouse_out(target: impl Into<String>) -> Self {
        Self::new(EventKind::MouseOut, Some(target.into()))
    }

    pub fn mouse_enter(target: impl Into<String>) -> Self {
        Self::new(EventKind::MouseEnter, Some(target.into()))
    }

    pub fn mouse_leave(target: impl Into<String>) -> Self {
        Self::new(EventKind::MouseLeave, Some(target.into()))
    }

    pub fn mouse_down(target: impl Into<String>, x: i32, y: i32) -> Self {
        Self::new(EventKind::MouseDown, Some(target.into())).at(x, y)
    }

    pub fn mouse_move(x: i32, y: i32) -> Self {
        Self::new(EventKind::MouseMove, None).at(x, y)
    }

    pub fn mouse_up(x: i32, y: i32) -> Self {
        Self::new(EventKind::MouseUp, None).at(x, y)
    }

    pub fn select_start(target: Option<String>) -> Self {
        Self::new(EventKind::SelectStart, target)
    }

    pub fn blur() -> Self {
        Self::new(EventKind::Blur, None)
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.client_x = x;
        self.client_y = y;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
