//! Input verification gate.

use std::collections::HashSet;

/// Decides whether user input on an element may be acted on.
pub trait InputGate {
    fn verify_input(&self, element_id: &str) -> bool;
}

/// Rejects input while locked (a server transaction is in flight) and for
/// elements the server rendered as disabled.
#[derive(Debug, Clone, Default)]
pub struct DefaultInputGate {
    locked: bool,
    disabled: HashSet<String>,
}

impl DefaultInputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn disable(&mut self, element_id: impl Into<String>) {
        self.disabled.insert(element_id.into());
    }

    pub fn enable(&mut self, element_id: &str) {
        self.disabled.remove(element_id);
    }
}

impl InputGate for DefaultInputGate {
    fn verify_input(&self, element_id: &str) -> bool {
        !self.locked && !self.disabled.contains(element_id)
    }
}
