//! Undo actions for everything a slider adds to the page.
//!
//! Listener removal, timer clearing and span cleanup are queued here while
//! the slider attaches and run only by an explicit `dispose`. Dropping the
//! list, or the JS handle that owns it, runs nothing: a slider whose handle
//! was discarded keeps running.

use std::fmt;

/// Deferred cleanup actions, run last-in first-out.
#[derive(Default)]
pub struct Teardown {
    actions: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action for `run`.
    pub fn defer(&mut self, action: impl FnOnce() + 'static) {
        self.actions.push(Box::new(action));
    }

    /// Run every queued action, newest first.
    pub fn run(self) {
        log::debug!("running {} teardown actions", self.actions.len());
        for action in self.actions.into_iter().rev() {
            action();
        }
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("actions", &self.actions.len())
            .finish()
    }
}
