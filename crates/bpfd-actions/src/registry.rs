//! Name → action registry (§4.5, §9: replaces the source's package-level
//! singleton map with an explicit table owned by the daemon at startup).

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::Action;
use crate::error::DuplicateActionError;

#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under its own [`Action::name`]. Rejects a name
    /// already present.
    pub fn register(&mut self, action: Arc<dyn Action>) -> Result<(), DuplicateActionError> {
        if self.actions.contains_key(action.name()) {
            return Err(DuplicateActionError(action.name().to_string()));
        }
        self.actions.insert(action.name().to_string(), action);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.actions.keys().cloned().collect()
    }

    /// A registry preloaded with `stdout`, `kill`, and `interrupt`. The
    /// three builtin names are distinct by construction, so registration
    /// here cannot fail.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let _ = registry.register(Arc::new(crate::stdout::StdoutAction));
        let _ = registry.register(Arc::new(crate::kill::KillAction));
        let _ = registry.register(Arc::new(crate::interrupt::InterruptAction));
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
