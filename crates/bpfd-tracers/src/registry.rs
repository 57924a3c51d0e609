//! Name → factory registry for tracers (§4.6, §9: replaces the source's
//! package-level singleton map with an explicit table the daemon owns).

use std::collections::HashMap;

use crate::error::{DuplicateTracerError, UnknownTracerError};
use crate::tracer::Tracer;

type Factory = Box<dyn Fn() -> Box<dyn Tracer> + Send + Sync>;

#[derive(Default)]
pub struct TracerRegistry {
    factories: HashMap<String, Factory>,
}

impl TracerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tracer factory under `name`. Rejects a name already
    /// present.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Tracer> + Send + Sync + 'static,
    ) -> Result<(), DuplicateTracerError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(DuplicateTracerError(name));
        }
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// Constructs a fresh, unloaded tracer instance for `name`.
    pub fn get(&self, name: &str) -> Result<Box<dyn Tracer>, UnknownTracerError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| UnknownTracerError(name.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// A registry preloaded with `exec`, `open`, `bashreadline`, `tcpdrop`,
    /// and `dockeropenbreakout`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let _ = registry.register("exec", || Box::new(crate::exec::ExecTracer::new()));
        let _ = registry.register("open", || Box::new(crate::open::OpenTracer::new()));
        let _ = registry.register("bashreadline", || {
            Box::new(crate::bashreadline::BashReadlineTracer::new())
        });
        let _ = registry.register("tcpdrop", || Box::new(crate::tcpdrop::TcpDropTracer::new()));
        let _ = registry.register("dockeropenbreakout", || {
            Box::new(crate::dockeropenbreakout::DockerOpenBreakoutTracer::new())
        });
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
