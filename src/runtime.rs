//! Injectable registry plus configuration shared by a component tree

use crate::config::ReuseConfig;
use crate::template::ScopeRegistry;

/// The state every definition and reuse in one tree works against
#[derive(Debug, Default)]
pub struct Runtime {
    registry: ScopeRegistry,
    config: ReuseConfig,
}

impl Runtime {
    /// Create a runtime with the given configuration and an empty registry
    pub fn new(config: ReuseConfig) -> Self {
        Self {
            registry: ScopeRegistry::new(),
            config,
        }
    }

    pub fn registry(&self) -> &ScopeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ReuseConfig {
        &self.config
    }
}
