//! Bridge configuration

use proven_logger::Level;
use proven_logger_dispatch::{Backend, Dispatcher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Settings shared by every handler a factory produces.
#[derive(Clone)]
pub struct BridgeConfig {
    backend: Arc<dyn Backend>,
    log_level: Level,
    synchronous_log_level: Level,
}

impl BridgeConfig {
    /// Builder-style method for setting the backend
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = backend;
        self
    }

    /// Builder-style method for setting the level new handlers start at
    #[must_use]
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Builder-style method for setting the level at and above which
    /// delivery is synchronous
    #[must_use]
    pub fn with_synchronous_log_level(mut self, level: Level) -> Self {
        self.synchronous_log_level = level;
        self
    }

    /// Build from loaded settings, on the shared dispatcher
    #[must_use]
    pub fn from_settings(settings: BridgeSettings) -> Self {
        Self::default()
            .with_log_level(settings.log_level)
            .with_synchronous_log_level(settings.synchronous_log_level)
    }

    /// Backend messages are submitted to
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// Level new handlers start at
    #[must_use]
    pub const fn log_level(&self) -> Level {
        self.log_level
    }

    /// Level at and above which delivery is synchronous
    #[must_use]
    pub const fn synchronous_log_level(&self) -> Level {
        self.synchronous_log_level
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        let settings = BridgeSettings::default();

        Self {
            backend: Dispatcher::shared(),
            log_level: settings.log_level,
            synchronous_log_level: settings.synchronous_log_level,
        }
    }
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("log_level", &self.log_level)
            .field("synchronous_log_level", &self.synchronous_log_level)
            .finish_non_exhaustive()
    }
}

/// The serializable part of `BridgeConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Level new handlers start at
    pub log_level: Level,
    /// Level at and above which delivery is synchronous
    pub synchronous_log_level: Level,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            synchronous_log_level: Level::Error,
        }
    }
}
