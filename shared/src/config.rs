//! Configuration types for the directory controller

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

/// Delay between the last keystroke and the search term being committed
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Simulated latency of the bundled dataset
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1500;

pub const DEFAULT_COMMAND_BUFFER: usize = 64;

/// Directory controller configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub debounce_ms: u64,
    pub command_buffer: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl DirectoryConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = debounce.as_millis() as u64;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.command_buffer == 0 {
            return Err(SharedError::InvalidConfig {
                field: "command_buffer".to_string(),
                value: self.command_buffer.to_string(),
            });
        }
        Ok(())
    }
}
