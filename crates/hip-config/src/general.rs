//! General application configuration.

use hip_core::enums::Timepoint;
use serde::{Deserialize, Serialize};

/// Default follow-up horizon.
const fn default_timepoint() -> Timepoint {
    Timepoint::T3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Timepoint used when `--timepoint` is not given.
    #[serde(default = "default_timepoint")]
    pub default_timepoint: Timepoint,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_timepoint: default_timepoint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_timepoint, Timepoint::T3);
    }
}
