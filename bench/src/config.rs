use algos::HashParams;

use crate::error::{BenchError, Result};

pub const DEFAULT_TRIALS: usize = 1000;
pub const DEFAULT_REPORT_PATH: &str = "substring_search_analysis.md";

/// What a single search step compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Unicode scalar values; match positions count chars.
    #[default]
    Chars,
    /// UTF-8 bytes; match positions are byte offsets.
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub trials: usize,
    pub hash: HashParams,
    pub unit: Unit,
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(BenchError::Configuration(
                "trial count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            hash: HashParams::default(),
            unit: Unit::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.trials, 1000);
        assert_eq!(config.unit, Unit::Chars);
        assert_eq!(config.hash.modulus(), 101);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_trials_rejected() {
        let config = BenchConfig {
            trials: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::Configuration(_))));
    }
}
