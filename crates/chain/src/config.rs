use std::time::Duration;

/// Simulated confirmation delays for each mock chain operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub connect_delay: Duration,
    pub mint_delay: Duration,
    pub invest_delay: Duration,
    pub release_delay: Duration,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            connect_delay: Duration::from_millis(1_000),
            mint_delay: Duration::from_millis(2_000),
            invest_delay: Duration::from_millis(1_500),
            release_delay: Duration::from_millis(2_000),
        }
    }
}

impl ChainConfig {
    /// No delays at all. Used by tests.
    pub fn instant() -> Self {
        Self {
            connect_delay: Duration::ZERO,
            mint_delay: Duration::ZERO,
            invest_delay: Duration::ZERO,
            release_delay: Duration::ZERO,
        }
    }
}
