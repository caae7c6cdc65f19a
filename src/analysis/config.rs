//! Configuration for move advisors.

/// Configuration for creating an [`Advisor`](super::Advisor).
///
/// # Examples
///
/// ```
/// use nrow::analysis::{Advisor, AdvisorConfig};
///
/// let config = AdvisorConfig::new().with_seed(42);
/// let advisor = Advisor::new(&config);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Random seed for tie-breaking; `None` draws a fresh seed
    pub seed: Option<u64>,
}

impl AdvisorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
