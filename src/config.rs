//! Configuration for the matchmaking board.

/// Behavior knobs for a [`Board`](crate::Board).
///
/// Use `BoardConfig::default()` for the standard behavior: up to 6
/// recommendations and sample teams seeded on first run.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Maximum number of teams returned by recommendations.
    ///
    /// Default: 6
    pub recommend_limit: usize,

    /// Whether to seed sample teams when the stored collection is absent or
    /// empty on open.
    ///
    /// Default: true
    pub seed_when_empty: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            recommend_limit: 6,
            seed_when_empty: true,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that starts from an empty board.
    ///
    /// Useful for tests that want full control over the team collection.
    #[must_use]
    pub fn unseeded() -> Self {
        Self {
            seed_when_empty: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.recommend_limit, 6);
        assert!(config.seed_when_empty);
    }

    #[test]
    fn test_unseeded_config() {
        let config = BoardConfig::unseeded();
        assert!(!config.seed_when_empty);
        assert_eq!(config.recommend_limit, 6);
    }
}
