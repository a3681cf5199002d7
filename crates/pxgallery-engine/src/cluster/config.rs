use chrono::TimeDelta;

pub const DEFAULT_THRESHOLD_MINUTES: u32 = 30;

/// Clustering knobs. Passed explicitly so tests can vary the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Largest gap allowed between consecutive photos of one session.
    pub threshold: TimeDelta,
}

impl ClusterConfig {
    pub fn new(threshold: TimeDelta) -> Self {
        Self { threshold }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(TimeDelta::minutes(i64::from(minutes)))
    }

    /// A gap equal to the threshold stays in the current session.
    pub fn splits(&self, gap: TimeDelta) -> bool {
        gap > self.threshold
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_THRESHOLD_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inclusive() {
        let config = ClusterConfig::default();
        assert!(!config.splits(TimeDelta::minutes(30)));
        assert!(config.splits(TimeDelta::minutes(30) + TimeDelta::seconds(1)));
        assert!(!config.splits(TimeDelta::seconds(-90)));
    }
}
