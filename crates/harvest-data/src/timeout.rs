//! Timeout configuration for fetch operations.
//!
//! Fetches are unbounded unless a timeout is configured.

use std::time::Duration;

/// Timeouts applied to every request a [`crate::FetchClient`] makes.
///
/// `None` leaves that phase unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeoutConfig {
    /// Time allowed to establish the connection.
    pub connect: Option<Duration>,
    /// Total time allowed for one attempt, body included.
    pub total: Option<Duration>,
}

impl TimeoutConfig {
    /// No timeout at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bound the whole attempt, with a quarter of it for connecting.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Some(total / 4),
            total: Some(total),
        }
    }

    /// `0` means unbounded.
    pub fn from_millis(total_ms: u64) -> Self {
        if total_ms == 0 {
            Self::unbounded()
        } else {
            Self::from_total(Duration::from_millis(total_ms))
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.total.is_some() || self.connect.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = TimeoutConfig::default();
        assert!(!config.is_bounded());
        assert_eq!(TimeoutConfig::from_millis(0), config);
    }

    #[test]
    fn test_from_total_splits_connect() {
        let config = TimeoutConfig::from_millis(2000);
        assert_eq!(config.total, Some(Duration::from_millis(2000)));
        assert_eq!(config.connect, Some(Duration::from_millis(500)));
    }
}
