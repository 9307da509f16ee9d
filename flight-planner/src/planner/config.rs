//! Search configuration for the itinerary planner.

use chrono::Duration;

use crate::domain::{ConnectionWindow, MAX_CONNECTION_MINS, MIN_CONNECTION_MINS};

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum layover between flights (minutes, exclusive).
    /// Connections this tight or tighter are rejected.
    pub min_connection_mins: i64,

    /// Maximum layover between flights (minutes, exclusive).
    /// Connections this long or longer are rejected.
    pub max_connection_mins: i64,

    /// Explore each starting flight on a separate worker thread.
    /// Results are identical to a sequential search.
    pub parallel: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_connection_mins: i64, max_connection_mins: i64, parallel: bool) -> Self {
        Self {
            min_connection_mins,
            max_connection_mins,
            parallel,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_connection(&self) -> Duration {
        saturating_minutes(self.min_connection_mins)
    }

    /// Returns the maximum layover as a Duration.
    ///
    /// Values beyond what a `Duration` can hold saturate, so a huge maximum
    /// means no upper bound.
    pub fn max_connection(&self) -> Duration {
        saturating_minutes(self.max_connection_mins)
    }

    /// Returns the layover bounds as a connection window.
    pub fn connection_window(&self) -> ConnectionWindow {
        ConnectionWindow::new(self.min_connection(), self.max_connection())
    }
}

fn saturating_minutes(mins: i64) -> Duration {
    Duration::try_minutes(mins).unwrap_or(if mins < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: MIN_CONNECTION_MINS, // 1 hour
            max_connection_mins: MAX_CONNECTION_MINS, // 6 hours
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection_mins, 60);
        assert_eq!(config.max_connection_mins, 360);
        assert!(!config.parallel);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection(), Duration::hours(1));
        assert_eq!(config.max_connection(), Duration::hours(6));
        assert_eq!(config.connection_window(), ConnectionWindow::default());
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(30, 120, true);

        assert_eq!(config.min_connection_mins, 30);
        assert_eq!(config.max_connection_mins, 120);
        assert!(config.parallel);
        assert_eq!(
            config.connection_window(),
            ConnectionWindow::new(Duration::minutes(30), Duration::hours(2))
        );
    }

    #[test]
    fn out_of_range_minutes_saturate() {
        let config = SearchConfig::new(i64::MIN, i64::MAX, false);

        assert_eq!(config.min_connection(), Duration::MIN);
        assert_eq!(config.max_connection(), Duration::MAX);
        assert_eq!(
            config.connection_window(),
            ConnectionWindow::new(Duration::MIN, Duration::MAX)
        );
    }
}
