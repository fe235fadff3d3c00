// SPDX-License-Identifier: MPL-2.0
//! Close delay domain type for notification stores.
//!
//! This module provides a type-safe wrapper for the delay after which a
//! toast dismisses itself.

use crate::config::DEFAULT_CLOSE_DELAY_SECS;
use std::time::Duration;

/// Auto-dismiss delay shared by every notification of a store.
///
/// This newtype enforces validity at the type level, ensuring the delay
/// is always positive.
///
/// # Example
///
/// ```
/// use iced_toasts::notifications::CloseDelay;
///
/// let delay = CloseDelay::from_secs_f64(5.0);
/// assert_eq!(delay.as_secs_f64(), 5.0);
///
/// // Long delays are kept as is
/// assert_eq!(CloseDelay::from_secs_f64(120.0).as_secs_f64(), 120.0);
///
/// // Zero or negative delays fall back to the default
/// assert_eq!(CloseDelay::from_secs_f64(0.0), CloseDelay::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CloseDelay(Duration);

impl CloseDelay {
    /// Creates a close delay from seconds.
    ///
    /// Any positive duration is accepted. Zero, negative, non-finite or
    /// unrepresentable input falls back to the default delay.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        Duration::try_from_secs_f64(secs)
            .ok()
            .filter(|delay| !delay.is_zero())
            .map_or_else(Self::default, Self)
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the delay in seconds.
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl Default for CloseDelay {
    fn default() -> Self {
        Self(Duration::from_secs_f64(DEFAULT_CLOSE_DELAY_SECS))
    }
}

impl From<CloseDelay> for Duration {
    fn from(delay: CloseDelay) -> Self {
        delay.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(CloseDelay::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn from_secs_keeps_any_positive_delay() {
        assert_eq!(
            CloseDelay::from_secs_f64(120.0).as_duration(),
            Duration::from_secs(120)
        );
        assert_eq!(
            CloseDelay::from_secs_f64(0.2).as_duration(),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn non_positive_input_uses_default() {
        assert_eq!(CloseDelay::from_secs_f64(0.0), CloseDelay::default());
        assert_eq!(CloseDelay::from_secs_f64(-4.0), CloseDelay::default());
    }

    #[test]
    fn from_secs_accepts_valid_values() {
        assert_eq!(
            CloseDelay::from_secs_f64(1.5).as_duration(),
            Duration::from_millis(1500)
        );
        assert_eq!(
            CloseDelay::from_secs_f64(10.0).as_duration(),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn non_finite_input_uses_default() {
        assert_eq!(CloseDelay::from_secs_f64(f64::NAN), CloseDelay::default());
        assert_eq!(
            CloseDelay::from_secs_f64(f64::INFINITY),
            CloseDelay::default()
        );
        assert_eq!(CloseDelay::from_secs_f64(f64::MAX), CloseDelay::default());
    }
}
