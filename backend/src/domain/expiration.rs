//! Expiration rules for job postings.
//!
//! A posting expires a fixed number of days after creation. The remaining
//! time is reported in whole days, truncated toward zero, and a posting is
//! expired once that count reaches zero, so the final partial day already
//! counts as expired. A creation stamp that cannot be parsed counts as
//! expired.

use chrono::{DateTime, Duration, Utc};

/// Days a posting stays open after creation.
pub const EXPIRATION_WINDOW_DAYS: i64 = 14;

/// Pure expiration calculator.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use jobboard::domain::ExpirationPolicy;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time");
/// let policy = ExpirationPolicy::default();
/// assert_eq!(policy.days_to_expiration("2024-01-01T00:00:00Z", now), 14);
/// assert!(policy.is_expired("2023-12-01T00:00:00Z", now));
/// assert_eq!(policy.days_to_expiration("not a timestamp", now), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    window: Duration,
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self::new(Duration::days(EXPIRATION_WINDOW_DAYS))
    }
}

impl ExpirationPolicy {
    /// Build a policy with a custom retention window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Retention window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Whole days until `created_at + window`, truncated toward zero.
    ///
    /// Returns `0` when `created_at` is not valid RFC 3339.
    #[must_use]
    pub fn days_to_expiration(&self, created_at: &str, now: DateTime<Utc>) -> i64 {
        let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
            return 0;
        };
        let expires_at = created.with_timezone(&Utc) + self.window;
        (expires_at - now).num_days()
    }

    /// `true` once fewer than one whole day remains.
    #[must_use]
    pub fn is_expired(&self, created_at: &str, now: DateTime<Utc>) -> bool {
        self.days_to_expiration(created_at, now) <= 0
    }
}
