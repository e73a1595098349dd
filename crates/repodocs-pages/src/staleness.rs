//! Staleness policy for mirrored repositories.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use repodocs_config::{MissingDescriptorPolicy, StalenessConfig};
use repodocs_github::RepoDescriptor;

/// Paragraph appended to pages of stale repositories.
pub const STALE_NOTICE: &str = "_It's been a while since this repo was updated._";

/// Decides whether a repository page gets the staleness notice.
///
/// - Descriptor with a parsable `pushed_at`: stale when strictly more than
///   the threshold has elapsed.
/// - Descriptor without `pushed_at`, or with an unparsable one: not stale.
/// - No descriptor at all: decided by [`MissingDescriptorPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct StalenessPolicy {
    threshold: TimeDelta,
    missing_descriptor: MissingDescriptorPolicy,
}

impl StalenessPolicy {
    /// Policy with a threshold of `threshold_days`.
    #[must_use]
    pub fn new(threshold_days: u32, missing_descriptor: MissingDescriptorPolicy) -> Self {
        Self {
            threshold: TimeDelta::days(i64::from(threshold_days)),
            missing_descriptor,
        }
    }

    /// Whether the repository described by `descriptor` is stale at `now` (UTC).
    #[must_use]
    pub fn is_stale(&self, descriptor: Option<&RepoDescriptor>, now: NaiveDateTime) -> bool {
        let Some(descriptor) = descriptor else {
            return self.missing_descriptor == MissingDescriptorPolicy::Stale;
        };
        descriptor
            .pushed_at
            .as_deref()
            .and_then(parse_pushed_at)
            .is_some_and(|pushed| now - pushed > self.threshold)
    }
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self::from(&StalenessConfig::default())
    }
}

impl From<&StalenessConfig> for StalenessPolicy {
    fn from(config: &StalenessConfig) -> Self {
        Self::new(config.threshold_days, config.missing_descriptor)
    }
}

/// Parse an ISO-8601 push timestamp as naive UTC.
///
/// Trailing `Z` markers are stripped. Accepts `T` or space separators,
/// optional fractional seconds, explicit offsets (converted to UTC) and bare
/// dates (midnight).
pub fn parse_pushed_at(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches('Z');

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use repodocs_github::Visibility;

    use super::*;

    fn now() -> NaiveDateTime {
        parse_pushed_at("2025-06-30T12:00:00Z").unwrap()
    }

    fn descriptor(pushed_at: Option<String>) -> RepoDescriptor {
        RepoDescriptor {
            name: "demo".to_owned(),
            default_branch: "main".to_owned(),
            visibility: Visibility::Public,
            pushed_at,
        }
    }

    fn pushed_days_ago(days: i64) -> RepoDescriptor {
        let pushed = now() - TimeDelta::days(days);
        descriptor(Some(format!("{}Z", pushed.format("%Y-%m-%dT%H:%M:%S"))))
    }

    #[test]
    fn test_181_days_is_stale() {
        let policy = StalenessPolicy::default();
        assert!(policy.is_stale(Some(&pushed_days_ago(181)), now()));
    }

    #[test]
    fn test_179_days_is_fresh() {
        let policy = StalenessPolicy::default();
        assert!(!policy.is_stale(Some(&pushed_days_ago(179)), now()));
    }

    #[test]
    fn test_exactly_threshold_is_fresh() {
        let policy = StalenessPolicy::default();
        assert!(!policy.is_stale(Some(&pushed_days_ago(180)), now()));
    }

    #[test]
    fn test_custom_threshold() {
        let policy = StalenessPolicy::new(30, MissingDescriptorPolicy::Stale);
        assert!(policy.is_stale(Some(&pushed_days_ago(31)), now()));
        assert!(!policy.is_stale(Some(&pushed_days_ago(29)), now()));
    }

    #[test]
    fn test_missing_timestamp_is_fresh() {
        let policy = StalenessPolicy::default();
        assert!(!policy.is_stale(Some(&descriptor(None)), now()));
    }

    #[test]
    fn test_unparsable_timestamp_is_fresh() {
        let policy = StalenessPolicy::default();
        let descriptor = descriptor(Some("last tuesday".to_owned()));
        assert!(!policy.is_stale(Some(&descriptor), now()));
    }

    #[test]
    fn test_missing_descriptor_follows_policy() {
        assert!(StalenessPolicy::new(180, MissingDescriptorPolicy::Stale).is_stale(None, now()));
        assert!(!StalenessPolicy::new(180, MissingDescriptorPolicy::Fresh).is_stale(None, now()));
    }

    #[test]
    fn test_parse_formats() {
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(parse_pushed_at("2024-01-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_pushed_at("2024-01-01T00:00:00"), Some(midnight));
        assert_eq!(parse_pushed_at("2024-01-01 00:00:00"), Some(midnight));
        assert_eq!(parse_pushed_at("2024-01-01"), Some(midnight));
        assert_eq!(parse_pushed_at("2024-01-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_pushed_at("not a date"), None);
        assert_eq!(parse_pushed_at(""), None);
    }
}
