//! Repository settings
//!
//! Most settings come from the command line. The commit timestamp can be pinned
//! through `MYGIT_COMMIT_DATE`, which keeps ids and `log` output reproducible.

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use derive_new::new;

pub const COMMIT_DATE_ENV: &str = "MYGIT_COMMIT_DATE";

const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Default, new)]
pub struct RepositoryConfig {
    /// Fixed timestamp for every commit; the local clock is used when unset
    commit_date: Option<DateTime<FixedOffset>>,
}

impl RepositoryConfig {
    /// Load settings from the environment
    ///
    /// An unset or empty `MYGIT_COMMIT_DATE` means "use the clock". A value that
    /// parses neither as RFC 2822 nor as `%Y-%m-%d %H:%M:%S %z` is an error.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = match std::env::var(COMMIT_DATE_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(
                parse_commit_date(value.trim())
                    .with_context(|| format!("{COMMIT_DATE_ENV} is not a valid date: {value}"))?,
            ),
            _ => None,
        };

        Ok(RepositoryConfig { commit_date })
    }

    pub fn commit_date(&self) -> Option<DateTime<FixedOffset>> {
        self.commit_date
    }

    pub(crate) fn timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}

pub fn parse_commit_date(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_str(value, COMMIT_DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_both_supported_date_formats() {
        let plain = parse_commit_date("2023-01-01 12:00:00 +0000").unwrap();
        let rfc2822 = parse_commit_date("Sun, 01 Jan 2023 12:00:00 +0000").unwrap();

        assert_eq!(plain, rfc2822);
        assert_eq!(plain.timestamp(), 1_672_574_400);
    }

    #[test]
    fn rejects_unknown_date_format() {
        assert!(parse_commit_date("yesterday at noon").is_err());
    }

    #[test]
    fn pinned_date_is_used_as_timestamp() {
        let date = parse_commit_date("2023-01-01 12:00:00 +0200").unwrap();
        let config = RepositoryConfig::new(Some(date));

        assert_eq!(config.timestamp(), date);
        assert_eq!(config.timestamp(), config.timestamp());
    }
}
