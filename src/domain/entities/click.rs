//! Click entity representing one recorded activation of a link.

use chrono::{DateTime, NaiveDate, Utc};

/// A click on a profile link.
///
/// Clicks are append-only. `date` is the UTC calendar day of `clicked_at`
/// and is stored explicitly so daily counters never depend on the database
/// session time zone.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub clicked_at: DateTime<Utc>,
    pub date: NaiveDate,
}

/// Input data for recording a click.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClick {
    pub link_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub clicked_at: DateTime<Utc>,
    pub date: NaiveDate,
}

impl NewClick {
    /// Builds a click stamped at `clicked_at`, deriving its UTC calendar day.
    pub fn at(
        link_id: i64,
        ip_address: Option<String>,
        user_agent: String,
        clicked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            link_id,
            ip_address,
            user_agent,
            clicked_at,
            date: clicked_at.date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_click_derives_utc_date() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 0).unwrap();
        let click = NewClick::at(7, Some("10.0.0.1".to_string()), "curl/8".to_string(), at);

        assert_eq!(click.link_id, 7);
        assert_eq!(click.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(click.clicked_at, at);
    }

    #[test]
    fn test_new_click_without_ip() {
        let click = NewClick::at(1, None, String::new(), Utc::now());

        assert!(click.ip_address.is_none());
        assert!(click.user_agent.is_empty());
    }
}
