use chrono::{DateTime, NaiveDate, Utc};

use super::domain::Applicant;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an RFC 3339 timestamp or YYYY-MM-DD date")]
pub struct InvalidTimestamp(pub String);

/// RFC 3339 timestamps, or bare `YYYY-MM-DD` dates taken as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, InvalidTimestamp> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| InvalidTimestamp(raw.to_string()))
}

/// An action is overdue once its due timestamp is strictly before `now`.
pub fn is_overdue(next_action_due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    matches!(next_action_due, Some(due) if due < now)
}

/// Whole days elapsed since `created_at`, floored. Negative when `created_at` lies ahead of `now`.
pub fn days_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = now.signed_duration_since(created_at).num_milliseconds();
    elapsed.div_euclid(MILLIS_PER_DAY)
}

pub fn overdue_count(applicants: &[Applicant], now: DateTime<Utc>) -> usize {
    applicants
        .iter()
        .filter(|applicant| applicant.is_overdue(now))
        .count()
}

impl Applicant {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        is_overdue(self.next_action_due, now)
    }

    pub fn days_since_applied(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.created_at, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(raw: &str) -> DateTime<Utc> {
        raw.parse().expect("valid timestamp")
    }

    #[test]
    fn timestamps_accept_dates_and_rfc3339() {
        let date = parse_timestamp("2025-01-24").expect("date parses");
        let full = parse_timestamp(" 2025-01-24T00:00:00Z ").expect("timestamp parses");
        assert_eq!(date, full);
        assert_eq!(
            parse_timestamp("2025-01-24T02:00:00+02:00").expect("offset parses"),
            date
        );
        assert_eq!(
            parse_timestamp("Jan 24"),
            Err(InvalidTimestamp("Jan 24".to_string()))
        );
    }

    #[test]
    fn missing_due_date_is_never_overdue() {
        assert!(!is_overdue(None, at("2030-01-01T00:00:00Z")));
    }

    #[test]
    fn overdue_is_strict() {
        let now = at("2025-01-24T00:00:00Z");
        assert!(is_overdue(Some(at("2025-01-22T14:00:00Z")), now));
        assert!(!is_overdue(Some(now), now));
        assert!(!is_overdue(Some(now + Duration::seconds(1)), now));
        assert!(is_overdue(Some(now - Duration::milliseconds(1)), now));
    }

    #[test]
    fn days_since_floors_partial_days() {
        let created = at("2025-01-21T08:30:00Z");
        assert_eq!(days_since(created, at("2025-01-21T23:59:59Z")), 0);
        assert_eq!(days_since(created, at("2025-01-22T08:29:59Z")), 0);
        assert_eq!(days_since(created, at("2025-01-22T08:30:00Z")), 1);
        assert_eq!(days_since(created, at("2025-01-24T00:00:00Z")), 2);
    }

    #[test]
    fn days_since_goes_negative_for_future_creation() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(days_since(now + Duration::hours(1), now), -1);
        assert_eq!(days_since(now + Duration::days(3), now), -3);
        assert_eq!(days_since(now, now), 0);
    }

    #[test]
    fn days_since_is_monotonic_in_now() {
        let created = at("2025-01-19T16:45:00Z");
        let mut previous = days_since(created, created - Duration::days(2));
        for hours in (-48..240).step_by(5) {
            let now = created + Duration::hours(hours);
            let current = days_since(created, now);
            assert_eq!(current, days_since(created, now));
            assert!(current >= previous);
            previous = current;
        }
    }
}
