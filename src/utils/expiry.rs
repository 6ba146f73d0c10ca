use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Classification of a link expiry timestamp relative to "now".
///
/// Links within seven days of expiring are flagged so the UI can prompt the
/// owner to extend them before the share window closes.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Expired,
    ExpiringSoon,
    Active,
}

const EXPIRING_SOON_DAYS: i64 = 7;

pub fn derive_status(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> LinkStatus {
    if expires_at <= now {
        return LinkStatus::Expired;
    }

    if expires_at <= now + Duration::days(EXPIRING_SOON_DAYS) {
        return LinkStatus::ExpiringSoon;
    }

    LinkStatus::Active
}

pub fn can_extend(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    derive_status(expires_at, now) != LinkStatus::Expired
}

pub fn remaining_label(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if expires_at <= now {
        return String::from("Expired");
    }

    let remaining = expires_at - now;

    if remaining.num_days() >= 1 {
        return format!("{} days left", remaining.num_days());
    }

    if remaining.num_hours() >= 1 {
        return format!("{} hours left", remaining.num_hours());
    }

    if remaining.num_minutes() >= 1 {
        return format!("{} minutes left", remaining.num_minutes());
    }

    String::from("less than a minute left")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn past_timestamps_are_expired() {
        let reference = now();

        assert_eq!(
            derive_status(reference - Duration::seconds(1), reference),
            LinkStatus::Expired
        );
        assert_eq!(
            derive_status(reference - Duration::days(400), reference),
            LinkStatus::Expired
        );
        assert_eq!(derive_status(reference, reference), LinkStatus::Expired);
    }

    #[test]
    fn more_than_seven_days_out_is_active() {
        let reference = now();

        assert_eq!(
            derive_status(reference + Duration::days(7) + Duration::seconds(1), reference),
            LinkStatus::Active
        );
        assert_eq!(
            derive_status(reference + Duration::days(365), reference),
            LinkStatus::Active
        );
    }

    #[test]
    fn within_seven_days_is_expiring_soon() {
        let reference = now();

        assert_eq!(
            derive_status(reference + Duration::hours(1), reference),
            LinkStatus::ExpiringSoon
        );
        assert_eq!(
            derive_status(reference + Duration::days(7), reference),
            LinkStatus::ExpiringSoon
        );
    }

    #[test]
    fn expired_links_cannot_be_extended() {
        let reference = now();

        assert!(!can_extend(reference - Duration::days(1), reference));
        assert!(can_extend(reference + Duration::days(1), reference));
    }

    #[test]
    fn remaining_labels_pick_the_largest_unit() {
        let reference = now();

        assert_eq!(
            remaining_label(reference - Duration::days(1), reference),
            "Expired"
        );
        assert_eq!(
            remaining_label(reference + Duration::days(3) + Duration::hours(2), reference),
            "3 days left"
        );
        assert_eq!(
            remaining_label(reference + Duration::hours(5) + Duration::minutes(10), reference),
            "5 hours left"
        );
        assert_eq!(
            remaining_label(reference + Duration::minutes(12), reference),
            "12 minutes left"
        );
        assert_eq!(
            remaining_label(reference + Duration::seconds(30), reference),
            "less than a minute left"
        );
    }
}
