//! Scan notifications.
//!
//! The report server publishes a list of notifications next to the scan
//! results. When the last scan is older than the staleness threshold, a
//! synthetic warning is prepended before display. Fetching and rendering
//! stay with the view layer; this module owns only the merge rule.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A report is stale when it is older than this (26 hours).
pub const STALE_AFTER_SECONDS: i64 = 26 * 60 * 60;

/// Message of the synthetic stale-scan warning.
pub const STALE_MESSAGE: &str =
    "The scan did not complete successfully last night. Check the log files on the server for details.";

/// One notification, as published in the report's notification feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Display severity: `info`, `warning` or `danger`.
    #[serde(rename = "type")]
    pub severity: String,
    pub message: String,
}

impl Notification {
    /// The synthetic warning shown when the scan is stale.
    pub fn stale_warning() -> Self {
        Self {
            severity: "warning".to_string(),
            message: STALE_MESSAGE.to_string(),
        }
    }
}

/// Whether the report written at `report_time` is stale as of `now`.
///
/// `now` is an argument so the rule stays a pure function; the caller reads
/// the clock.
pub fn is_stale(report_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    now - report_time > Duration::seconds(STALE_AFTER_SECONDS)
}

/// Prepend the stale-scan warning to `notifications` when the report is
/// stale; otherwise return the list unchanged.
pub fn with_stale_warning(
    report_time: NaiveDateTime,
    now: NaiveDateTime,
    notifications: Vec<Notification>,
) -> Vec<Notification> {
    if !is_stale(report_time, now) {
        return notifications;
    }
    let mut merged = Vec::with_capacity(notifications.len() + 1);
    merged.push(Notification::stale_warning());
    merged.extend(notifications);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, days_later: u64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 3, 4)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
            + Duration::days(days_later as i64)
    }

    fn info(message: &str) -> Notification {
        Notification {
            severity: "info".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn exactly_26_hours_is_not_yet_stale() {
        let report = at(8, 0);

        assert!(!is_stale(report, report + Duration::seconds(STALE_AFTER_SECONDS)));
        assert!(is_stale(report, report + Duration::seconds(STALE_AFTER_SECONDS + 1)));
    }

    #[test]
    fn fresh_report_leaves_notifications_unchanged() {
        let report = at(8, 0);
        let notifications = vec![info("New metrics available.")];

        let merged = with_stale_warning(report, at(9, 0), notifications.clone());

        assert_eq!(merged, notifications);
    }

    #[test]
    fn stale_report_prepends_the_warning() {
        let report = at(8, 0);
        let notifications = vec![info("New metrics available.")];

        let merged = with_stale_warning(report, at(12, 2), notifications);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], Notification::stale_warning());
        assert_eq!(merged[1].message, "New metrics available.");
    }

    #[test]
    fn notification_wire_name_for_severity_is_type() {
        let parsed: Notification =
            serde_json::from_str(r#"{"type": "danger", "message": "Scan failed."}"#).unwrap();

        assert_eq!(parsed.severity, "danger");
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"type":"danger","message":"Scan failed."}"#
        );
    }
}
