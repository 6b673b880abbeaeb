//! Elapsed-time phrasing

use chrono::{DateTime, Duration, TimeZone};

// Calendar units use 365-day years and 30-day months.
const UNITS: [(u64, &str); 6] = [
	(31_536_000, "year"),
	(2_592_000, "month"),
	(86_400, "day"),
	(3_600, "hour"),
	(60, "minute"),
	(1, "second"),
];

/// Phrase a duration using its two largest non-zero units.
///
/// Negative durations are phrased by their absolute value.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use webutils::convert::format_duration;
///
/// assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
/// assert_eq!(format_duration(Duration::seconds(7_500)), "2 hours and 5 minutes");
/// assert_eq!(format_duration(Duration::seconds(0)), "0 seconds");
/// assert_eq!(format_duration(Duration::days(400)), "1 year and 1 month");
/// ```
pub fn format_duration(duration: Duration) -> String {
	let mut remaining = duration.num_seconds().unsigned_abs();
	if remaining == 0 {
		return "0 seconds".to_string();
	}

	let mut parts = Vec::new();
	for (size, name) in UNITS {
		if parts.len() == 2 {
			break;
		}
		let count = remaining / size;
		if count == 0 {
			continue;
		}
		remaining %= size;
		let plural = if count == 1 { "" } else { "s" };
		parts.push(format!("{} {}{}", count, name, plural));
	}

	parts.join(" and ")
}

/// Phrase how long ago an instant was, relative to `now`.
///
/// Differences under ten seconds read as `"just now"`; instants in the
/// future are phrased with `"from now"`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use webutils::convert::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(&(now - Duration::seconds(3)), &now), "just now");
/// assert_eq!(time_ago(&(now - Duration::minutes(5)), &now), "5 minutes ago");
/// assert_eq!(time_ago(&(now + Duration::hours(2)), &now), "2 hours from now");
/// ```
pub fn time_ago<Tz, Tz2>(then: &DateTime<Tz>, now: &DateTime<Tz2>) -> String
where
	Tz: TimeZone,
	Tz2: TimeZone,
{
	let delta = now.clone().signed_duration_since(then.clone());
	if delta.num_seconds().abs() < 10 {
		return "just now".to_string();
	}

	if delta.num_seconds() >= 0 {
		format!("{} ago", format_duration(delta))
	} else {
		format!("{} from now", format_duration(delta))
	}
}
