use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use tracing::warn;

use crate::error::{GatherError, Result};
use crate::loader::ImageProbe;

/// Days since the portrait last changed before a character counts as inactive.
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;

/// A Realm Reborn launch; stands in for the portrait date when the probe fails.
pub const FALLBACK_LAST_MODIFIED: &str = "Sat, 24 Aug 2013 00:00:01 GMT";

// EEE, dd MMM yyyy HH:mm:ss zzz
static LAST_MODIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), (\d{1,2} [A-Z][a-z]{2} \d{4} \d{2}:\d{2}:\d{2}) ([A-Za-z]{1,5})$").unwrap()
});

/// Zone abbreviations accepted in the header, as hours east of UTC.
const ZONES: &[(&str, i64)] = &[
    ("GMT", 0),
    ("UT", 0),
    ("UTC", 0),
    ("Z", 0),
    ("WET", 0),
    ("BST", 1),
    ("CET", 1),
    ("WEST", 1),
    ("CEST", 2),
    ("EET", 2),
    ("EEST", 3),
    ("JST", 9),
    ("KST", 9),
    ("AEST", 10),
    ("AEDT", 11),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

fn zone_offset(zone: &str) -> Option<Duration> {
    ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(zone))
        .map(|(_, hours)| Duration::hours(*hours))
}

/// Parse a `Last-Modified` value. Anything outside the fixed header format, or with a
/// zone we can't place, is a sign the image host changed and fails naming the
/// character. The weekday is only checked for shape, not against the date.
pub fn parse_last_modified(id: u64, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    let format_error = || GatherError::TimestampFormat {
        id,
        value: value.to_string(),
    };
    let caps = LAST_MODIFIED_RE.captures(value).ok_or_else(format_error)?;
    let local = NaiveDateTime::parse_from_str(&caps[1], "%d %b %Y %H:%M:%S")
        .map_err(|_| format_error())?;
    let offset = zone_offset(&caps[2]).ok_or_else(format_error)?;
    Ok(Utc.from_utc_datetime(&(local - offset)))
}

/// Probe the portrait and resolve its last-modified date. Probe failures fall back to
/// [`FALLBACK_LAST_MODIFIED`]; a header in the wrong format is fatal.
pub async fn resolve_last_modified<P: ImageProbe>(
    probe: &P,
    image_url: &str,
    id: u64,
) -> Result<DateTime<Utc>> {
    let raw = match probe.last_modified(image_url).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(
                "Setting last-active date to ARR launch for character {} after probe error: {}",
                id, e
            );
            FALLBACK_LAST_MODIFIED.to_string()
        }
    };
    parse_last_modified(id, &raw)
}

/// True when `last_modified` falls strictly after `now` minus the activity window.
pub fn is_active(last_modified: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let cutoff = now - Duration::days(ACTIVITY_WINDOW_DAYS);
    last_modified > cutoff
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(Result<String>);

    impl ImageProbe for FixedProbe {
        async fn last_modified(&self, url: &str) -> Result<String> {
            match &self.0 {
                Ok(v) => Ok(v.clone()),
                Err(_) => Err(GatherError::MissingHeader(url.to_string())),
            }
        }
    }

    #[test]
    fn parses_header_format() {
        let dt = parse_last_modified(7, "Wed, 21 Oct 2015 07:28:00 GMT").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap());
    }

    #[test]
    fn general_zone_names_are_resolved() {
        let expected = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        assert_eq!(parse_last_modified(1, "Wed, 21 Oct 2015 07:28:00 UTC").unwrap(), expected);
        assert_eq!(parse_last_modified(1, "Wed, 21 Oct 2015 07:28:00 UT").unwrap(), expected);
        assert_eq!(
            parse_last_modified(1, "Wed, 21 Oct 2015 09:28:00 CEST").unwrap(),
            expected
        );
        assert_eq!(
            parse_last_modified(1, "Wed, 21 Oct 2015 16:28:00 JST").unwrap(),
            expected
        );
        assert_eq!(
            parse_last_modified(1, "Wed, 21 Oct 2015 00:28:00 PDT").unwrap(),
            expected
        );
    }

    #[test]
    fn weekday_is_not_checked_against_date() {
        let dt = parse_last_modified(1, "Thu, 21 Oct 2015 07:28:00 GMT").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap());
    }

    #[test]
    fn unknown_zone_or_date_names_the_character() {
        for bad in ["Wed, 21 Oct 2015 07:28:00 XYZ", "Wed, 32 Oct 2015 07:28:00 GMT", "Wed, 21 Foo 2015 07:28:00 GMT"] {
            let err = parse_last_modified(77, bad).unwrap_err();
            assert!(matches!(err, GatherError::TimestampFormat { id: 77, .. }), "{bad}");
        }
    }

    #[test]
    fn fallback_is_arr_launch() {
        let dt = parse_last_modified(7, FALLBACK_LAST_MODIFIED).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2013, 8, 24, 0, 0, 1).unwrap());
    }

    #[test]
    fn other_formats_name_the_character() {
        for bad in ["2015-10-21T07:28:00Z", "21 Oct 2015 07:28:00 GMT", "Wed, 21 Oct 2015", ""] {
            let err = parse_last_modified(4242, bad).unwrap_err();
            assert!(matches!(err, GatherError::TimestampFormat { id: 4242, .. }), "{bad}");
            assert!(err.to_string().contains("4242"));
        }
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let now = Utc.with_ymd_and_hms(2018, 3, 1, 12, 0, 0).unwrap();
        let cutoff = now - Duration::days(30);
        assert!(!is_active(cutoff, now));
        assert!(is_active(cutoff + Duration::seconds(1), now));
        assert!(is_active(now, now));
        assert!(!is_active(cutoff - Duration::days(400), now));
    }

    #[tokio::test]
    async fn probe_failure_falls_back() {
        let probe = FixedProbe(Err(GatherError::MissingHeader(String::new())));
        let dt = resolve_last_modified(&probe, "https://img2.finalfantasyxiv.com/f/x.jpg", 1)
            .await
            .unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2013, 8, 24, 0, 0, 1).unwrap());
    }

    #[tokio::test]
    async fn malformed_header_is_fatal() {
        let probe = FixedProbe(Ok("yesterday".into()));
        let err = resolve_last_modified(&probe, "x", 99).await.unwrap_err();
        assert!(matches!(err, GatherError::TimestampFormat { id: 99, .. }));
    }

    #[tokio::test]
    async fn probe_value_is_used() {
        let probe = FixedProbe(Ok("Thu, 01 Mar 2018 10:00:00 GMT".into()));
        let dt = resolve_last_modified(&probe, "x", 1).await.unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2018, 3, 1, 10, 0, 0).unwrap());
    }
}
