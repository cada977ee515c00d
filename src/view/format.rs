use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// ru-RU long date-time.
const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

pub const INVALID_DATE: &str = "Invalid Date";

/// Offset-less date-time layouts, most precise first.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const STATUS_LABELS: &[(i64, &str)] = &[
    (202, "Approved"),
    (200, "Created"),
    (300, "Sale"),
    (400, "Not available"),
];

/// Item status word, or the code itself when it has none.
pub fn status_label(code: i64) -> String {
    STATUS_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Where displayed times are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The machine's zone, with the offset in effect at each instant.
    Local,
    Fixed(FixedOffset),
}

/// Renders timestamps in the display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    zone: Zone,
}

impl DateFormatter {
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    pub fn utc() -> Self {
        Self::with_offset(Utc.fix())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            zone: Zone::Fixed(offset),
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Empty in, empty out. Unparseable input yields [`INVALID_DATE`].
    pub fn format_date(&self, iso: &str) -> String {
        match self.zone {
            Zone::Local => format_date_in(iso, &Local),
            Zone::Fixed(offset) => format_date_in(iso, &offset),
        }
    }

    /// Missing or zero seconds render as an empty string.
    pub fn format_epoch_seconds(&self, seconds: Option<i64>) -> String {
        match self.zone {
            Zone::Local => format_epoch_seconds_in(seconds, &Local),
            Zone::Fixed(offset) => format_epoch_seconds_in(seconds, &offset),
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::local()
    }
}

fn format_date_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if iso.is_empty() {
        return String::new();
    }
    match parse_in(iso, tz) {
        Some(dt) => display_in(dt, tz),
        None => INVALID_DATE.to_string(),
    }
}

fn format_epoch_seconds_in<Tz>(seconds: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let seconds = match seconds {
        None | Some(0) => return String::new(),
        Some(s) => s,
    };
    seconds
        .checked_mul(1000)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| display_in(dt, tz))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset-less date-times are wall-clock time in the display zone.
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok());
    if let Some(naive) = naive {
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }
    // Date-only forms are UTC midnight.
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn display_in<Tz>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, LocalResult, Timelike};

    use super::*;

    #[test]
    fn known_status_codes_map_to_labels() {
        assert_eq!(status_label(202), "Approved");
        assert_eq!(status_label(200), "Created");
        assert_eq!(status_label(300), "Sale");
        assert_eq!(status_label(400), "Not available");
    }

    #[test]
    fn unknown_status_codes_render_as_numbers() {
        for code in [0, -1, 201, 500, 599, i64::MAX, i64::MIN] {
            let label = status_label(code);
            assert_eq!(label, code.to_string());
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn format_date_empty_is_empty() {
        assert_eq!(DateFormatter::utc().format_date(""), "");
    }

    #[test]
    fn format_date_rfc3339() {
        let utc = DateFormatter::utc();
        assert_eq!(utc.format_date("2021-11-26T06:22:19Z"), "26.11.2021, 06:22:19");
        assert_eq!(
            utc.format_date("2021-11-26T06:22:19.123456789+03:00"),
            "26.11.2021, 03:22:19"
        );
    }

    #[test]
    fn format_date_shifts_to_display_offset() {
        let msk = DateFormatter::with_offset(FixedOffset::east_opt(3 * 3600).expect("offset"));
        assert_eq!(msk.format_date("2021-11-26T22:00:00Z"), "27.11.2021, 01:00:00");
    }

    #[test]
    fn format_date_without_offset_is_wall_clock() {
        let msk = DateFormatter::with_offset(FixedOffset::east_opt(3 * 3600).expect("offset"));
        assert_eq!(msk.format_date("2021-11-26T06:22:19"), "26.11.2021, 06:22:19");
    }

    #[test]
    fn format_date_accepts_minute_precision() {
        let utc = DateFormatter::utc();
        assert_eq!(utc.format_date("2021-11-26T06:22"), "26.11.2021, 06:22:00");
        let msk = DateFormatter::with_offset(FixedOffset::east_opt(3 * 3600).expect("offset"));
        assert_eq!(msk.format_date("2021-11-26T06:22"), "26.11.2021, 06:22:00");
    }

    #[test]
    fn format_date_plain_date_is_utc_midnight() {
        let utc = DateFormatter::utc();
        assert_eq!(utc.format_date("2021-11-26"), "26.11.2021, 00:00:00");
    }

    #[test]
    fn format_date_garbage_is_invalid_date() {
        assert_eq!(DateFormatter::utc().format_date("yesterday"), INVALID_DATE);
    }

    #[test]
    fn epoch_zero_or_missing_is_empty() {
        let utc = DateFormatter::utc();
        assert_eq!(utc.format_epoch_seconds(Some(0)), "");
        assert_eq!(utc.format_epoch_seconds(None), "");
    }

    #[test]
    fn epoch_seconds_render_like_dates() {
        let utc = DateFormatter::utc();
        assert_eq!(utc.format_epoch_seconds(Some(1_700_000_000)), "14.11.2023, 22:13:20");
        assert_eq!(
            utc.format_epoch_seconds(Some(1_637_907_727)),
            utc.format_date("2021-11-26T06:22:07Z")
        );
    }

    #[test]
    fn epoch_out_of_range_is_invalid_date() {
        assert_eq!(DateFormatter::utc().format_epoch_seconds(Some(i64::MAX)), INVALID_DATE);
    }

    /// Central European time with summer time from April to September.
    #[derive(Debug, Clone, Copy)]
    struct SummerTimeZone;

    impl SummerTimeZone {
        fn offset_for(month: u32) -> FixedOffset {
            let hours = if (4..=9).contains(&month) { 2 } else { 1 };
            FixedOffset::east_opt(hours * 3600).expect("offset")
        }
    }

    impl TimeZone for SummerTimeZone {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            SummerTimeZone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_for(local.month()))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_for(local.month()))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_for(utc.month())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_for(utc.month())
        }
    }

    #[test]
    fn zone_offset_follows_the_formatted_instant() {
        let zone = SummerTimeZone;
        assert_eq!(format_date_in("2021-01-01T00:00:00Z", &zone), "01.01.2021, 01:00:00");
        assert_eq!(format_date_in("2021-07-01T00:00:00Z", &zone), "01.07.2021, 02:00:00");
        // 2021-01-01T00:00:00Z and 2021-07-01T00:00:00Z
        assert_eq!(format_epoch_seconds_in(Some(1_609_459_200), &zone), "01.01.2021, 01:00:00");
        assert_eq!(format_epoch_seconds_in(Some(1_625_097_600), &zone), "01.07.2021, 02:00:00");
    }

    #[test]
    fn zone_reads_wall_clock_with_that_dates_offset() {
        let zone = SummerTimeZone;
        let winter = parse_in("2021-01-15T12:00:00", &zone).expect("winter");
        let summer = parse_in("2021-07-15T12:00", &zone).expect("summer");
        assert_eq!(winter.hour(), 11);
        assert_eq!(summer.hour(), 10);
    }

    #[test]
    fn local_formatter_uses_offset_of_each_date() {
        let local = DateFormatter::local();
        assert_eq!(local.zone(), Zone::Local);
        for iso in ["2021-01-01T00:00:00Z", "2021-07-01T00:00:00Z"] {
            let expected = DateTime::parse_from_rfc3339(iso)
                .expect("rfc3339")
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string();
            assert_eq!(local.format_date(iso), expected);
        }
    }
}
