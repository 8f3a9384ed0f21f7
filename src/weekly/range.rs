use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

// DST gaps are whole multiples of 15 minutes and shorter than a day
const GAP_STEP_MINUTES: i64 = 15;
const GAP_SEARCH_STEPS: i64 = 24 * 60 / GAP_STEP_MINUTES;

/// A Monday-to-Friday window, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WeekRange {
    /// Whether an epoch-millis instant lies inside the window
    pub fn contains_millis(&self, millis: i64) -> bool {
        self.start.timestamp_millis() <= millis && millis <= self.end.timestamp_millis()
    }

    /// Window start as an ISO-8601 UTC instant with millisecond precision
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Work week `weeks_ago` weeks before the one containing `now`
///
/// The week starts at midnight on Monday in `now`'s time zone; Sunday belongs to
/// the week that started six days earlier. The window ends on Friday at
/// 23:59:59.999, so weekends fall outside every window.
pub fn week_range_at<Tz: TimeZone>(now: &DateTime<Tz>, weeks_ago: u32) -> WeekRange {
    let tz = now.timezone();
    let today = now.date_naive();

    let days_back = u64::from(now.weekday().num_days_from_monday()) + 7 * u64::from(weeks_ago);
    let monday = today.checked_sub_days(Days::new(days_back)).unwrap_or(NaiveDate::MIN);
    let saturday = monday.checked_add_days(Days::new(5)).unwrap_or(NaiveDate::MAX);

    let start = local_midnight(&tz, monday);
    let end = local_midnight(&tz, saturday) - Duration::milliseconds(1);

    WeekRange { start, end }
}

/// [`week_range_at`] relative to the local clock
pub fn week_range(weeks_ago: u32) -> WeekRange {
    week_range_at(&chrono::Local::now(), weeks_ago)
}

/// Midnight of `date` in `tz`, as UTC
///
/// Where a DST change skips midnight, the first local time after the gap is used.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight: NaiveDateTime = date.and_time(chrono::NaiveTime::MIN);
    (0..=GAP_SEARCH_STEPS)
        .map(|step| midnight + Duration::minutes(GAP_STEP_MINUTES * step))
        .find_map(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}
