use chrono::{Datelike, Duration, NaiveDate, Utc};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Current calendar date in UTC, the reference point for every trailing window.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Time granularity used to group records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Day,
    Week,
    Month,
}

impl Bucket {
    pub fn key(&self, date: NaiveDate) -> String {
        match self {
            Bucket::Day => date.format("%Y-%m-%d").to_string(),
            Bucket::Week => week_key(date),
            Bucket::Month => month_key(date),
        }
    }
}

/// A trailing span ending today. The start date is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl Window {
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            Window::Days(n) => today - Duration::days(i64::from(n)),
            Window::Weeks(n) => today - Duration::days(7 * i64::from(n)),
            Window::Months(n) => shift_months_overflowing(today, -(n as i32)),
        }
    }
}

/// Shift by whole months, letting a day past the end of the target month roll into the
/// following month (Mar 31 minus one month is Mar 3, or Mar 2 in leap years).
fn shift_months_overflowing(date: NaiveDate, months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month0() as i32 + months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;

    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first + Duration::days(i64::from(date.day0())),
        None => date,
    }
}

/// `YYYY-MM` bucket key.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// "August 2025" for a `YYYY-MM` key (trailing `-DD` is ignored).
///
/// Returns `None` unless the month token is one of "1".."12" or "01".."12" and the year is
/// four digits.
pub fn month_name(month_key: &str) -> Option<String> {
    let mut parts = month_key.split('-');
    let year = parts.next()?;
    let month = parse_month_number(parts.next()?)?;

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{} {}", MONTH_NAMES[month as usize - 1], year))
}

fn parse_month_number(token: &str) -> Option<u32> {
    let digits = match token.as_bytes() {
        [b'0', rest @ ..] if rest.len() == 1 => rest,
        other if other.len() <= 2 => other,
        _ => return None,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let month: u32 = std::str::from_utf8(digits).ok()?.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// `YYYY-Www` bucket key.
///
/// Weeks start on Monday and are numbered from the start of the calendar year: days before
/// the year's first Monday fall in week `00`. This is deliberately not ISO 8601 week numbering,
/// so a year may have a week 00 and a week 53 and week labels never cross a year boundary.
pub fn week_key(date: NaiveDate) -> String {
    let week = (date.ordinal0() + 7 - date.weekday().num_days_from_monday()) / 7;
    format!("{}-W{:02}", date.year(), week)
}

/// Monday..Sunday span containing `date`, where Sunday is the first Sunday on or after it.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_to_sunday = (7 - date.weekday().num_days_from_sunday()) % 7;
    let end = date + Duration::days(i64::from(days_to_sunday));
    (end - Duration::days(6), end)
}

/// "08-11 to 08-17, 2025" for two `YYYY-MM-DD` strings.
///
/// The month-day and year fields are cut out by position without validating the date. When
/// either side is shorter than 10 characters the two strings are joined verbatim as
/// "<start> to <end>".
pub fn format_week_range(start: &str, end: &str) -> String {
    let raw = || format!("{} to {}", start, end);
    if start.chars().count() < 10 || end.chars().count() < 10 {
        return raw();
    }

    match (start.get(5..10), end.get(5..10), end.get(..4)) {
        (Some(start_md), Some(end_md), Some(year)) => {
            format!("{} to {}, {}", start_md, end_md, year)
        }
        _ => raw(),
    }
}
