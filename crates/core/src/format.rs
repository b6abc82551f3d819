//! Display formatting helpers: prices, dates and URL slugs.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::types::CurrencyCode;

/// Currency used by [`format_price`].
pub const DEFAULT_CURRENCY: &str = "USD";

/// Pattern used by [`format_date`].
pub const DEFAULT_DATE_PATTERN: &str = "MMM dd, yyyy";

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

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));
static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("Invalid regex"));
static REPEATED_HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid regex"));

/// Errors produced by [`format_date_with`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input string is not a recognizable date.
    #[error("Invalid time value: {0}")]
    InvalidDate(String),

    /// The pattern contains an unescaped letter with no meaning.
    #[error("Invalid format pattern token: {0}")]
    InvalidPattern(String),
}

// =============================================================================
// Prices
// =============================================================================

/// Format an amount as US dollars, e.g. `$1,234.50`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format_price_in(amount, DEFAULT_CURRENCY)
}

/// Format an amount in the given ISO 4217 currency using `en-US` conventions.
///
/// Known currencies use their symbol (`€12.00`, `¥1,235`); anything else is
/// prefixed with its upper-cased code and a non-breaking space.
#[must_use]
pub fn format_price_in(amount: Decimal, currency: &str) -> String {
    let (prefix, minor_units) = currency.parse::<CurrencyCode>().map_or_else(
        |_| (format!("{}\u{a0}", currency.to_ascii_uppercase()), 2),
        |code| (code.symbol().to_string(), code.minor_units()),
    );

    let rounded = amount.round_dp_with_strategy(minor_units, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.prec$}", rounded.abs(), prec = minor_units as usize);
    let (whole, fraction) = digits
        .split_once('.')
        .map_or((digits.as_str(), None), |(whole, fraction)| (whole, Some(fraction)));

    let mut out = format!("{sign}{prefix}{}", group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Dates
// =============================================================================

/// Anything [`format_date`] accepts.
///
/// Zoned timestamps are formatted in their own offset; plain dates are
/// treated as midnight.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    /// An already-resolved wall-clock time.
    Resolved(NaiveDateTime),
    /// Text to parse: RFC 3339, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Resolved(value.naive_utc())
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Resolved(value.naive_local())
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        Self::Resolved(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        Self::Resolved(value.and_time(NaiveTime::MIN))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl DateInput<'_> {
    fn resolve(self) -> Result<NaiveDateTime, FormatError> {
        match self {
            Self::Resolved(value) => Ok(value),
            Self::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(text: &str) -> Result<NaiveDateTime, FormatError> {
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Ok(value.naive_local());
    }
    if let Ok(value) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(value.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| FormatError::InvalidDate(text.to_string()))
}

/// Format a date with the default `MMM dd, yyyy` pattern, e.g. `Jan 05, 2024`.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] if a string input cannot be parsed.
pub fn format_date<'a>(date: impl Into<DateInput<'a>>) -> Result<String, FormatError> {
    format_date_with(date, DEFAULT_DATE_PATTERN)
}

/// Format a date with a Unicode-style pattern.
///
/// Supported tokens: `yyyy yy y`, `MMMMM MMMM MMM MM M`, `dd d`,
/// `EEEEE EEEE EEE`, `HH H`, `hh h`, `mm m`, `ss s`, `a`. Text inside single
/// quotes is copied verbatim and `''` yields a single quote. Any other
/// non-letter character is copied as-is.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] for unparseable string input and
/// [`FormatError::InvalidPattern`] for unknown pattern letters.
pub fn format_date_with<'a>(
    date: impl Into<DateInput<'a>>,
    pattern: &str,
) -> Result<String, FormatError> {
    let value = date.into().resolve()?;
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
                continue;
            }
            // Quoted literal; an unterminated quote runs to the end.
            while let Some(quoted) = chars.next() {
                if quoted == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        out.push('\'');
                        continue;
                    }
                    break;
                }
                out.push(quoted);
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }

        let mut count = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            count += 1;
        }
        push_token(&mut out, &value, c, count)?;
    }

    Ok(out)
}

fn push_token(
    out: &mut String,
    value: &NaiveDateTime,
    letter: char,
    count: usize,
) -> Result<(), FormatError> {
    let month_name = MONTH_NAMES
        .get(value.month0() as usize)
        .copied()
        .unwrap_or_default();
    let weekday_name = WEEKDAY_NAMES
        .get(value.weekday().num_days_from_monday() as usize)
        .copied()
        .unwrap_or_default();

    match (letter, count) {
        ('y', 2) => out.push_str(&format!("{:02}", value.year().rem_euclid(100))),
        ('y', width) => out.push_str(&format!("{:0width$}", value.year())),
        ('M', 1 | 2) => out.push_str(&format!("{:0count$}", value.month())),
        ('M', 3) => out.push_str(month_name.get(..3).unwrap_or(month_name)),
        ('M', 4) => out.push_str(month_name),
        ('M', 5) => out.push_str(month_name.get(..1).unwrap_or(month_name)),
        ('d', 1 | 2) => out.push_str(&format!("{:0count$}", value.day())),
        ('E', 1..=3) => out.push_str(weekday_name.get(..3).unwrap_or(weekday_name)),
        ('E', 4) => out.push_str(weekday_name),
        ('E', 5) => out.push_str(weekday_name.get(..1).unwrap_or(weekday_name)),
        ('H', 1 | 2) => out.push_str(&format!("{:0count$}", value.hour())),
        ('h', 1 | 2) => out.push_str(&format!("{:0count$}", value.hour12().1)),
        ('m', 1 | 2) => out.push_str(&format!("{:0count$}", value.minute())),
        ('s', 1 | 2) => out.push_str(&format!("{:0count$}", value.second())),
        ('a', 1..=3) => out.push_str(if value.hour12().0 { "PM" } else { "AM" }),
        _ => return Err(FormatError::InvalidPattern(letter.to_string().repeat(count))),
    }
    Ok(())
}

// =============================================================================
// Slugs
// =============================================================================

/// Turn arbitrary text into a URL-safe slug.
///
/// Lower-cases and trims the input, turns whitespace runs into `-`, drops
/// everything outside `[A-Za-z0-9_-]`, then collapses repeated hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(lowered.trim(), "-");
    let stripped = NON_SLUG_RE.replace_all(&hyphenated, "");
    REPEATED_HYPHEN_RE.replace_all(&stripped, "-").into_owned()
}
