//! Locale-aware date rendering.
//!
//! Formatters never read the process locale or clock themselves; they are
//! handed a [`DateFormatter`] so output is deterministic under test.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Renders a calendar date the way the user's locale writes it.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, at: DateTime<Utc>) -> String;
}

/// Numeric short-date layouts of the supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `7/4/2024` (en-US)
    MonthDayYear,
    /// `04/07/2024` (en-GB, fr-FR)
    DayMonthYear,
    /// `4.7.2024` (de-DE)
    DottedDayMonthYear,
    /// `2024-07-04`
    Iso,
}

impl DateStyle {
    /// Layout for a BCP 47 tag. Unknown tags fall back to [`DateStyle::Iso`].
    pub fn for_locale(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "en" | "en-us" => Self::MonthDayYear,
            "en-gb" | "fr" | "fr-fr" => Self::DayMonthYear,
            "de" | "de-de" => Self::DottedDayMonthYear,
            _ => Self::Iso,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%-m/%-d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::DottedDayMonthYear => "%-d.%-m.%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

/// A [`DateFormatter`] for one locale tag and a fixed UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDateFormatter {
    locale: String,
    style: DateStyle,
    offset: FixedOffset,
}

impl LocaleDateFormatter {
    /// Dates rendered in UTC.
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        let style = DateStyle::for_locale(&locale);
        Self {
            locale,
            style,
            offset: Utc.fix(),
        }
    }

    /// Render dates as seen from `offset` instead of UTC.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn style(&self) -> DateStyle {
        self.style
    }
}

impl Default for LocaleDateFormatter {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl DateFormatter for LocaleDateFormatter {
    fn format_date(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset)
            .format(self.style.pattern())
            .to_string()
    }
}
