//! Time and date labels
//!
//! The time label follows `%H:%M` in 24-hour mode. In 12-hour mode the hour
//! is written without padding and without an am/pm marker. The date label
//! follows `%a%e`: the weekday abbreviation directly followed by the day of
//! month, right aligned in two columns. Single digit days therefore get a
//! space (`"Mon 3"`) while two digit days do not (`"Mon14"`).

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::Error;

/// Capacity of the time label in bytes
pub const TIME_CAPACITY: usize = 7;

/// Capacity of the date label in bytes
pub const DATE_CAPACITY: usize = 9;

/// Columns reserved for the day of month
const DAY_WIDTH: usize = 2;

/// The host's hour format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl ClockStyle {
    /// Map the host's "use 24-hour format" flag
    pub fn from_24h_flag(is_24h: bool) -> Self {
        if is_24h {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }
}

/// The parts of the current instant that end up on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    /// Hour of the day (0-23)
    pub hour: u8,
    pub minute: u8,
    pub weekday: Weekday,
    /// Day of month (1-31)
    pub day: u8,
}

impl From<&NaiveDateTime> for DisplayTime {
    fn from(time: &NaiveDateTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            weekday: time.weekday(),
            day: time.day() as u8,
        }
    }
}

impl DisplayTime {
    /// Hour on a 12-hour dial (1-12)
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }
}

/// Weekday abbreviations, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayNames([&'static str; 7]);

impl WeekdayNames {
    pub const ENGLISH: Self = Self(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    pub const GERMAN: Self = Self(["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]);
    pub const FRENCH: Self = Self(["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."]);
    pub const SPANISH: Self = Self(["lun", "mar", "mié", "jue", "vie", "sáb", "dom"]);

    pub const fn new(names: [&'static str; 7]) -> Self {
        Self(names)
    }

    pub fn abbreviation(&self, weekday: Weekday) -> &'static str {
        self.0[weekday.num_days_from_monday() as usize]
    }
}

impl Default for WeekdayNames {
    fn default() -> Self {
        Self::ENGLISH
    }
}

/// Write the time label into `buf`
pub fn format_time<'b>(
    time: &DisplayTime,
    style: ClockStyle,
    buf: &'b mut [u8; TIME_CAPACITY],
) -> Result<&'b str, Error> {
    match style {
        ClockStyle::TwentyFourHour => {
            format_no_std::show(buf, format_args!("{:02}:{:02}", time.hour, time.minute))
        }
        ClockStyle::TwelveHour => {
            format_no_std::show(buf, format_args!("{}:{:02}", time.hour12(), time.minute))
        }
    }
    .map_err(|_| Error::Format)
}

/// Write the date label into `buf`
///
/// Abbreviations too wide for the label are cut at a character boundary so
/// the day of month always fits.
pub fn format_date<'b>(
    time: &DisplayTime,
    names: &WeekdayNames,
    buf: &'b mut [u8; DATE_CAPACITY],
) -> Result<&'b str, Error> {
    let weekday = truncate(names.abbreviation(time.weekday), DATE_CAPACITY - DAY_WIDTH);
    format_no_std::show(buf, format_args!("{}{:>2}", weekday, time.day)).map_err(|_| Error::Format)
}

/// Longest prefix of `text` that is at most `max` bytes and ends on a char
/// boundary
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DisplayTime {
        let time = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        DisplayTime::from(&time)
    }

    fn time_label(time: &DisplayTime, style: ClockStyle) -> String {
        let mut buf = [0; TIME_CAPACITY];
        format_time(time, style, &mut buf).unwrap().to_string()
    }

    fn date_label(time: &DisplayTime, names: &WeekdayNames) -> String {
        let mut buf = [0; DATE_CAPACITY];
        format_date(time, names, &mut buf).unwrap().to_string()
    }

    #[test]
    fn twenty_four_hour() {
        assert_eq!(time_label(&at(2024, 6, 3, 13, 5), ClockStyle::TwentyFourHour), "13:05");
        assert_eq!(time_label(&at(2024, 6, 3, 9, 5), ClockStyle::TwentyFourHour), "09:05");
        assert_eq!(time_label(&at(2024, 6, 3, 0, 0), ClockStyle::TwentyFourHour), "00:00");
    }

    #[test]
    fn twelve_hour_has_no_marker() {
        assert_eq!(time_label(&at(2024, 6, 3, 13, 5), ClockStyle::TwelveHour), "1:05");
        assert_eq!(time_label(&at(2024, 6, 3, 0, 30), ClockStyle::TwelveHour), "12:30");
        assert_eq!(time_label(&at(2024, 6, 3, 12, 0), ClockStyle::TwelveHour), "12:00");
        assert_eq!(time_label(&at(2024, 6, 3, 22, 10), ClockStyle::TwelveHour), "10:10");
    }

    #[test]
    fn date_padding_depends_on_day() {
        // 2024-06-03 and 2024-10-14 are Mondays
        assert_eq!(date_label(&at(2024, 6, 3, 8, 0), &WeekdayNames::ENGLISH), "Mon 3");
        assert_eq!(date_label(&at(2024, 10, 14, 8, 0), &WeekdayNames::ENGLISH), "Mon14");
    }

    #[test]
    fn time_always_fits() {
        for hour in 0..24 {
            for minute in 0..60 {
                let time = at(2024, 1, 1, hour, minute);
                for style in [ClockStyle::TwelveHour, ClockStyle::TwentyFourHour] {
                    assert!(time_label(&time, style).len() <= 5);
                }
            }
        }
    }

    #[test]
    fn bundled_dates_always_fit() {
        let tables = [
            WeekdayNames::ENGLISH,
            WeekdayNames::GERMAN,
            WeekdayNames::FRENCH,
            WeekdayNames::SPANISH,
        ];
        for names in tables {
            // January 2024 covers every weekday and every day of month
            for day in 1..=31 {
                let label = date_label(&at(2024, 1, day, 0, 0), &names);
                assert!(label.len() <= DATE_CAPACITY, "{label}");
            }
        }
    }

    #[test]
    fn english_dates_are_five_wide() {
        for day in 1..=31 {
            let label = date_label(&at(2024, 1, day, 0, 0), &WeekdayNames::ENGLISH);
            assert!(label.chars().count() <= 5, "{label}");
        }
    }

    #[test]
    fn french_names_keep_their_dot() {
        // 2024-01-03 is a Wednesday
        assert_eq!(date_label(&at(2024, 1, 3, 0, 0), &WeekdayNames::FRENCH), "mer. 3");
        assert_eq!(date_label(&at(2024, 1, 31, 0, 0), &WeekdayNames::FRENCH), "mer.31");
    }

    #[test]
    fn wide_names_are_cut() {
        let names = WeekdayNames::new([
            "Montagmorgen",
            "ÄÄÄÄÄ",
            "Wed",
            "Thu",
            "Fri",
            "Sat",
            "Sun",
        ]);
        // 2024-01-01 is a Monday
        assert_eq!(date_label(&at(2024, 1, 1, 0, 0), &names), "Montagm 1");
        assert_eq!(date_label(&at(2024, 1, 23, 0, 0), &names), "ÄÄÄ23");
    }

    #[test]
    fn clock_style_from_flag() {
        assert_eq!(ClockStyle::from_24h_flag(true), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::from_24h_flag(false), ClockStyle::TwelveHour);
    }
}
