use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// en-US short form, e.g. `Mar 13, 2024, 09:30 AM`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}
