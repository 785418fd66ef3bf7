use chrono::{NaiveDate, NaiveDateTime};

use crate::server::util::date::{
    format_display, format_timestamp, parse_display, parse_timestamp, weekday_abbrev,
};

mod format_display;
mod parse_display;

fn day(value: &str) -> NaiveDate {
    value.parse().unwrap()
}
