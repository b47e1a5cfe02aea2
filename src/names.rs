use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Abbreviated or full form of a calendar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    Short,
    Long,
}

/// Language of weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display(fmt = "english")]
    English,
    #[display(fmt = "korean")]
    Korean,
}

// Index 0 unused, months are 1-indexed
const MONTH_SHORT: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_LONG: [&str; 13] = [
    "",
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

// Index 0 is Sunday
const WEEKDAY_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAY_LONG_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const WEEKDAY_SHORT_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
const WEEKDAY_LONG_KO: [&str; 7] = [
    "일요일",
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
];

/// Name of `month` (1-12).
pub fn month_name(month: u32, style: NameStyle) -> Option<&'static str> {
    let table = match style {
        NameStyle::Short => &MONTH_SHORT,
        NameStyle::Long => &MONTH_LONG,
    };
    match month {
        1..=12 => table.get(month as usize).copied(),
        _ => None,
    }
}

/// Name of the weekday at `index` (0-6, 0 is Sunday).
pub fn weekday_name(index: u32, style: NameStyle, language: Language) -> Option<&'static str> {
    let table = match (language, style) {
        (Language::English, NameStyle::Short) => &WEEKDAY_SHORT_EN,
        (Language::English, NameStyle::Long) => &WEEKDAY_LONG_EN,
        (Language::Korean, NameStyle::Short) => &WEEKDAY_SHORT_KO,
        (Language::Korean, NameStyle::Long) => &WEEKDAY_LONG_KO,
    };
    table.get(index as usize).copied()
}
