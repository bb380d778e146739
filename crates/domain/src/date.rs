use crate::shared::recurrence::WeekDay;
use chrono::prelude::*;

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

/// Moves (`year`, `month`) forward by `months` months
pub fn add_months(year: i32, month: u32, months: u32) -> (i32, u32) {
    let zero_based = month as i64 - 1 + months as i64;
    let year = year as i64 + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    (year as i32, month)
}

/// The date with the given day of month, or the last day of the month
/// if the month is shorter than `day`
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let day = day.min(get_month_length(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The `n`th `weekday` in the month of `reference`, e.g. the second tuesday.
/// `None` if the month does not have `n` of that weekday, which can only
/// happen for `n` > 4.
pub fn nth_weekday_of_month(reference: &NaiveDate, n: u32, weekday: WeekDay) -> Option<NaiveDate> {
    // No month has more than five of any weekday
    if n == 0 || n > 5 {
        return None;
    }
    let first_of_month = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)?;
    let first_weekday = WeekDay::of(&first_of_month).number();
    let day = 1 + (7 + weekday.number() - first_weekday) % 7 + (n - 1) * 7;
    if day > get_month_length(reference.year(), reference.month()) {
        return None;
    }
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)
}

/// The last `weekday` in the month of `reference`, e.g. the last friday
pub fn last_weekday_of_month(reference: &NaiveDate, weekday: WeekDay) -> Option<NaiveDate> {
    let last_day = get_month_length(reference.year(), reference.month());
    let last_of_month = NaiveDate::from_ymd_opt(reference.year(), reference.month(), last_day)?;
    let last_weekday = WeekDay::of(&last_of_month).number();
    let day = last_day - (7 + last_weekday - weekday.number()) % 7;
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)
}
