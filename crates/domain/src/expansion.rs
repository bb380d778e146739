use crate::{
    date::{add_months, clamped_date, last_weekday_of_month, nth_weekday_of_month},
    event::EventOccurrence,
    shared::recurrence::{Frequency, MonthlyPattern, RecurrenceRule, WeekDay, MAX_OCCURRENCES},
};
use chrono::{prelude::*, Duration};

/// How far ahead a recurring event without an end date is expanded
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Expands `base` into the concrete occurrences described by `rule`.
///
/// The first element is always `base` itself and the rest follow in strictly
/// increasing start order, each with the same duration and metadata as `base`.
/// Expansion stops at the first of:
/// - the next start would be on or after the rule's end date (or 12 months
///   after the base start when the rule has none)
/// - `end_after_occurrences` occurrences have been produced
/// - [`MAX_OCCURRENCES`] occurrences have been produced
/// - no later start can be computed from the rule
///
/// A rule with `Frequency::None` yields just the base event.
pub fn expand(base: &EventOccurrence, rule: &RecurrenceRule) -> Vec<EventOccurrence> {
    let horizon = horizon(base, rule);
    let max_occurrences = rule
        .end_after_occurrences
        .unwrap_or(MAX_OCCURRENCES)
        .min(MAX_OCCURRENCES) as usize;

    let mut occurrences = vec![base.clone()];
    let mut current = base.start;

    while current < horizon && occurrences.len() < max_occurrences {
        let next = match next_start(&current, base, rule) {
            Some(next) if next > current && next < horizon => next,
            _ => break,
        };
        occurrences.push(base.starting_at(next));
        current = next;
    }

    occurrences
}

fn horizon(base: &EventOccurrence, rule: &RecurrenceRule) -> NaiveDateTime {
    match rule.end_date {
        Some(end_date) => end_date.and_time(NaiveTime::from_hms(0, 0, 0)),
        None => {
            let start = base.start.date();
            let (year, month) = add_months(start.year(), start.month(), DEFAULT_HORIZON_MONTHS);
            match clamped_date(year, month, start.day()) {
                Some(date) => date.and_time(base.start.time()),
                None => base.start,
            }
        }
    }
}

/// Start of the occurrence following the one starting at `current`
fn next_start(
    current: &NaiveDateTime,
    base: &EventOccurrence,
    rule: &RecurrenceRule,
) -> Option<NaiveDateTime> {
    let interval = rule.interval as i64;
    match rule.frequency {
        Frequency::None => None,
        Frequency::Daily => current.checked_add_signed(Duration::days(interval)),
        Frequency::Weekly if rule.days_of_week.is_empty() => {
            current.checked_add_signed(Duration::weeks(interval))
        }
        Frequency::Weekly => next_selected_weekday(current, &rule.days_of_week),
        Frequency::Monthly => {
            let (year, month) = add_months(current.year(), current.month(), rule.interval);
            let date = match &rule.monthly {
                MonthlyPattern::DayOfMonth => clamped_date(year, month, base.start.day()),
                MonthlyPattern::NthWeekday { nth_week, weekday } => {
                    let target_month = NaiveDate::from_ymd_opt(year, month, 1)?;
                    nth_weekday_of_month(&target_month, nth_week.number(), *weekday)
                }
                MonthlyPattern::LastWeekday { weekday } => {
                    let target_month = NaiveDate::from_ymd_opt(year, month, 1)?;
                    last_weekday_of_month(&target_month, *weekday)
                }
            }?;
            Some(date.and_time(base.start.time()))
        }
    }
}

/// Scans the seven days after `current` for the first one falling on one of
/// `days`. Falls back to the last day scanned.
fn next_selected_weekday(current: &NaiveDateTime, days: &[WeekDay]) -> Option<NaiveDateTime> {
    let mut candidate = *current;
    for _ in 0..7 {
        candidate = candidate.checked_add_signed(Duration::days(1))?;
        if days.contains(&WeekDay::of(&candidate.date())) {
            return Some(candidate);
        }
    }
    Some(candidate)
}
