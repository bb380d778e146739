use chrono::{prelude::*, NaiveDate, NaiveDateTime};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt::Display,
    str::FromStr,
};
use thiserror::Error;

/// Upper bound on the number of occurrences a single recurring event can
/// be expanded into, the base event included.
pub const MAX_OCCURRENCES: u32 = 100;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// The event does not repeat
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Default for Frequency {
    fn default() -> Self {
        Self::None
    }
}

/// Which week of the month a `MonthlyPattern::NthWeekday` refers to.
/// The last week is modelled by `MonthlyPattern::LastWeekday` instead,
/// as some months only contain four of a given weekday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum NthWeek {
    First,
    Second,
    Third,
    Fourth,
}

impl NthWeek {
    pub fn number(&self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }
}

impl TryFrom<i64> for NthWeek {
    type Error = InvalidRecurrenceError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            _ => Err(InvalidRecurrenceError::InvalidNthWeek(n)),
        }
    }
}

impl From<NthWeek> for i64 {
    fn from(nth: NthWeek) -> Self {
        nth.number() as i64
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MonthlyPattern {
    /// Same day of the month as the base event
    DayOfMonth,
    #[serde(rename_all = "camelCase")]
    NthWeekday { nth_week: NthWeek, weekday: WeekDay },
    LastWeekday { weekday: WeekDay },
}

impl Default for MonthlyPattern {
    fn default() -> Self {
        Self::DayOfMonth
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Only used for `Frequency::Weekly`
    #[serde(default)]
    pub days_of_week: Vec<WeekDay>,
    /// Only used for `Frequency::Monthly`
    #[serde(default)]
    pub monthly: MonthlyPattern,
    /// Exclusive: no occurrence starts on or after midnight of this date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Total number of occurrences, the base event included
    #[serde(default)]
    pub end_after_occurrences: Option<u32>,
}

fn default_interval() -> u32 {
    1
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            interval: 1,
            days_of_week: Vec::new(),
            monthly: MonthlyPattern::DayOfMonth,
            end_date: None,
            end_after_occurrences: None,
        }
    }
}

impl RecurrenceRule {
    pub fn is_valid(&self, start: &NaiveDateTime) -> bool {
        if self.interval < 1 {
            return false;
        }
        if let Some(count) = self.end_after_occurrences {
            if count < 1 {
                return false;
            }
        }
        if let Some(end_date) = self.end_date {
            if end_date <= start.date() {
                return false;
            }
        }
        true
    }

    /// The rule rendered the way iCalendar writes it, e.g.
    /// `FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR;COUNT=3`.
    /// `start` is the start of the base event and is needed to render the
    /// `DayOfMonth` pattern.
    ///
    /// The string describes the same dates as `expand`: weekly rules with
    /// selected days repeat every week, days of month past the 28th fall
    /// back to the last day of shorter months and `UNTIL` is the last
    /// instant before `end_date`.
    pub fn to_rrule_string(&self, start: &NaiveDateTime) -> Option<String> {
        let freq = match self.frequency {
            Frequency::None => return None,
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
        };
        let interval = match self.frequency {
            Frequency::Weekly if !self.days_of_week.is_empty() => 1,
            _ => self.interval,
        };
        let mut parts = vec![format!("FREQ={}", freq), format!("INTERVAL={}", interval)];

        match self.frequency {
            Frequency::Weekly if !self.days_of_week.is_empty() => {
                let mut days = self.days_of_week.clone();
                days.sort();
                days.dedup();
                let days = days.iter().map(|d| d.to_string()).collect::<Vec<_>>();
                parts.push(format!("BYDAY={}", days.join(",")));
            }
            Frequency::Monthly => match &self.monthly {
                MonthlyPattern::DayOfMonth if start.day() > 28 => {
                    let days = (28..=start.day())
                        .map(|d| d.to_string())
                        .collect::<Vec<_>>();
                    parts.push(format!("BYMONTHDAY={};BYSETPOS=-1", days.join(",")));
                }
                MonthlyPattern::DayOfMonth => {
                    parts.push(format!("BYMONTHDAY={}", start.day()));
                }
                MonthlyPattern::NthWeekday { nth_week, weekday } => {
                    parts.push(format!("BYDAY={}{}", nth_week.number(), weekday));
                }
                MonthlyPattern::LastWeekday { weekday } => {
                    parts.push(format!("BYDAY=-1{}", weekday));
                }
            },
            _ => (),
        }

        if let Some(last_day) = self.end_date.and_then(|d| d.pred_opt()) {
            parts.push(format!("UNTIL={}T235959", last_day.format("%Y%m%d")));
        }
        if let Some(count) = self.end_after_occurrences {
            parts.push(format!("COUNT={}", count.min(MAX_OCCURRENCES)));
        }

        Some(parts.join(";"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthlyType {
    DayOfMonth,
    NthWeekday,
    LastWeekday,
}

/// The flat recurrence shape sent by the planner frontend
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSettings {
    pub frequency: Frequency,
    #[serde(default = "default_settings_interval")]
    pub interval: i64,
    #[serde(default)]
    pub days_of_week: Vec<i64>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Older name of `end_after_occurrences`
    #[serde(default)]
    pub occurrences: Option<i64>,
    #[serde(default)]
    pub monthly_type: Option<MonthlyType>,
    /// 1 = first .. 4 = fourth, -1 = last
    #[serde(default)]
    pub nth_week: Option<i64>,
    #[serde(default)]
    pub weekday: Option<i64>,
    #[serde(default)]
    pub end_after_occurrences: Option<i64>,
}

fn default_settings_interval() -> i64 {
    1
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidRecurrenceError {
    #[error("Interval must be a positive integer, got: {0}")]
    InvalidInterval(i64),
    #[error("Weekday must be between 0 (sunday) and 6 (saturday), got: {0}")]
    InvalidWeekday(i64),
    #[error("Week of month must be one of 1, 2, 3, 4 or -1 (last), got: {0}")]
    InvalidNthWeek(i64),
    #[error("Occurrence count must be a positive integer, got: {0}")]
    InvalidOccurrenceCount(i64),
}

impl RecurrenceSettings {
    /// Converts the settings into a `RecurrenceRule` for an event starting at `start`.
    /// Returns `None` when the settings say that the event does not repeat.
    pub fn into_rule(
        self,
        start: &NaiveDateTime,
    ) -> Result<Option<RecurrenceRule>, InvalidRecurrenceError> {
        if self.frequency == Frequency::None {
            return Ok(None);
        }
        if self.interval < 1 || self.interval > u32::MAX as i64 {
            return Err(InvalidRecurrenceError::InvalidInterval(self.interval));
        }

        let days_of_week = self
            .days_of_week
            .iter()
            .map(|d| to_weekday(*d))
            .collect::<Result<Vec<_>, _>>()?;

        let weekday = match self.weekday {
            Some(weekday) => to_weekday(weekday)?,
            None => WeekDay::of(&start.date()),
        };
        let monthly = match self.monthly_type.unwrap_or(MonthlyType::DayOfMonth) {
            MonthlyType::DayOfMonth => MonthlyPattern::DayOfMonth,
            MonthlyType::LastWeekday => MonthlyPattern::LastWeekday { weekday },
            MonthlyType::NthWeekday => match self.nth_week.unwrap_or(1) {
                -1 => MonthlyPattern::LastWeekday { weekday },
                n => MonthlyPattern::NthWeekday {
                    nth_week: NthWeek::try_from(n)?,
                    weekday,
                },
            },
        };

        let end_after_occurrences = match self.end_after_occurrences.or(self.occurrences) {
            Some(count) if count < 1 || count > u32::MAX as i64 => {
                return Err(InvalidRecurrenceError::InvalidOccurrenceCount(count))
            }
            Some(count) => Some(count as u32),
            None => None,
        };

        Ok(Some(RecurrenceRule {
            frequency: self.frequency,
            interval: self.interval as u32,
            days_of_week,
            monthly,
            end_date: self.end_date,
            end_after_occurrences,
        }))
    }
}

fn to_weekday(weekday: i64) -> Result<WeekDay, InvalidRecurrenceError> {
    if weekday < 0 || weekday > 6 {
        return Err(InvalidRecurrenceError::InvalidWeekday(weekday));
    }
    WeekDay::new(weekday as u32).map_err(|_| InvalidRecurrenceError::InvalidWeekday(weekday))
}

/// Day of the week, 0 = sunday .. 6 = saturday
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekDay(u32);

impl WeekDay {
    pub fn new(weekday: u32) -> Result<Self, InvalidWeekDayError> {
        if !Self::is_valid_weekday(weekday) {
            return Err(InvalidWeekDayError::OutOfRange(weekday));
        }
        Ok(Self(weekday))
    }

    /// The weekday `date` falls on
    pub fn of(date: &NaiveDate) -> Self {
        Self(date.weekday().num_days_from_sunday())
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    fn is_valid_weekday(wday: u32) -> bool {
        wday <= 6
    }
}

impl Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", weekday_to_str(self.0))
    }
}

fn str_to_weekday(d: &str) -> Result<u32, InvalidWeekDayError> {
    match d.to_uppercase().as_str() {
        "SU" => Ok(0),
        "MO" => Ok(1),
        "TU" => Ok(2),
        "WE" => Ok(3),
        "TH" => Ok(4),
        "FR" => Ok(5),
        "SA" => Ok(6),
        _ => Err(InvalidWeekDayError::InvalidWeekdayIdentifier(d.to_string())),
    }
}

fn weekday_to_str(wday: u32) -> &'static str {
    match wday {
        0 => "SU",
        1 => "MO",
        2 => "TU",
        3 => "WE",
        4 => "TH",
        5 => "FR",
        _ => "SA",
    }
}

#[derive(Error, Debug)]
pub enum InvalidWeekDayError {
    #[error("Invalid weekday specified: {0}")]
    InvalidWeekdayIdentifier(String),
    #[error("Weekday out of range: {0}")]
    OutOfRange(u32),
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDayError;

    fn from_str(day: &str) -> Result<Self, Self::Err> {
        match day.parse::<u32>() {
            Ok(n) => WeekDay::new(n),
            Err(_) => WeekDay::new(str_to_weekday(day)?),
        }
    }
}

impl Serialize for WeekDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct WeekDayVisitor;

        impl<'de> Visitor<'de> for WeekDayVisitor {
            type Value = WeekDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A weekday number between 0 and 6 or a weekday identifier")
            }

            fn visit_u64<E>(self, value: u64) -> Result<WeekDay, E>
            where
                E: serde::de::Error,
            {
                if value > 6 {
                    return Err(E::custom(format!("Malformed weekday: {}", value)));
                }
                WeekDay::new(value as u32)
                    .map_err(|_| E::custom(format!("Malformed weekday: {}", value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<WeekDay, E>
            where
                E: serde::de::Error,
            {
                if value < 0 {
                    return Err(E::custom(format!("Malformed weekday: {}", value)));
                }
                self.visit_u64(value as u64)
            }

            fn visit_str<E>(self, value: &str) -> Result<WeekDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<WeekDay>()
                    .map_err(|_| E::custom(format!("Malformed weekday: {}", value)))
            }
        }

        deserializer.deserialize_any(WeekDayVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd(2025, 1, 6).and_hms(9, 0, 0)
    }

    #[test]
    fn parses_valid_weekday_str_correctly() {
        assert_eq!("su".parse::<WeekDay>().unwrap(), WeekDay::new(0).unwrap());
        assert_eq!("MO".parse::<WeekDay>().unwrap(), WeekDay::new(1).unwrap());
        assert_eq!("sa".parse::<WeekDay>().unwrap(), WeekDay::new(6).unwrap());
        assert_eq!("3".parse::<WeekDay>().unwrap(), WeekDay::new(3).unwrap());
    }

    #[test]
    fn parses_invalid_weekday_str_correctly() {
        assert!("".parse::<WeekDay>().is_err());
        assert!("7".parse::<WeekDay>().is_err());
        assert!("-1".parse::<WeekDay>().is_err());
        assert!("mon".parse::<WeekDay>().is_err());
        assert!("1mo".parse::<WeekDay>().is_err());
    }

    #[test]
    fn serializes_weekday() {
        assert_eq!(WeekDay::new(0).unwrap().to_string(), "SU");
        assert_eq!(WeekDay::new(2).unwrap().to_string(), "TU");
        assert_eq!(WeekDay::new(6).unwrap().to_string(), "SA");
        assert_eq!(serde_json::to_string(&WeekDay::new(5).unwrap()).unwrap(), "5");
        assert_eq!(
            serde_json::from_str::<Vec<WeekDay>>("[1, \"we\"]").unwrap(),
            vec![WeekDay::new(1).unwrap(), WeekDay::new(3).unwrap()]
        );
        assert!(serde_json::from_str::<WeekDay>("9").is_err());
    }

    #[test]
    fn weekday_of_date() {
        // 2025-01-01 was a wednesday
        assert_eq!(
            WeekDay::of(&NaiveDate::from_ymd(2025, 1, 1)),
            WeekDay::new(3).unwrap()
        );
        assert_eq!(
            WeekDay::of(&NaiveDate::from_ymd(2025, 1, 5)),
            WeekDay::new(0).unwrap()
        );
    }

    #[test]
    fn none_frequency_settings_has_no_rule() {
        let settings = RecurrenceSettings {
            frequency: Frequency::None,
            ..Default::default()
        };
        assert_eq!(settings.into_rule(&start()), Ok(None));
    }

    #[test]
    fn converts_weekly_settings() {
        let settings: RecurrenceSettings = serde_json::from_str(
            r#"{
                "frequency": "weekly",
                "interval": 1,
                "daysOfWeek": [1, 3, 5],
                "endDate": "2025-01-20"
            }"#,
        )
        .unwrap();
        let rule = settings.into_rule(&start()).unwrap().unwrap();
        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.days_of_week.len(), 3);
        assert_eq!(rule.end_date, Some(NaiveDate::from_ymd(2025, 1, 20)));
        assert_eq!(rule.end_after_occurrences, None);
    }

    #[test]
    fn converts_last_nth_week_into_last_weekday() {
        let settings = RecurrenceSettings {
            frequency: Frequency::Monthly,
            interval: 1,
            monthly_type: Some(MonthlyType::NthWeekday),
            nth_week: Some(-1),
            weekday: Some(5),
            ..Default::default()
        };
        let rule = settings.into_rule(&start()).unwrap().unwrap();
        assert_eq!(
            rule.monthly,
            MonthlyPattern::LastWeekday {
                weekday: WeekDay::new(5).unwrap()
            }
        );
    }

    #[test]
    fn weekday_defaults_to_the_start_weekday() {
        let settings = RecurrenceSettings {
            frequency: Frequency::Monthly,
            interval: 1,
            monthly_type: Some(MonthlyType::NthWeekday),
            nth_week: Some(2),
            ..Default::default()
        };
        let rule = settings.into_rule(&start()).unwrap().unwrap();
        assert_eq!(
            rule.monthly,
            MonthlyPattern::NthWeekday {
                nth_week: NthWeek::Second,
                weekday: WeekDay::new(1).unwrap()
            }
        );
    }

    #[test]
    fn falls_back_to_legacy_occurrences_field() {
        let settings = RecurrenceSettings {
            frequency: Frequency::Daily,
            interval: 1,
            occurrences: Some(5),
            ..Default::default()
        };
        let rule = settings.into_rule(&start()).unwrap().unwrap();
        assert_eq!(rule.end_after_occurrences, Some(5));
    }

    #[test]
    fn rejects_invalid_settings() {
        let invalid = vec![
            (
                RecurrenceSettings {
                    frequency: Frequency::Daily,
                    interval: 0,
                    ..Default::default()
                },
                InvalidRecurrenceError::InvalidInterval(0),
            ),
            (
                RecurrenceSettings {
                    frequency: Frequency::Weekly,
                    interval: 1,
                    days_of_week: vec![1, 7],
                    ..Default::default()
                },
                InvalidRecurrenceError::InvalidWeekday(7),
            ),
            (
                RecurrenceSettings {
                    frequency: Frequency::Monthly,
                    interval: 1,
                    monthly_type: Some(MonthlyType::NthWeekday),
                    nth_week: Some(5),
                    ..Default::default()
                },
                InvalidRecurrenceError::InvalidNthWeek(5),
            ),
            (
                RecurrenceSettings {
                    frequency: Frequency::Daily,
                    interval: 1,
                    end_after_occurrences: Some(0),
                    ..Default::default()
                },
                InvalidRecurrenceError::InvalidOccurrenceCount(0),
            ),
        ];
        for (settings, expected) in invalid {
            assert_eq!(settings.into_rule(&start()), Err(expected));
        }
    }

    #[test]
    fn validates_rule_against_start() {
        assert!(RecurrenceRule::default().is_valid(&start()));
        assert!(!RecurrenceRule {
            interval: 0,
            ..Default::default()
        }
        .is_valid(&start()));
        assert!(!RecurrenceRule {
            end_after_occurrences: Some(0),
            ..Default::default()
        }
        .is_valid(&start()));
        assert!(!RecurrenceRule {
            end_date: Some(start().date()),
            ..Default::default()
        }
        .is_valid(&start()));
    }

    #[test]
    fn renders_rrule_string() {
        let weekly = RecurrenceRule {
            frequency: Frequency::Weekly,
            days_of_week: vec![
                WeekDay::new(5).unwrap(),
                WeekDay::new(1).unwrap(),
                WeekDay::new(3).unwrap(),
            ],
            end_after_occurrences: Some(3),
            ..Default::default()
        };
        assert_eq!(
            weekly.to_rrule_string(&start()).unwrap(),
            "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR;COUNT=3"
        );

        let monthly = RecurrenceRule {
            frequency: Frequency::Monthly,
            interval: 2,
            monthly: MonthlyPattern::NthWeekday {
                nth_week: NthWeek::Second,
                weekday: WeekDay::new(2).unwrap(),
            },
            end_date: Some(NaiveDate::from_ymd(2025, 12, 31)),
            ..Default::default()
        };
        assert_eq!(
            monthly.to_rrule_string(&start()).unwrap(),
            "FREQ=MONTHLY;INTERVAL=2;BYDAY=2TU;UNTIL=20251230T235959"
        );

        let last_friday = RecurrenceRule {
            frequency: Frequency::Monthly,
            monthly: MonthlyPattern::LastWeekday {
                weekday: WeekDay::new(5).unwrap(),
            },
            end_after_occurrences: Some(500),
            ..Default::default()
        };
        assert_eq!(
            last_friday.to_rrule_string(&start()).unwrap(),
            "FREQ=MONTHLY;INTERVAL=1;BYDAY=-1FR;COUNT=100"
        );

        assert_eq!(
            RecurrenceRule {
                frequency: Frequency::Monthly,
                ..Default::default()
            }
            .to_rrule_string(&start())
            .unwrap(),
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=6"
        );

        assert!(RecurrenceRule {
            frequency: Frequency::None,
            ..Default::default()
        }
        .to_rrule_string(&start())
        .is_none());
    }

    #[test]
    fn renders_rrule_string_matching_expansion() {
        // Selected weekdays repeat every week whatever the interval
        let every_other_monday = RecurrenceRule {
            frequency: Frequency::Weekly,
            interval: 2,
            days_of_week: vec![WeekDay::new(1).unwrap()],
            end_after_occurrences: Some(3),
            ..Default::default()
        };
        assert_eq!(
            every_other_monday.to_rrule_string(&start()).unwrap(),
            "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO;COUNT=3"
        );
        let every_other_week = RecurrenceRule {
            frequency: Frequency::Weekly,
            interval: 2,
            ..Default::default()
        };
        assert_eq!(
            every_other_week.to_rrule_string(&start()).unwrap(),
            "FREQ=WEEKLY;INTERVAL=2"
        );

        // Late days of month fall back to the last day of shorter months
        let monthly = RecurrenceRule {
            frequency: Frequency::Monthly,
            end_after_occurrences: Some(3),
            ..Default::default()
        };
        assert_eq!(
            monthly
                .to_rrule_string(&NaiveDate::from_ymd(2025, 1, 31).and_hms(9, 0, 0))
                .unwrap(),
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=28,29,30,31;BYSETPOS=-1;COUNT=3"
        );
        assert_eq!(
            monthly
                .to_rrule_string(&NaiveDate::from_ymd(2025, 1, 29).and_hms(9, 0, 0))
                .unwrap(),
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=28,29;BYSETPOS=-1;COUNT=3"
        );
        assert_eq!(
            monthly
                .to_rrule_string(&NaiveDate::from_ymd(2025, 1, 28).and_hms(9, 0, 0))
                .unwrap(),
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=28;COUNT=3"
        );

        // The end date itself is not part of the series
        let daily = RecurrenceRule {
            frequency: Frequency::Daily,
            end_date: Some(NaiveDate::from_ymd(2025, 1, 20)),
            ..Default::default()
        };
        assert_eq!(
            daily.to_rrule_string(&start()).unwrap(),
            "FREQ=DAILY;INTERVAL=1;UNTIL=20250119T235959"
        );
    }

    #[test]
    fn deserializes_monthly_pattern() {
        let rule: RecurrenceRule = serde_json::from_str(
            r#"{
                "frequency": "monthly",
                "monthly": { "type": "nthWeekday", "nthWeek": 2, "weekday": 2 }
            }"#,
        )
        .unwrap();
        assert_eq!(rule.interval, 1);
        assert_eq!(
            rule.monthly,
            MonthlyPattern::NthWeekday {
                nth_week: NthWeek::Second,
                weekday: WeekDay::new(2).unwrap()
            }
        );

        assert!(serde_json::from_str::<RecurrenceRule>(
            r#"{
                "frequency": "monthly",
                "monthly": { "type": "nthWeekday", "nthWeek": 5, "weekday": 2 }
            }"#,
        )
        .is_err());
    }
}
