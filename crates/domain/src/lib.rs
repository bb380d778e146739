mod date;
mod event;
mod expansion;
mod shared;

pub use date::{
    add_months, clamped_date, get_month_length, is_leap_year, last_weekday_of_month,
    nth_weekday_of_month,
};
pub use event::{EventMetadata, EventOccurrence, EventType, ReminderSetting, StudyEvent};
pub use expansion::{expand, DEFAULT_HORIZON_MONTHS};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{
    Frequency, InvalidRecurrenceError, InvalidWeekDayError, MonthlyPattern, MonthlyType, NthWeek,
    RecurrenceRule, RecurrenceSettings, WeekDay, MAX_OCCURRENCES,
};
