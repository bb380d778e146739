use crate::shared::entity::{Entity, ID};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Class,
    Study,
    Personal,
    Appointment,
}

impl Default for EventType {
    fn default() -> Self {
        Self::Study
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSetting {
    pub minutes_before: i64,
}

impl ReminderSetting {
    pub fn is_valid(&self) -> bool {
        self.minutes_before >= 0 && self.minutes_before <= 60 * 24
    }
}

/// Everything about an event that is not its timing. Recurrence expansion
/// copies it untouched into every occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    #[serde(default, rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub category_id: Option<ID>,
    #[serde(default)]
    pub course_id: Option<ID>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub reminders: Vec<ReminderSetting>,
}

/// A single, concrete occurrence of an event in local wall-clock time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOccurrence {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub metadata: EventMetadata,
}

impl EventOccurrence {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn has_valid_timespan(&self) -> bool {
        self.end > self.start
    }

    /// A copy of this occurrence moved to start at `start`
    pub fn starting_at(&self, start: NaiveDateTime) -> Self {
        Self {
            title: self.title.clone(),
            start,
            end: start + self.duration(),
            metadata: self.metadata.clone(),
        }
    }
}

/// An event as it is stored for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyEvent {
    pub id: ID,
    pub user_id: ID,
    /// Shared by every event created from the same recurring event
    pub series_id: Option<ID>,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub metadata: EventMetadata,
    /// The recurrence rule of the series in iCalendar RRULE form
    pub rrule: Option<String>,
    /// Date of the last occurrence in the series
    pub recurrence_ends_on: Option<NaiveDate>,
    pub created: i64,
}

impl StudyEvent {
    pub fn new(user_id: ID, occurrence: EventOccurrence, created: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            series_id: None,
            title: occurrence.title,
            start: occurrence.start,
            end: occurrence.end,
            metadata: occurrence.metadata,
            rrule: None,
            recurrence_ends_on: None,
            created,
        }
    }

    pub fn occurrence(&self) -> EventOccurrence {
        EventOccurrence {
            title: self.title.clone(),
            start: self.start,
            end: self.end,
            metadata: self.metadata.clone(),
        }
    }
}

impl Entity for StudyEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
