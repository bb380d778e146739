use crate::error::PlannerError;
use crate::shared::usecase::UseCase;
use futures::future::join_all;
use serde::Deserialize;
use study_planner_domain::{
    expand, EventOccurrence, Frequency, InvalidRecurrenceError, RecurrenceRule,
    RecurrenceSettings, StudyEvent, ID,
};
use study_planner_infra::PlannerContext;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    pub user_id: ID,
    pub event: EventOccurrence,
    #[serde(default)]
    pub recurrence: Option<RecurrenceSettings>,
}

impl RequestBody {
    pub fn into_usecase(self) -> Result<CreateEventUseCase, UseCaseError> {
        let recurrence = match self.recurrence {
            Some(settings) => settings
                .into_rule(&self.event.start)
                .map_err(UseCaseError::InvalidRecurrenceSettings)?,
            None => None,
        };
        Ok(CreateEventUseCase {
            user_id: self.user_id,
            event: self.event,
            recurrence,
        })
    }
}

/// Creates an event for a user. A recurring event is expanded into one
/// stored event per occurrence, all sharing the same `series_id`.
#[derive(Debug)]
pub struct CreateEventUseCase {
    pub user_id: ID,
    pub event: EventOccurrence,
    pub recurrence: Option<RecurrenceRule>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidTimespan,
    InvalidReminder,
    InvalidRecurrenceRule,
    InvalidRecurrenceSettings(InvalidRecurrenceError),
    StorageError,
    /// Inserting some of the occurrences failed. The stored ones are not rolled back.
    PartiallyPersisted { persisted: usize, total: usize },
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The event must end after it starts".into())
            }
            UseCaseError::InvalidReminder => {
                Self::BadClientData("Invalid reminder specified for the event".into())
            }
            UseCaseError::InvalidRecurrenceRule => {
                Self::BadClientData("Invalid recurrence rule specified for the event".into())
            }
            UseCaseError::InvalidRecurrenceSettings(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::PartiallyPersisted { persisted, total } => {
                Self::PartiallyPersisted(format!(
                    "{} of the {} events in the series were stored",
                    persisted, total
                ))
            }
        }
    }
}

impl CreateEventUseCase {
    fn build_events(&self, created: i64) -> Vec<StudyEvent> {
        let rule = match &self.recurrence {
            Some(rule) if rule.frequency != Frequency::None => rule,
            _ => return vec![StudyEvent::new(self.user_id, self.event.clone(), created)],
        };

        let occurrences = expand(&self.event, rule);
        let series_id = ID::new();
        let rrule = rule.to_rrule_string(&self.event.start);
        let recurrence_ends_on = occurrences.last().map(|o| o.start.date());

        occurrences
            .into_iter()
            .map(|occurrence| {
                let mut e = StudyEvent::new(self.user_id, occurrence, created);
                e.series_id = Some(series_id);
                e.rrule = rrule.clone();
                e.recurrence_ends_on = recurrence_ends_on;
                e
            })
            .collect()
    }
}

/// Stops at the first failed insert. Returns the number of stored events.
async fn insert_sequentially(events: &[StudyEvent], ctx: &PlannerContext) -> usize {
    let mut stored = 0;
    for e in events {
        if let Err(err) = ctx.repos.events.insert(e).await {
            error!("Unable to store event starting at {}. Error: {:?}", e.start, err);
            break;
        }
        stored += 1;
    }
    stored
}

/// Returns the number of stored events
async fn insert_concurrently(events: &[StudyEvent], ctx: &PlannerContext) -> usize {
    let inserts = events.iter().map(|e| ctx.repos.events.insert(e));
    join_all(inserts)
        .await
        .into_iter()
        .zip(events)
        .filter(|(res, e)| match res {
            Ok(_) => true,
            Err(err) => {
                error!("Unable to store event starting at {}. Error: {:?}", e.start, err);
                false
            }
        })
        .count()
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Vec<StudyEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if !self.event.has_valid_timespan() {
            return Err(UseCaseError::InvalidTimespan);
        }
        if self.event.metadata.reminders.iter().any(|r| !r.is_valid()) {
            return Err(UseCaseError::InvalidReminder);
        }
        if let Some(rule) = &self.recurrence {
            if !rule.is_valid(&self.event.start) {
                return Err(UseCaseError::InvalidRecurrenceRule);
            }
        }

        let events = self.build_events(ctx.sys.get_timestamp_millis());
        info!("Storing {} events for user: {}", events.len(), self.user_id);

        let persisted = if ctx.config.concurrent_inserts {
            insert_concurrently(&events, ctx).await
        } else {
            insert_sequentially(&events, ctx).await
        };

        if persisted == events.len() {
            Ok(events)
        } else if persisted == 0 {
            Err(UseCaseError::StorageError)
        } else {
            Err(UseCaseError::PartiallyPersisted {
                persisted,
                total: events.len(),
            })
        }
    }
}
