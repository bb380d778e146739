use crate::error::PlannerError;
use crate::shared::usecase::UseCase;
use chrono::NaiveDateTime;
use study_planner_domain::{EventMetadata, StudyEvent, ID};
use study_planner_infra::PlannerContext;

/// Updates a single stored event. Other events of the same series are left untouched.
#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub metadata: Option<EventMetadata>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidTimespan,
    InvalidReminder,
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The event must end after it starts".into())
            }
            UseCaseError::InvalidReminder => {
                Self::BadClientData("Invalid reminder specified for the event".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = StudyEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut e = match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.user_id == self.user_id => event,
            _ => return Err(UseCaseError::NotFound(self.event_id)),
        };

        if let Some(title) = &self.title {
            e.title = title.clone();
        }
        if let Some(start) = self.start {
            e.start = start;
        }
        if let Some(end) = self.end {
            e.end = end;
        }
        if e.end <= e.start {
            return Err(UseCaseError::InvalidTimespan);
        }
        if let Some(metadata) = &self.metadata {
            if metadata.reminders.iter().any(|r| !r.is_valid()) {
                return Err(UseCaseError::InvalidReminder);
            }
            e.metadata = metadata.clone();
        }

        ctx.repos
            .events
            .save(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }
}
