use crate::error::PlannerError;
use crate::shared::usecase::UseCase;
use study_planner_domain::{StudyEvent, ID};
use study_planner_infra::PlannerContext;

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = StudyEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.user_id == self.user_id => ctx
                .repos
                .events
                .delete(&event.id)
                .await
                .ok_or(UseCaseError::NotFound(self.event_id)),
            _ => Err(UseCaseError::NotFound(self.event_id)),
        }
    }
}
