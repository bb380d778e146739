use crate::error::PlannerError;
use crate::shared::usecase::UseCase;
use study_planner_domain::{StudyEvent, ID};
use study_planner_infra::PlannerContext;

/// Events of a user that have not ended yet, earliest first
#[derive(Debug)]
pub struct GetUpcomingEventsUseCase {
    pub user_id: ID,
    pub limit: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingEventsUseCase {
    type Response = Vec<StudyEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingEvents";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_local_datetime(&ctx.config.timezone);
        let events = ctx
            .repos
            .events
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(events
            .into_iter()
            .filter(|e| e.end > now)
            .take(self.limit)
            .collect())
    }
}
