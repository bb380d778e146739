use crate::error::PlannerError;
use crate::shared::usecase::UseCase;
use study_planner_domain::ID;
use study_planner_infra::PlannerContext;
use tracing::info;

/// Deletes every event created from the same recurring event
#[derive(Debug)]
pub struct DeleteEventSeriesUseCase {
    pub user_id: ID,
    pub series_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(series_id) => Self::NotFound(format!(
                "The event series with id: {}, was not found.",
                series_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventSeriesUseCase {
    /// Number of deleted events
    type Response = i64;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEventSeries";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let res = ctx
            .repos
            .events
            .delete_by_series(&self.user_id, &self.series_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if res.deleted_count == 0 {
            return Err(UseCaseError::NotFound(self.series_id));
        }
        info!(
            "Deleted {} events in series: {}",
            res.deleted_count, self.series_id
        );
        Ok(res.deleted_count)
    }
}
