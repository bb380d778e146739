use super::IEventRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use std::convert::{TryFrom, TryInto};
use study_planner_domain::{StudyEvent, ID};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    user_uid: Uuid,
    series_uid: Option<Uuid>,
    title: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    metadata: serde_json::Value,
    rrule: Option<String>,
    recurrence_ends_on: Option<NaiveDate>,
    created: i64,
}

impl TryFrom<EventRaw> for StudyEvent {
    type Error = anyhow::Error;

    fn try_from(e: EventRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.event_uid.into(),
            user_id: e.user_uid.into(),
            series_id: e.series_uid.map(ID::from),
            title: e.title,
            start: e.start_time,
            end: e.end_time,
            metadata: serde_json::from_value(e.metadata)?,
            rrule: e.rrule,
            recurrence_ends_on: e.recurrence_ends_on,
            created: e.created,
        })
    }
}

fn into_events(raw: Vec<EventRaw>) -> anyhow::Result<Vec<StudyEvent>> {
    raw.into_iter().map(|e| e.try_into()).collect()
}

fn log_missing(event_id: &ID, res: anyhow::Result<Option<StudyEvent>>) -> Option<StudyEvent> {
    match res {
        Ok(event) => event,
        Err(e) => {
            error!("Unable to read event with id: {}. Error: {:?}", event_id, e);
            None
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &StudyEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO study_events(
                event_uid,
                user_uid,
                series_uid,
                title,
                start_time,
                end_time,
                metadata,
                rrule,
                recurrence_ends_on,
                created
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(e.user_id.inner_ref())
        .bind(e.series_id.map(ID::inner))
        .bind(&e.title)
        .bind(e.start)
        .bind(e.end)
        .bind(Json(&e.metadata))
        .bind(&e.rrule)
        .bind(e.recurrence_ends_on)
        .bind(e.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, e: &StudyEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE study_events SET
                user_uid = $2,
                series_uid = $3,
                title = $4,
                start_time = $5,
                end_time = $6,
                metadata = $7,
                rrule = $8,
                recurrence_ends_on = $9,
                created = $10
            WHERE event_uid = $1
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(e.user_id.inner_ref())
        .bind(e.series_id.map(ID::inner))
        .bind(&e.title)
        .bind(e.start)
        .bind(e.end)
        .bind(Json(&e.metadata))
        .bind(&e.rrule)
        .bind(e.recurrence_ends_on)
        .bind(e.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<StudyEvent> {
        let res = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM study_events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(anyhow::Error::from)
        .and_then(|event| event.map(StudyEvent::try_from).transpose());

        log_missing(event_id, res)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<StudyEvent>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM study_events AS e
            WHERE e.user_uid = $1
            ORDER BY e.start_time
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        into_events(events)
    }

    async fn find_by_series(
        &self,
        user_id: &ID,
        series_id: &ID,
    ) -> anyhow::Result<Vec<StudyEvent>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM study_events AS e
            WHERE e.user_uid = $1 AND e.series_uid = $2
            ORDER BY e.start_time
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(series_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        into_events(events)
    }

    async fn delete(&self, event_id: &ID) -> Option<StudyEvent> {
        let res = sqlx::query_as::<_, EventRaw>(
            r#"
            DELETE FROM study_events AS e
            WHERE e.event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(anyhow::Error::from)
        .and_then(|event| event.map(StudyEvent::try_from).transpose());

        log_missing(event_id, res)
    }

    async fn delete_by_series(&self, user_id: &ID, series_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM study_events AS e
            WHERE e.user_uid = $1 AND e.series_uid = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(series_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
