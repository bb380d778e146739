mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;
use study_planner_domain::{StudyEvent, ID};

/// Record store for `StudyEvent`s. Every event belongs to a single user.
#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &StudyEvent) -> anyhow::Result<()>;
    async fn save(&self, e: &StudyEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<StudyEvent>;
    /// All the events of the user, earliest start first
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<StudyEvent>>;
    /// All the events of a recurring series, earliest start first
    async fn find_by_series(&self, user_id: &ID, series_id: &ID)
        -> anyhow::Result<Vec<StudyEvent>>;
    async fn delete(&self, event_id: &ID) -> Option<StudyEvent>;
    async fn delete_by_series(&self, user_id: &ID, series_id: &ID)
        -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use study_planner_domain::{EventMetadata, EventOccurrence, EventType};

    fn generate_event(user_id: &ID, series_id: Option<ID>, day: u32) -> StudyEvent {
        let start = NaiveDate::from_ymd(2025, 1, day).and_hms(9, 0, 0);
        let mut event = StudyEvent::new(
            *user_id,
            EventOccurrence {
                title: "Thermodynamics".into(),
                start,
                end: start + Duration::hours(1),
                metadata: EventMetadata {
                    event_type: EventType::Class,
                    ..Default::default()
                },
            },
            0,
        );
        event.series_id = series_id;
        event
    }

    #[tokio::test]
    async fn create_and_delete() {
        let repo = InMemoryEventRepo::new();
        let user_id = ID::new();
        let event = generate_event(&user_id, None, 1);

        assert!(repo.insert(&event).await.is_ok());
        assert_eq!(repo.find(&event.id).await, Some(event.clone()));
        assert_eq!(repo.delete(&event.id).await, Some(event.clone()));
        assert!(repo.find(&event.id).await.is_none());
        assert!(repo.delete(&event.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let repo = InMemoryEventRepo::new();
        let mut event = generate_event(&ID::new(), None, 1);
        assert!(repo.insert(&event).await.is_ok());

        event.title = "Statistical mechanics".into();
        assert!(repo.save(&event).await.is_ok());
        assert_eq!(
            repo.find(&event.id).await.expect("To find event").title,
            "Statistical mechanics"
        );
    }

    #[tokio::test]
    async fn finds_by_user_ordered_by_start() {
        let repo = InMemoryEventRepo::new();
        let user_id = ID::new();
        let later = generate_event(&user_id, None, 10);
        let earlier = generate_event(&user_id, None, 2);
        let other_user = generate_event(&ID::new(), None, 5);
        for e in &[&later, &earlier, &other_user] {
            repo.insert(e).await.expect("To insert event");
        }

        let events = repo.find_by_user(&user_id).await.expect("To find events");
        assert_eq!(events, vec![earlier, later]);
    }

    #[tokio::test]
    async fn finds_and_deletes_by_series() {
        let repo = InMemoryEventRepo::new();
        let user_id = ID::new();
        let series_id = ID::new();
        for day in 1..=3 {
            repo.insert(&generate_event(&user_id, Some(series_id), day))
                .await
                .expect("To insert event");
        }
        let single = generate_event(&user_id, None, 4);
        repo.insert(&single).await.expect("To insert event");

        // Another user can not touch the series
        let res = repo
            .delete_by_series(&ID::new(), &series_id)
            .await
            .expect("To delete");
        assert_eq!(res.deleted_count, 0);

        let series = repo
            .find_by_series(&user_id, &series_id)
            .await
            .expect("To find series");
        assert_eq!(series.len(), 3);

        let res = repo
            .delete_by_series(&user_id, &series_id)
            .await
            .expect("To delete");
        assert_eq!(res.deleted_count, 3);
        assert_eq!(
            repo.find_by_user(&user_id).await.expect("To find events"),
            vec![single]
        );
    }
}
