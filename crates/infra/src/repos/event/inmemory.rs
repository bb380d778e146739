use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use study_planner_domain::{StudyEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<StudyEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_start(mut events: Vec<StudyEvent>) -> Vec<StudyEvent> {
    events.sort_by(|e1, e2| e1.start.cmp(&e2.start));
    events
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &StudyEvent) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn save(&self, e: &StudyEvent) -> anyhow::Result<()> {
        save(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<StudyEvent> {
        find(event_id, &self.events)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<StudyEvent>> {
        let res = find_by(&self.events, |event| event.user_id == *user_id);
        Ok(sorted_by_start(res))
    }

    async fn find_by_series(
        &self,
        user_id: &ID,
        series_id: &ID,
    ) -> anyhow::Result<Vec<StudyEvent>> {
        let res = find_by(&self.events, |event| {
            event.user_id == *user_id && event.series_id.as_ref() == Some(series_id)
        });
        Ok(sorted_by_start(res))
    }

    async fn delete(&self, event_id: &ID) -> Option<StudyEvent> {
        delete(event_id, &self.events)
    }

    async fn delete_by_series(&self, user_id: &ID, series_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.events, |event| {
            event.user_id == *user_id && event.series_id.as_ref() == Some(series_id)
        }))
    }
}
