use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use study_planner_infra::{PlannerContext, StaticTimeSys};

/// In-memory context where the clock is frozen at `now` (UTC)
pub fn spawn_context(now: NaiveDateTime) -> PlannerContext {
    let mut ctx = PlannerContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys {
        timestamp_millis: now.timestamp_millis(),
    });
    ctx.config.timezone = chrono_tz::UTC;
    ctx
}

pub fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd(year, month, day).and_hms(hour, 0, 0)
}
