pub mod create_event;
pub mod delete_event;
pub mod delete_event_series;
pub mod get_events;
pub mod get_upcoming_events;
pub mod update_event;
