mod error;
pub mod event;
mod shared;

pub use error::PlannerError;
pub use shared::usecase::{execute, UseCase};
