mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, IEventRepo, InMemoryEventRepo, Repos};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct PlannerContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PlannerContext {
    /// Context backed by in-memory repositories, mostly useful for testing
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment.
/// Uses postgres when `DATABASE_URL` is set and in-memory repositories otherwise.
pub async fn setup_context() -> anyhow::Result<PlannerContext> {
    match get_psql_connection_string() {
        Some(connection_string) => PlannerContext::create_postgres(&connection_string).await,
        None => {
            info!("Did not find DATABASE_URL environment variable. Going to use in-memory storage.");
            Ok(PlannerContext::create_inmemory())
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}

pub async fn run_migration() -> anyhow::Result<()> {
    let connection_string = match get_psql_connection_string() {
        Some(connection_string) => connection_string,
        None => return Ok(()),
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    Ok(())
}
