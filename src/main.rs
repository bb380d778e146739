mod telemetry;

use anyhow::Context;
use std::io::Read;
use study_planner_api::event::create_event::RequestBody;
use study_planner_api::{execute, PlannerError};
use study_planner_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("study_planner".into(), "info".into());
    init_subscriber(subscriber);

    run_migration().await?;
    let context = setup_context().await?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read request from stdin")?;
    let body: RequestBody =
        serde_json::from_str(&input).context("Failed to parse create event request")?;

    let usecase = body.into_usecase().map_err(PlannerError::from)?;
    let events = execute(usecase, &context)
        .await
        .map_err(PlannerError::from)?;

    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}
