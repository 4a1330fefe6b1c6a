use anyhow::Context;
use health_services::{app, telemetry, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    app::run(&ServiceConfig::CATALOG)
        .await
        .context("catalog service terminated")?;

    Ok(())
}
