use anyhow::Context;
use health_services::{app, telemetry, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    app::run(&ServiceConfig::INVENTORY)
        .await
        .context("inventory service terminated")?;

    Ok(())
}
