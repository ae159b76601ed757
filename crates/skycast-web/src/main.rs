//! Skycast server binary: serves the bootstrap page and the dashboard view.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let (config, _validation) = skycast_core::Config::load_validated()?;

    skycast_web::run_server(&config).await
}
