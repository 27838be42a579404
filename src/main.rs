use tracing_subscriber::EnvFilter;

use user_registry::config::Config;
use user_registry::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    server::start(config).await?;
    Ok(())
}
