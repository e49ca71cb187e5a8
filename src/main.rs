use chrono::Utc;
use member_since::{Config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = Config::from_env();
    tracing::debug!(
        user = %config.username,
        readme = %config.readme_path.display(),
        api = %config.api_base,
        "Loaded configuration"
    );

    member_since::run(&config, Utc::now()).await?;

    Ok(())
}
