use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use activity_signup::Config;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activity_signup=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    if let Err(e) = activity_signup::run(config).await {
        error!("activity-signup failed: {}", e);
        std::process::exit(1);
    }
}
