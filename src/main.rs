//! Diagnostic one-shot CLI: build a profile for a registration and print it as
//! JSON. Intended for operational smoke checks, not as a consumer surface.

use habrok::{service::ProfileService, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "habrok=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registration = match std::env::args().nth(1) {
        Some(registration) => registration,
        None => {
            eprintln!("usage: habrok <registration>");
            std::process::exit(2);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &registration).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, registration: &str) -> Result<(), habrok::Error> {
    let service = ProfileService::from_config(config)?;
    let key = service.login().await?;

    let profile = service.build_profile(&key, registration).await?;

    let json = serde_json::to_string_pretty(&profile)
        .map_err(|e| habrok::Error::InternalError(e.to_string()))?;
    println!("{json}");

    Ok(())
}
