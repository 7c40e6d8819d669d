use anyhow::Context;
use claim_verifier::config::VerifierConfig;
use claim_verifier::server::run_server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Claim verifier v{} starting", env!("CARGO_PKG_VERSION"));

    let config = VerifierConfig::from_env().context("reading configuration from environment")?;

    run_server(config).await.context("server terminated")?;
    Ok(())
}
