/// Soul Library - check and edit saved tracks and albums
use clap::Parser;
use soul_library_cli::{cli::Cli, commands};
use soul_web_client::{ClientConfig, RequestContext, WebApiClient};
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soul_web_client=info,soul_library_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(token) = cli.token {
        config.access_token = Some(token);
    }
    let client = WebApiClient::new(config)?;

    // Ctrl-C cancels the in-flight request
    let (root, cancel) = RequestContext::with_cancel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            cancel.cancel();
        }
    });

    let ctx = match cli.timeout {
        Some(secs) => root.child_with_timeout(Duration::from_secs(secs)),
        None => root,
    };

    let mut stdout = std::io::stdout();
    commands::execute(
        &client,
        &ctx,
        cli.command.kind(),
        cli.command.action(),
        &mut stdout,
    )
    .await
}
