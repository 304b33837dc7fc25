use std::io;

use anyhow::Context;
use clap::Parser;
use jisho_client::JishoClient;
use jisho_config::Config;
use jisho_core::feedback::WriterSink;
use jisho_core::workflow::retrieval_error_item;
use jisho_core::{FeedbackSink, Workflow};

mod cli;
mod logging;

use self::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    logging::init(&log_level, cli.json_logs);

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("{e}, using default config");
        Config::default()
    });

    tracing::debug!("Starting with query {:?}", cli.query);

    let sink = WriterSink::new(io::stdout().lock());
    if let Err(e) = run(cli, &config, sink).await {
        tracing::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}

/// Alfred must always get a feedback document, even when setup fails
async fn run<S: FeedbackSink>(cli: Cli, config: &Config, mut sink: S) -> anyhow::Result<()> {
    let client = match JishoClient::new(&config.api) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {e}");
            let query = cli.query.unwrap_or_default();
            return sink
                .send(&[retrieval_error_item(&query)])
                .context("Failed to send feedback to Alfred");
        }
    };

    let mut workflow = Workflow::with_config(client, sink, config);
    let items = workflow
        .run(cli.query.as_deref(), cli.update_available)
        .await
        .context("Failed to send feedback to Alfred")?;

    tracing::debug!("Sent {} items", items.len());
    Ok(())
}
