use std::io;

use anyhow::Context;
use clap::Parser;
use todo_core::RecordClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_cli::{Config, Session, UreqTransport};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing();

    let client = RecordClient::new(&config.base_url);
    info!(base_url = client.base_url(), locale = %config.locale, "starting");
    let transport = UreqTransport::new(config.timeout());
    let (mut session, initial) = Session::start(client, config.locale, transport);

    session
        .run(io::stdin().lock(), io::stdout().lock(), initial)
        .context("terminal I/O failed")
}

/// Logs go to stderr so they never interleave with the rendered frame.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
