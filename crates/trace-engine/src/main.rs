use anyhow::Result;
use tokio::io::{stdin, BufReader};
use tracing_subscriber::EnvFilter;

use algoscope_core::session::run_session;
use algoscope_core::trace::ConsoleSink;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so the trace output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let reader = BufReader::new(stdin());
    let mut sink = ConsoleSink;
    run_session(reader, &mut sink).await?;

    Ok(())
}
