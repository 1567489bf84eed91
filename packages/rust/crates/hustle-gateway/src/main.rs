//! hustle-gateway CLI: serve, one-shot query commands, or stdio mode.
//!
//! Logging: set `RUST_LOG=hustle_gateway=info` (or `warn`, `debug`) to
//! see gateway logs on stderr.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hustle_faq::{ask, rewrite_answer, search};
use hustle_gateway::{InMemoryHistory, run_http, run_stdio};
use hustle_types::RewriteResponse;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; default info.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hustle_gateway=info,hustle_faq=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Command::Serve { bind } => {
            // The default binary has no message store attached; trending
            // serves popular FAQs until a real history source is wired in.
            let history = Arc::new(InMemoryHistory::default());
            run_http(history, &bind).await
        }
        Command::Ask { question } => {
            let resp = ask(&question);
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Command::Search { query, limit } => {
            let results = search(&query, limit);
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
        Command::Rewrite { question, answer } => {
            let rewritten = rewrite_answer(&answer, &question);
            let resp = RewriteResponse {
                original: answer,
                rewritten,
                question,
            };
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Command::Stdio => run_stdio().await,
    }
}
