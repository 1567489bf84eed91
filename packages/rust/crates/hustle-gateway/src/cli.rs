use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hustle-gateway")]
#[command(about = "HustleKE FAQ intelligence: HTTP gateway, one-shot queries, or stdio loop.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run HTTP server with the FAQ routes. Default bind: 0.0.0.0:8080
    Serve {
        /// Listen address (e.g. 0.0.0.0:8080)
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Answer one question and print the full response as JSON.
    Ask {
        /// The question to answer
        question: String,
    },
    /// Rank knowledge-base entries for a query and print them as JSON.
    Search {
        /// Free-text query
        query: String,

        /// Result cap (default: 5)
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Rewrite a human-written answer for its question.
    Rewrite {
        /// The question the answer belongs to
        #[arg(long)]
        question: String,

        /// The answer text to substitute or clean
        #[arg(long)]
        answer: String,
    },
    /// Read questions from stdin line by line, print answers. Exit on EOF.
    Stdio,
}
