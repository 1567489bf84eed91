//! Stdio gateway: read a question per line from stdin, print the answer.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use hustle_faq::ask;

/// Run the stdio loop: read lines, answer, print. Exits on EOF.
pub async fn run_stdio() -> Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = reader.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let resp = ask(line);
        println!("{}", resp.answer);
    }
    Ok(())
}
