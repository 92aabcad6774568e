// TrendDigest terminal front-end.
// Owns input collection and rendering; all intelligence is generated
// locally by the hub.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trenddigest_core::error::AppError;
use trenddigest_core::hub::IntelligenceHub;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run().await?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let mut hub = IntelligenceHub::new();

    println!("{}\n", hub.greeting());
    println!("Try: 'latest breaking news', 'trending now', 'send digest', 'live feed status'.");
    println!("Type 'context' to dump the session log, 'reset' to clear it, 'quit' to leave.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let query = line.trim();

        match query {
            "" => {}
            "quit" | "exit" => break,
            "reset" => {
                hub.reset();
                println!("Session context cleared.\n");
            }
            "context" => {
                let log = serde_json::to_string_pretty(hub.assistant().context())?;
                println!("{log}\n");
            }
            _ => {
                let reply = hub.handle(query).await;
                println!("\n{}\n", reply.content);

                if !reply.assistant.suggestions.is_empty() {
                    println!("Suggestions: {}", reply.assistant.suggestions.join(" | "));
                }
                if !reply.assistant.follow_up_questions.is_empty() {
                    println!(
                        "Follow-ups: {}",
                        reply.assistant.follow_up_questions.join(" | ")
                    );
                }
                println!();
            }
        }

        prompt()?;
    }

    info!(
        exchanges = hub.assistant().context().len(),
        "session closed"
    );
    Ok(())
}

fn prompt() -> Result<(), AppError> {
    print!("you> ");
    std::io::stdout().flush()?;
    Ok(())
}
