use std::io;

use serde::Deserialize;
use unifonic::{Request, UnifonicClientBuilder};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SentMessage {
    message_id: Option<u64>,
    status: Option<String>,
    cost: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let recipient = std::env::var("UNIFONIC_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNIFONIC_RECIPIENT environment variable is required",
        )
    })?;
    let body = std::env::var("UNIFONIC_BODY")
        .unwrap_or_else(|_| "Hello from the unifonic demo.".to_owned());

    let client = UnifonicClientBuilder::from_env()?.build()?;
    let request = Request::post("Messages/Send")?
        .param("Recipient", recipient)
        .param("Body", body);
    let sent: SentMessage = client.execute(request).await?;
    println!(
        "message_id: {:?}, status: {:?}, cost: {:?}",
        sent.message_id, sent.status, sent.cost
    );

    Ok(())
}
