use serde::Deserialize;
use unifonic::{Request, UnifonicClientBuilder};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Balance {
    balance: String,
    currency_code: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = UnifonicClientBuilder::from_env()?.build()?;
    let balance: Balance = client
        .execute(Request::post("Account/GetBalance")?)
        .await?;
    println!("balance: {} {}", balance.balance, balance.currency_code);

    Ok(())
}
