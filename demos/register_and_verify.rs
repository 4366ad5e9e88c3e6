//! Example: Register a customer and request an identity-verification URL.
//!
//! Reads `FADADA_ENDPOINT`, `FADADA_APP_ID` and `FADADA_APP_SECRET`.
//!
//! Run with: cargo run --example register_and_verify -- <open_id> <return_url>

use fadada_api_client::rest::{FadadaClient, PersonVerifyRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let open_id = args.next().unwrap_or_else(|| "105".to_string());
    let return_url = args
        .next()
        .unwrap_or_else(|| "https://example.com/verified".to_string());

    let client = FadadaClient::from_env()?;

    let customer_id = client.account_register(&open_id).await?;
    println!("Customer id: {}", customer_id);

    let request = PersonVerifyRequest::new(&customer_id, &return_url);
    let verify = client.get_person_verify_url(&request).await?;
    println!("Verification URL: {}", verify.url);
    println!("Transaction no: {}", verify.transaction_no);

    Ok(())
}
