//! Example: Compose a signed URL for the manual signing page.
//!
//! Nothing is sent to Fadada; the URL is printed for a browser to open.
//!
//! Run with: cargo run --example sign_url

use std::time::{SystemTime, UNIX_EPOCH};

use fadada_api_client::rest::{FadadaClient, SignUrlRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    let client = FadadaClient::from_env()?;

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
    let request = SignUrlRequest::new(
        format!("tc-{nanos}"),
        "C100002",
        "59669721A0BC651ADF68CE491014345F",
        "Hello world.pdf",
        "https://example.com/signed",
    );

    println!("{}", client.generate_sign_url(&request)?);
    Ok(())
}
