use std::time::{SystemTime, UNIX_EPOCH};

use fadada_api_client::rest::{FadadaClient, SignUrlRequest};

fn live_tests_enabled() -> bool {
    std::env::var("FADADA_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_account_register_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = match FadadaClient::from_env() {
        Ok(client) => client,
        Err(_) => return Ok(()),
    };

    let customer_id = client.account_register("105").await?;
    assert!(!customer_id.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_sign_url_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = match FadadaClient::from_env() {
        Ok(client) => client,
        Err(_) => return Ok(()),
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
    let request = SignUrlRequest::new(
        format!("tc-{nanos}"),
        "C100002",
        "59669721A0BC651ADF68CE491014345F",
        "Hello world.pdf",
        "https://example.com/signed",
    );
    let raw_url = client.generate_sign_url(&request)?;
    let url = url::Url::parse(&raw_url)?;
    assert_eq!(url.host_str(), url::Url::parse(client.endpoint())?.host_str());

    Ok(())
}
