use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fadada_api_client::FadadaError;
use fadada_api_client::auth::{FixedTimestamp, StaticCredentials};
use fadada_api_client::rest::{FadadaClient, PersonVerifyRequest, SignUrlRequest, UploadDocRequest};

fn build_client(server: &MockServer) -> FadadaClient {
    let credentials = Arc::new(StaticCredentials::new("000000", "fdd20141119"));
    FadadaClient::builder()
        .endpoint(format!("{}/api", server.uri()))
        .credentials(credentials)
        .timestamp_provider(Arc::new(FixedTimestamp::new("20191012114711")))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_account_register() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": "1",
        "msg": "success",
        "data": "43FA92D8EBD15AE982E97F2384C4F06F"
    });

    Mock::given(method("POST"))
        .and(path("/api/account_register.api"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("open_id=105"))
        .and(body_string_contains("account_type=1"))
        .and(body_string_contains("app_id=000000"))
        .and(body_string_contains("v=2.0"))
        .and(body_string_contains("timestamp=20191012114711"))
        .and(body_string_contains(
            "msg_digest=RUY4NEQxMDcxMjJBRTUxM0JBRUYyM0NGODM3QTIwMjk3RDVCMTlCQw%3D%3D",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let customer_id = client.account_register("105").await.unwrap();

    assert_eq!(customer_id, "43FA92D8EBD15AE982E97F2384C4F06F");
}

#[tokio::test]
async fn test_account_register_rejects_docs_success_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/account_register.api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": "1000" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.account_register("105").await.unwrap_err();

    match err {
        FadadaError::Api(api) => {
            assert_eq!(api.code, "1000");
            assert!(api.body.contains("1000"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_docs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/uploaddocs.api"))
        .and(body_string_contains("contract_id=C100002"))
        .and(body_string_contains("doc_title=hello+world"))
        .and(body_string_contains("doc_type=.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "code": "1000", "msg": "上传成功" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = UploadDocRequest::new(
        "C100002",
        "hello world",
        "https://cdn.example.com/files/disclosure.pdf",
        ".pdf",
    );

    client.upload_docs(&request).await.unwrap();
}

#[tokio::test]
async fn test_upload_docs_rejects_account_success_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/uploaddocs.api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "code": "1", "data": "X" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = UploadDocRequest::new("C100002", "t", "https://cdn.example.com/x.pdf", ".pdf");
    let err = client.upload_docs(&request).await.unwrap_err();

    assert!(matches!(err, FadadaError::Api(ref api) if api.code == "1"));
}

#[tokio::test]
async fn test_get_person_verify_url() {
    let server = MockServer::start().await;
    let verify_url = "https://verify.example.com/person?token=abc";
    let response = serde_json::json!({
        "code": "1",
        "data": {
            "transactionNo": "ab4feb43763e4a31bb5378d33b199f05",
            "url": STANDARD.encode(verify_url)
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/get_person_verify_url.api"))
        .and(body_string_contains("customer_id=43FA92D8EBD15AE982E97F2384C4F06F"))
        .and(body_string_contains("verified_way=0"))
        .and(body_string_contains("page_modify=1"))
        .and(body_string_contains(
            "notify_url=https%3A%2F%2Fexample.com%2Fback",
        ))
        .and(body_string_contains(
            "return_url=https%3A%2F%2Fexample.com%2Fback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request =
        PersonVerifyRequest::new("43FA92D8EBD15AE982E97F2384C4F06F", "https://example.com/back");
    let verify = client.get_person_verify_url(&request).await.unwrap();

    assert_eq!(verify.url, verify_url);
    assert_eq!(verify.transaction_no, "ab4feb43763e4a31bb5378d33b199f05");
}

#[tokio::test]
async fn test_get_person_verify_url_bad_base64() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": "1",
        "data": { "transactionNo": "ab4f", "url": "%%% not base64 %%%" }
    });

    Mock::given(method("POST"))
        .and(path("/api/get_person_verify_url.api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PersonVerifyRequest::new("43FA", "https://example.com/back");
    let err = client.get_person_verify_url(&request).await.unwrap_err();

    assert!(matches!(err, FadadaError::Decode { .. }));
}

#[tokio::test]
async fn test_find_person_cert_info() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": "1",
        "data": { "person": { "personName": "李华", "status": "2" } }
    });

    Mock::given(method("POST"))
        .and(path("/api/find_personCertInfo.api"))
        .and(body_string_contains("verified_serialno=ab4f"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let data = client.find_person_cert_info("ab4f").await.unwrap();

    assert_eq!(data["person"]["status"], "2");
}

#[tokio::test]
async fn test_apply_cert() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/apply_cert.api"))
        .and(body_string_contains("customer_id=43FA"))
        .and(body_string_contains("verified_serialno=a747"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "1",
            "msg": "success",
            "data": "cert issued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.apply_cert("43FA", "a747").await.unwrap();
}

#[tokio::test]
async fn test_apply_cert_business_failure_embeds_body() {
    let server = MockServer::start().await;
    let body = r#"{"code":"2002","msg":"msg_digest error"}"#;

    Mock::given(method("POST"))
        .and(path("/api/apply_cert.api"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.apply_cert("43FA", "a747").await.unwrap_err();

    assert_eq!(err.to_string(), format!("Response not success: {body}"));
}

#[tokio::test]
async fn test_http_status_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/apply_cert.api"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.apply_cert("43FA", "a747").await.unwrap_err();

    match err {
        FadadaError::Transport { url, status } => {
            assert_eq!(status, 502);
            assert_eq!(url, format!("{}/api/apply_cert.api", server.uri()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/account_register.api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.account_register("105").await.unwrap_err();

    assert!(matches!(err, FadadaError::InvalidResponse(ref msg) if msg.contains("maintenance")));
}

#[tokio::test]
async fn test_generate_sign_url_round_trip() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let request = SignUrlRequest::new(
        "tc-1602470831000000000",
        "C100002",
        "59669721A0BC651ADF68CE491014345F",
        "Hello world.pdf",
        "https://mp.example.com/foo/bar?x=1&y=2",
    );
    let raw_url = client.generate_sign_url(&request).unwrap();

    let url = url::Url::parse(&raw_url).unwrap();
    assert_eq!(url.path(), "/api/extsign.api");
    let query: std::collections::HashMap<String, String> =
        url.query_pairs().into_owned().collect();
    assert_eq!(query["transaction_id"], "tc-1602470831000000000");
    assert_eq!(query["contract_id"], "C100002");
    assert_eq!(query["customer_id"], "59669721A0BC651ADF68CE491014345F");
    assert_eq!(query["doc_title"], "Hello world.pdf");
    assert_eq!(query["return_url"], "https://mp.example.com/foo/bar?x=1&y=2");
    assert_eq!(query["read_time"], "10");
    assert_eq!(query["open_environment"], "1");
    assert_eq!(query["app_id"], "000000");
    assert_eq!(query["v"], "2.0");
    assert!(query.contains_key("msg_digest"));

    // Composing the URL never calls the provider.
    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}
