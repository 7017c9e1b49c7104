//! Request pipeline behavior against a mock platform.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use assert2::{check, let_assert};
use bytes::Bytes;
use lockstep::{
    CallOptions, Environment, Error, ErrorPayload, HttpClient, LockstepApi, Method, NO_BODY,
    QueryParams, Request, Response, Result, SDK_VERSION,
};
use serde::Deserialize;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param_is_missing},
};

fn api_for(server: &MockServer) -> LockstepApi {
    let environment: Environment = server.uri().parse().expect("mock server url");
    LockstepApi::builder(environment)
        .api_key("test-key")
        .app_name("lockstep-tests")
        .build()
        .expect("api")
}

#[tokio::test]
async fn success_status_yields_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/abc123"))
        .and(query_param_is_missing("include"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paymentId": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let params = QueryParams::new()
        .path("id", "abc123")
        .query("include", None::<&str>);

    let envelope = api
        .send_request::<Value, _>(Method::Get, "/api/v1/Payments/abc123", NO_BODY, &params)
        .await
        .expect("envelope");

    check!(envelope.is_success());
    check!(envelope.status() == 200);
    check!(envelope.value() == Some(&json!({"paymentId": "abc123"})));
    check!(envelope.error().is_none());

    let requests = server.received_requests().await.expect("recorded requests");
    let_assert!([request] = requests.as_slice());
    check!(request.url.query().is_none());
}

#[tokio::test]
async fn error_status_yields_error_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/abc123"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let params = QueryParams::new()
        .path("id", "abc123")
        .query("include", None::<&str>);

    let envelope = api
        .send_request::<Value, _>(Method::Get, "/api/v1/Payments/abc123", NO_BODY, &params)
        .await
        .expect("an HTTP error status is not a transport failure");

    check!(!envelope.is_success());
    check!(envelope.status() == 404);
    check!(envelope.value().is_none());
    let_assert!(Some(ErrorPayload::Body(body)) = envelope.error());
    check!(body == &json!({"message": "not found"}));
}

#[tokio::test]
async fn server_error_with_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Reports/riskrates"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let envelope = api
        .send_request::<Value, _>(
            Method::Get,
            "/api/v1/Reports/riskrates",
            NO_BODY,
            &QueryParams::new(),
        )
        .await
        .expect("envelope");

    check!(envelope.status() == 503);
    let_assert!(Some(error) = envelope.error());
    check!(error.as_body() == Some(&json!("maintenance")));
    check!(error.message().as_deref() == Some("maintenance"));
}

#[tokio::test]
async fn undecodable_body_becomes_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Contacts/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let envelope = api.contacts().retrieve_contact("c-1", None).await.expect("envelope");

    check!(!envelope.is_success());
    check!(envelope.status() == 200);
    let_assert!(Some(error) = envelope.error());
    let_assert!(Some(failure) = error.as_decode_failure());
    check!(failure.body == "{not json");
    check!(failure.content_type.as_deref() == Some("application/json"));
}

#[tokio::test]
async fn body_not_matching_expected_type_becomes_decode_failure() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Payment {
        #[serde(rename = "paymentAmount")]
        payment_amount: f64,
    }

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/p-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"paymentAmount": "lots"})),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let envelope = api
        .send_request::<Payment, _>(
            Method::Get,
            "/api/v1/Payments/p-1",
            NO_BODY,
            &QueryParams::new(),
        )
        .await
        .expect("envelope");

    check!(!envelope.is_success());
    let_assert!(Some(failure) = envelope.error().and_then(ErrorPayload::as_decode_failure));
    check!(failure.path == "paymentAmount");
}

#[tokio::test]
async fn every_request_carries_identification_and_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/CodeDefinitions/query"))
        .and(header("Api-Key", "test-key"))
        .and(header("Accept", "application/json"))
        .and(header("SdkType", "Rust"))
        .and(header("SdkVersion", SDK_VERSION))
        .and(header("ApplicationName", "lockstep-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let envelope = api
        .code_definitions()
        .query_code_definitions(&lockstep::SearchlightQuery::new())
        .await
        .expect("envelope");

    check!(envelope.is_success());
}

#[tokio::test]
async fn bearer_token_is_sent_as_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Reports/riskrates"))
        .and(header("Authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let environment: Environment = server.uri().parse().expect("mock server url");
    let api = LockstepApi::builder(environment)
        .bearer_token("jwt-token")
        .build()
        .expect("api");

    let envelope = api.reports().risk_rates().await.expect("envelope");
    check!(envelope.is_success());
}

#[tokio::test]
async fn json_body_is_sent_with_content_type() {
    let server = MockServer::start().await;
    let contacts = json!([{"contactName": "Ada Lovelace", "emailAddress": "ada@example.com"}]);

    Mock::given(method("POST"))
        .and(path("/api/v1/Contacts"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&contacts))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"records": [{"contactId": "c-9"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let envelope = api.contacts().create_contacts(&contacts).await.expect("envelope");

    check!(envelope.is_success());
    let contact_id = envelope.value().and_then(|v| v.pointer("/records/0/contactId"));
    check!(contact_id == Some(&json!("c-9")));
}

#[tokio::test]
async fn failed_request_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/Payments/p-1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"title": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let envelope = api.payments().delete_payment("p-1").await.expect("envelope");

    check!(envelope.status() == 500);
    check!(envelope.error().and_then(ErrorPayload::message).as_deref() == Some("boom"));
}

#[tokio::test]
async fn repeated_get_yields_identical_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/InvoiceHistory/inv-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"invoiceId": "inv-1"}])))
        .expect(2)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let first = api
        .invoice_history()
        .retrieve_invoice_history("inv-1")
        .await
        .expect("first");
    let second = api
        .invoice_history()
        .retrieve_invoice_history("inv-1")
        .await
        .expect("second");

    check!(first.value() == second.value());
}

#[tokio::test]
async fn slow_response_raises_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Reports/riskrates"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let environment: Environment = server.uri().parse().expect("mock server url");
    let api = LockstepApi::builder(environment)
        .timeout(Duration::from_millis(100))
        .build()
        .expect("api");

    let err = api.reports().risk_rates().await.expect_err("expected timeout");
    check!(err.is_timeout());
}

#[tokio::test]
async fn per_call_timeout_overrides_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Reports/riskrates"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let options = CallOptions::new().timeout(Duration::from_millis(100));

    let result = api
        .send_request_with::<Value, _>(
            Method::Get,
            "/api/v1/Reports/riskrates",
            NO_BODY,
            &QueryParams::new(),
            &options,
        )
        .await;

    let_assert!(Err(Error::Timeout) = result);
}

#[tokio::test]
async fn refused_connection_raises() {
    let environment: Environment = "http://127.0.0.1:1".parse().expect("url");
    let api = LockstepApi::builder(environment).build().expect("api");

    let result = api.payments().retrieve_payment("abc123", None).await;

    let_assert!(Err(err) = result);
    check!(err.is_connection(), "expected connection error, got: {err}");
}

/// Transport that always fails and counts its calls.
#[derive(Default)]
struct RefusingTransport {
    calls: AtomicUsize,
}

impl HttpClient for RefusingTransport {
    async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::connection("connection refused"))
    }
}

#[tokio::test]
async fn transport_failure_is_raised_not_enveloped() {
    let transport = Arc::new(RefusingTransport::default());
    let api = LockstepApi::builder(Environment::Sandbox)
        .api_key("k")
        .build_with(Arc::clone(&transport))
        .expect("api");

    let result = api.payments().retrieve_payment("abc123", None).await;

    let_assert!(Err(Error::Connection(message)) = result);
    check!(message == "connection refused");
    check!(transport.calls.load(Ordering::SeqCst) == 1);
}

/// Transport that never answers.
struct StalledTransport;

impl HttpClient for StalledTransport {
    async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Response::new(200, std::collections::HashMap::new(), Bytes::new()))
    }
}

#[tokio::test(start_paused = true)]
async fn pipeline_timeout_bounds_any_transport() {
    let api = LockstepApi::builder(Environment::Production)
        .timeout(Duration::from_secs(2))
        .build_with(StalledTransport)
        .expect("api");

    let result = api.reports().risk_rates().await;

    let_assert!(Err(err) = result);
    check!(err.is_timeout());
}

#[tokio::test]
async fn unserializable_body_fails_before_sending() {
    use std::collections::HashMap;

    let transport = Arc::new(RefusingTransport::default());
    let api = LockstepApi::builder(Environment::Sandbox)
        .build_with(Arc::clone(&transport))
        .expect("api");

    // JSON object keys must be strings
    let body: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
    let result = api.contacts().create_contacts(&body).await;

    let_assert!(Err(Error::JsonSerialization(_)) = result);
    check!(transport.calls.load(Ordering::SeqCst) == 0);
}

#[tokio::test]
async fn per_call_header_replaces_default_ignoring_case() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Contacts/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactId": "c-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let environment: Environment = server.uri().parse().expect("mock server url");
    let api = LockstepApi::builder(environment)
        .api_key("default-key")
        .build()
        .expect("api");
    let options = CallOptions::new().header("api-key", "override-key");

    let envelope = api
        .send_request_with::<Value, _>(
            Method::Get,
            "/api/v1/Contacts/c-1",
            NO_BODY,
            &QueryParams::new().path("id", "c-1"),
            &options,
        )
        .await
        .expect("envelope");
    check!(envelope.is_success());

    let requests = server.received_requests().await.expect("recorded requests");
    let_assert!([request] = requests.as_slice());
    let api_keys: Vec<_> = request
        .headers
        .get_all("api-key")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    check!(api_keys == vec!["override-key"]);
}

#[tokio::test]
async fn dot_segment_identifier_is_rejected_before_sending() {
    let transport = Arc::new(RefusingTransport::default());
    let api = LockstepApi::builder(Environment::Sandbox)
        .api_key("k")
        .build_with(Arc::clone(&transport))
        .expect("api");

    let result = api.payments().delete_payment("..").await;
    let_assert!(Err(Error::InvalidRequest(_)) = result);

    let result = api.contacts().retrieve_contact(".", None).await;
    let_assert!(Err(Error::InvalidRequest(_)) = result);

    let result = api.activities().forward_activity("a-1", "").await;
    let_assert!(Err(Error::InvalidRequest(_)) = result);

    check!(transport.calls.load(Ordering::SeqCst) == 0);
}
