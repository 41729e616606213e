use crate::common::{self, mock_cookie_crumb};
use dorfyn::{ErrorKind, QueryParams};
use httpmock::Method::GET;
use serde::Deserialize;

#[derive(Deserialize)]
struct Ping {
    ok: bool,
}

#[tokio::test]
async fn call_attaches_crumb_cookie_and_browser_headers() {
    let server = common::setup_server();
    let _auth = mock_cookie_crumb(&server);
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/ping")
            .query_param("region", "US")
            .query_param("crumb", "crumb-value")
            .header("cookie", "A1=B")
            .header("origin", "https://finance.yahoo.com")
            .header("user-agent", "dorfyn-test");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ok":true}"#);
    });

    let client = common::builder_for(&server)
        .user_agent("dorfyn-test")
        .build()
        .unwrap();
    let mut params = QueryParams::new();
    params.insert("region".into(), "US".into());

    let ping: Ping = client.call("/v1/finance/ping", params).await.unwrap();
    api.assert();
    assert!(ping.ok);
}

#[tokio::test]
async fn relative_path_is_rejected_before_any_request() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = mock_cookie_crumb(&server);
    let client = common::client_for(&server);

    for path in ["v1/ping", ".evil.example/steal"] {
        let err = client
            .call::<Ping>(path, QueryParams::new())
            .await
            .err()
            .expect("relative path must fail");
        assert_eq!(err.kind(), ErrorKind::Argument, "path {path:?}");
    }

    assert_eq!(cookie_mock.calls(), 0);
    assert_eq!(crumb_mock.calls(), 0);
    assert!(client.session().await.is_none());
}
