use crate::common::{
    self, AAPL_BODY, COOKIE_PATH, CRUMB_PATH, QUOTE_PATH, client_for, mock_cookie_crumb,
    mock_quote,
};
use chrono::{Duration, Utc};
use httpmock::Method::GET;

#[tokio::test]
async fn first_call_fetches_cookie_then_crumb_then_data() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = mock_cookie_crumb(&server);
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = client_for(&server);
    assert!(client.session().await.is_none());

    let quotes = dorfyn::quotes(&client, ["AAPL"]).await.unwrap();

    cookie_mock.assert();
    crumb_mock.assert();
    api.assert();
    assert_eq!(quotes.len(), 1);

    let session = client.session().await.expect("session cached");
    assert_eq!(session.cookie_header, "A1=B");
    assert_eq!(session.crumb, "crumb-value");
    assert!(session.expires_at > Utc::now() + Duration::days(365));
}

#[tokio::test]
async fn fresh_session_is_reused_without_refresh() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = mock_cookie_crumb(&server);
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = client_for(&server);
    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();
    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();

    // Clones share the session too.
    let clone = client.clone();
    dorfyn::quotes(&clone, ["AAPL"]).await.unwrap();

    cookie_mock.assert_calls(1);
    crumb_mock.assert_calls(1);
    api.assert_calls(3);
}

#[tokio::test]
async fn excluded_and_session_cookies_are_not_forwarded() {
    let server = common::setup_server();

    let cookie_mock = server.mock(|when, then| {
        when.method(GET).path(COOKIE_PATH);
        then.status(200)
            .header("set-cookie", "AS=v=1&s=abc; Max-Age=3600; Path=/")
            .header("set-cookie", "tmp=gone; Path=/")
            .header("set-cookie", "A1=B; Max-Age=600; Path=/")
            .header("set-cookie", "A3=C; Max-Age=120; Path=/");
    });
    let crumb_mock = server.mock(|when, then| {
        when.method(GET).path(CRUMB_PATH).header("cookie", "A1=B; A3=C");
        then.status(200).body("crumb-value");
    });
    let api = server.mock(|when, then| {
        when.method(GET)
            .path(QUOTE_PATH)
            .query_param("crumb", "crumb-value")
            .header("cookie", "A1=B; A3=C");
        then.status(200)
            .header("content-type", "application/json")
            .body(AAPL_BODY);
    });

    let client = client_for(&server);
    let before = Utc::now();
    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();

    cookie_mock.assert();
    crumb_mock.assert();
    api.assert();

    // Earliest accepted cookie (A3, 120s) bounds the session.
    let session = client.session().await.unwrap();
    assert!(session.expires_at >= before + Duration::seconds(120));
    assert!(session.expires_at <= Utc::now() + Duration::seconds(120));
}

#[tokio::test]
async fn no_usable_cookie_still_gets_a_long_lived_session() {
    let server = common::setup_server();

    let cookie_mock = server.mock(|when, then| {
        when.method(GET).path(COOKIE_PATH);
        then.status(404).header("set-cookie", "tmp=gone; Path=/");
    });
    let crumb_mock = server.mock(|when, then| {
        when.method(GET).path(CRUMB_PATH);
        then.status(200).body("crumb-value");
    });
    let api = server.mock(|when, then| {
        when.method(GET)
            .path(QUOTE_PATH)
            .query_param("crumb", "crumb-value");
        then.status(200)
            .header("content-type", "application/json")
            .body(AAPL_BODY);
    });

    let client = client_for(&server);
    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();

    cookie_mock.assert();
    crumb_mock.assert();
    api.assert();

    let session = client.session().await.unwrap();
    assert!(session.cookie_header.is_empty());
    assert!(session.expires_at > Utc::now() + Duration::days(9 * 365));
}

#[tokio::test]
async fn concurrent_calls_share_a_single_refresh() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = mock_cookie_crumb(&server);
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = client_for(&server);
    let (a, b, c) = tokio::join!(
        dorfyn::quotes(&client, ["AAPL"]),
        dorfyn::quotes(&client, ["AAPL"]),
        dorfyn::quotes(&client, ["AAPL"]),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();

    cookie_mock.assert_calls(1);
    crumb_mock.assert_calls(1);
    api.assert_calls(3);
}

#[tokio::test]
async fn crumb_url_defaults_to_the_api_base() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = mock_cookie_crumb(&server);
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = dorfyn::DorfynClient::builder()
        .api_base(url::Url::parse(&server.base_url()).unwrap())
        .cookie_url(url::Url::parse(&format!("{}{COOKIE_PATH}", server.base_url())).unwrap())
        .build()
        .unwrap();

    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();

    cookie_mock.assert();
    crumb_mock.assert_calls(1);
    api.assert();
}
