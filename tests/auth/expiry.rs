use crate::common::{
    self, AAPL_BODY, COOKIE_PATH, client_for, mock_cookie_with_max_age, mock_crumb, mock_quote,
};
use dorfyn::ErrorKind;
use httpmock::Method::GET;
use std::time::Duration;

// Cookies live for one second; waiting this long makes the session stale.
const PAST_EXPIRY: Duration = Duration::from_millis(2100);

#[tokio::test]
async fn stale_session_refreshes_exactly_once_before_the_call() {
    let server = common::setup_server();
    let cookie_mock = mock_cookie_with_max_age(&server, 1);
    let crumb_mock = mock_crumb(&server, "crumb-value");
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = client_for(&server);
    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();
    cookie_mock.assert_calls(1);
    crumb_mock.assert_calls(1);

    tokio::time::sleep(PAST_EXPIRY).await;
    assert!(client.session().await.unwrap().is_stale());

    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();
    cookie_mock.assert_calls(2);
    crumb_mock.assert_calls(2);
    api.assert_calls(2);
}

#[tokio::test]
async fn failed_cookie_refresh_keeps_previous_credential() {
    let server = common::setup_server();
    let mut cookie_mock = mock_cookie_with_max_age(&server, 1);
    let crumb_mock = mock_crumb(&server, "crumb-value");
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = common::builder_for(&server)
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();
    let before = client.session().await.unwrap();

    tokio::time::sleep(PAST_EXPIRY).await;

    // The login host now hangs past the client timeout.
    cookie_mock.delete();
    let slow_cookie = server.mock(|when, then| {
        when.method(GET).path(COOKIE_PATH);
        then.status(200)
            .header("set-cookie", "A1=NEW; Max-Age=3600; Path=/")
            .delay(Duration::from_secs(2));
    });

    let err = dorfyn::quotes(&client, ["AAPL"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);

    slow_cookie.assert();
    crumb_mock.assert_calls(1);
    api.assert_calls(1);
    assert_eq!(client.session().await.unwrap(), before);
}

#[tokio::test]
async fn failed_crumb_refresh_keeps_previous_credential() {
    let server = common::setup_server();
    let cookie_mock = mock_cookie_with_max_age(&server, 1);
    let mut crumb_mock = mock_crumb(&server, "crumb-value");
    let api = mock_quote(&server, "AAPL", AAPL_BODY);

    let client = client_for(&server);
    dorfyn::quotes(&client, ["AAPL"]).await.unwrap();
    let before = client.session().await.unwrap();

    tokio::time::sleep(PAST_EXPIRY).await;

    crumb_mock.delete();
    let broken_crumb = server.mock(|when, then| {
        when.method(GET).path(common::CRUMB_PATH);
        then.status(500).body("boom");
    });

    let err = dorfyn::quotes(&client, ["AAPL"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.status(), Some(500));

    cookie_mock.assert_calls(2);
    broken_crumb.assert();
    api.assert_calls(1);

    let after = client.session().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(after.crumb, "crumb-value");
}
