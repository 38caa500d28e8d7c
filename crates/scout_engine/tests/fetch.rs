use std::time::Duration;

use scout_engine::{DirectFetcher, FailureKind, FetchSettings, PageFetcher};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_decoded_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .and(header_exists("User-Agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html>статьи</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = DirectFetcher::new(FetchSettings::default()).expect("client");
    let url = format!("{}/listing", server.uri());

    let markup = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(markup, "<html>статьи</html>");
}

#[tokio::test]
async fn fetcher_decodes_legacy_charset_from_header() {
    let server = MockServer::start().await;
    // "дизайн" in windows-1251
    let body: &[u8] = b"<p>\xe4\xe8\xe7\xe0\xe9\xed</p>";
    Mock::given(method("GET"))
        .and(path("/legacy"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=windows-1251"),
        )
        .mount(&server)
        .await;

    let fetcher = DirectFetcher::new(FetchSettings::default()).expect("client");
    let url = format!("{}/legacy", server.uri());

    let markup = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(markup, "<p>дизайн</p>");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = DirectFetcher::new(FetchSettings::default()).expect("client");
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = DirectFetcher::new(settings).expect("client");
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_malformed_url() {
    let fetcher = DirectFetcher::new(FetchSettings::default()).expect("client");
    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
