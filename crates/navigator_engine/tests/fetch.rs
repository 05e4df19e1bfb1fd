use navigator_core::Msg;
use navigator_engine::{
    load_fragment, FailureKind, FetchSettings, Fetcher, FragmentRequest, ReqwestFetcher,
    REQUESTED_WITH,
};
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer, settings: FetchSettings) -> ReqwestFetcher {
    let base = Url::parse(&server.uri()).expect("mock server uri");
    ReqwestFetcher::new(base, settings).expect("client")
}

#[tokio::test]
async fn fetcher_returns_page_fragment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/about/"))
        .and(header(REQUESTED_WITH, "XMLHttpRequest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>about me</p>", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let output = fetcher.fetch("/about/").await.expect("fetch ok");
    assert_eq!(output.body, "<p>about me</p>");
    assert_eq!(output.metadata.path, "/about/");
    assert_eq!(output.metadata.final_url, format!("{}/about/", server.uri()));
    assert_eq!(output.metadata.encoding, "UTF-8");
    assert_eq!(output.metadata.byte_len, 15);
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("text/html"));
}

#[tokio::test]
async fn fetcher_requests_post_path_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/2019/compiler.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<article/>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let output = fetcher
        .fetch("/posts/2019/compiler.html")
        .await
        .expect("fetch ok");
    assert_eq!(output.body, "<article/>");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let err = fetcher.fetch("/missing/").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_accepts_any_successful_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("plain notes", "text/plain"))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let output = fetcher.fetch("/posts/notes.txt").await.expect("fetch ok");
    assert_eq!(output.body, "plain notes");
    assert_eq!(output.metadata.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn fetcher_accepts_large_fragment_by_default() {
    let server = MockServer::start().await;
    let body = "x".repeat(3 * 1024 * 1024);
    Mock::given(method("GET"))
        .and(path("/posts/long/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.clone(), "text/html"))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let output = fetcher.fetch("/posts/long/").await.expect("fetch ok");
    assert_eq!(output.metadata.byte_len, body.len() as u64);
}

#[tokio::test]
async fn fetcher_enforces_configured_size_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: Some(10),
    };
    let fetcher = fetcher_for(&server, settings);

    let err = fetcher.fetch("/large/").await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: 11
        }
    );
}

#[tokio::test]
async fn fetcher_shows_malformed_body_with_replacements() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"<p>caf\xff</p>".to_vec(), "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let output = fetcher.fetch("/broken/").await.expect("fetch ok");
    assert_eq!(output.body, "<p>caf\u{FFFD}</p>");
}

#[tokio::test]
async fn only_unsuccessful_responses_leave_content_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("plain", "text/plain"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());
    let request = |request_id, path: &str| FragmentRequest {
        request_id,
        path: path.to_string(),
    };

    assert_eq!(
        load_fragment(&fetcher, request(1, "/posts/plain")).await,
        Msg::FragmentLoaded {
            request_id: 1,
            body: "plain".to_string(),
        }
    );
    assert!(matches!(
        load_fragment(&fetcher, request(2, "/posts/gone")).await,
        Msg::FragmentFailed { request_id: 2, .. }
    ));
}

#[tokio::test]
async fn fetcher_decodes_declared_charset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cafe/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"caf\xe9".to_vec(), "text/html; charset=ISO-8859-1"),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, FetchSettings::default());

    let output = fetcher.fetch("/cafe/").await.expect("fetch ok");
    assert_eq!(output.body, "café");
    assert_eq!(output.metadata.encoding, "windows-1252");
}

#[test]
fn resolve_joins_site_paths_against_base() {
    let base = Url::parse("https://blog.example/").unwrap();
    let fetcher = ReqwestFetcher::new(base, FetchSettings::default()).unwrap();

    assert_eq!(
        fetcher.resolve("/about/").unwrap().as_str(),
        "https://blog.example/about/"
    );
    assert_eq!(
        fetcher.resolve("/posts/x").unwrap().as_str(),
        "https://blog.example/posts/x"
    );
    assert_eq!(
        fetcher.resolve("").unwrap_err().kind,
        FailureKind::InvalidPath
    );
}
