//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! crawl cycle end-to-end over real HTTP.

use linkrot::config::{Config, ErrorPolicy};
use linkrot::crawler::{crawl, Coordinator};
use linkrot::state::NotFoundRecord;
use linkrot::CrawlError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration starting at `start_url` with no delay
fn create_test_config(start_url: &str, policy: ErrorPolicy) -> Config {
    let mut config = Config::default();
    config.crawler.start_url = Some(start_url.to_string());
    config.crawler.delay_ms = 0;
    config.crawler.timeout_secs = 5;
    config.crawler.on_error = policy;
    config
}

async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_reports_not_found() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let port = url::Url::parse(&base_url)
        .expect("Failed to parse base URL")
        .port()
        .expect("Mock server URL has no port");

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="/page1">Page 1</a>
            <a href="page2">Page 2</a>
            <a href="{}/page3">Page 3</a>
            <a href="mailto:webmaster@example.com">Mail</a>
            <a href="http://localhost:{}/external">Other host</a>
            </body></html>"#,
            base_url, port
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/page1",
        r#"<html><body><a href="/missing">Missing</a><a href="/">Home</a></body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/page2",
        r#"<html><body><a href="./page1">Page 1 again</a></body></html>"#.to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/page3",
        r#"<html><body><a href="mailto:other@example.com">Mail</a></body></html>"#.to_string(),
    )
    .await;

    // Different authority: must never be requested
    Mock::given(method("GET"))
        .and(path("/external"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), ErrorPolicy::Abort);
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(
        report.not_found,
        vec![NotFoundRecord {
            url: format!("{}/missing", base_url),
            from: format!("{}/page1", base_url),
        }]
    );

    // /, /page1, /page2, /page3, /missing
    assert_eq!(report.statistics.pages_requested, 5);
    assert_eq!(
        report.ignored,
        vec![
            format!("host:localhost:{}", port),
            "scheme:mailto".to_string()
        ]
    );

    let received = mock_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    let paths: Vec<&str> = received.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/", "/page1", "/page2", "/page3", "/missing"]);
}

#[tokio::test]
async fn test_unexpected_status_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/never">Never reached</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/never"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), ErrorPolicy::Abort);
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let err = coordinator.run().await.expect_err("Crawl should fail");

    match err {
        CrawlError::UnexpectedStatus {
            status,
            url,
            referrer,
        } => {
            assert_eq!(status, 500);
            assert_eq!(url, format!("{}/broken", base_url));
            assert_eq!(referrer, format!("{}/", base_url));
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_skip_policy_records_failures() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="http://">Bad</a><a href="/gone">Gone</a>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), ErrorPolicy::Skip);
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].url, format!("{}/broken", base_url));
    assert_eq!(report.not_found.len(), 1);
    assert_eq!(report.not_found[0].url, format!("{}/gone", base_url));
}

#[tokio::test]
async fn test_transport_error_on_seed_aborts() {
    // Nothing listens on port 1
    let config = create_test_config("http://127.0.0.1:1/", ErrorPolicy::Abort);
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");

    let err = coordinator.run().await.expect_err("Crawl should fail");

    assert!(matches!(err, CrawlError::Transport { .. }));
}

#[tokio::test]
async fn test_missing_start_url_is_config_error() {
    let config = Config::default();

    let result = Coordinator::new(&config);

    assert!(matches!(result, Err(CrawlError::Config(_))));
}

#[tokio::test]
async fn test_crawl_writes_markdown_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/nowhere">Nowhere</a>"#.to_string(),
    )
    .await;

    let report_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let mut config = create_test_config(&format!("{}/", base_url), ErrorPolicy::Abort);
    config.output.report_path = Some(report_file.path().display().to_string());

    let report = crawl(config).await.expect("Crawl failed");
    assert_eq!(report.not_found.len(), 1);

    let markdown = std::fs::read_to_string(report_file.path()).expect("Report not written");
    assert!(markdown.contains(&format!("| {}/nowhere | {}/ |", base_url, base_url)));
}
