mod common;

use axum::{routing::get, Router};
use axum_test::TestServer;
use snipbin::api::handlers::redirect_handler;

fn test_server(state: snipbin::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/{slug}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_url_link() {
    let (state, _rx, store) = common::create_test_state();
    common::create_test_link(&store, "gh", "https://github.com", false).await;
    let server = test_server(state);

    let response = server.get("/gh").await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://github.com"
    );
}

#[tokio::test]
async fn test_redirect_sends_click_event() {
    let (state, mut rx, store) = common::create_test_state();
    let link = common::create_test_link(&store, "gh", "https://github.com", false).await;
    let server = test_server(state);

    server.get("/gh").await.assert_status(axum::http::StatusCode::FOUND);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.link_id, link.id);
}

#[tokio::test]
async fn test_text_link_renders_page() {
    let (state, _rx, store) = common::create_test_state();
    common::create_test_link(&store, "notes", "plain meeting notes", true).await;
    let server = test_server(state);

    let response = server.get("/notes").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("plain meeting notes"));
    assert!(body.contains("<pre>"));
}

#[tokio::test]
async fn test_text_link_escapes_html() {
    let (state, _rx, store) = common::create_test_state();
    common::create_test_link(&store, "xss", "<script>alert(1)</script>", true).await;
    let server = test_server(state);

    let response = server.get("/xss").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_structured_text_renders_formatting() {
    let (state, _rx, store) = common::create_test_state();
    common::create_test_link(&store, "doc", "# Title\n\nsome **bold** text", true).await;
    let server = test_server(state);

    let response = server.get("/doc").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<h1>Title</h1>"));
    assert!(body.contains("<strong>bold</strong>"));
}

#[tokio::test]
async fn test_preview_truncates_and_counts_click() {
    let (state, mut rx, store) = common::create_test_state();
    let long_text = "word ".repeat(100);
    let link = common::create_test_link(&store, "long", &long_text, true).await;
    let server = test_server(state);

    let response = server.get("/long").add_query_param("preview", "1").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Preview"));
    assert!(!body.contains(&long_text));

    // Preview does not bypass click counting.
    let event = rx.try_recv().unwrap();
    assert_eq!(event.link_id, link.id);
}

#[tokio::test]
async fn test_preview_ignored_for_url_links() {
    let (state, _rx, store) = common::create_test_state();
    common::create_test_link(&store, "gh", "https://github.com", false).await;
    let server = test_server(state);

    let response = server.get("/gh").add_query_param("preview", "1").await;

    response.assert_status(axum::http::StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_survives_full_click_queue() {
    let (state, mut rx, store) = common::create_test_state();
    common::create_test_link(&store, "gh", "https://github.com", false).await;

    // Fill the queue so the handler's send hits the Full path.
    while state
        .click_tx
        .try_send(snipbin::domain::click_event::ClickEvent::new(1))
        .is_ok()
    {}

    let server = test_server(state);

    server.get("/gh").await.assert_status(axum::http::StatusCode::FOUND);

    // The dropped event never lands behind the pre-fill.
    let mut drained = 0;
    while rx.try_recv().is_ok() {
        drained += 1;
    }
    assert_eq!(drained, 100);
}

#[tokio::test]
async fn test_redirect_survives_closed_click_channel() {
    let (state, rx, store) = common::create_test_state();
    common::create_test_link(&store, "gh", "https://github.com", false).await;
    drop(rx);
    let server = test_server(state);

    server.get("/gh").await.assert_status(axum::http::StatusCode::FOUND);
}

#[tokio::test]
async fn test_unknown_slug_returns_404() {
    let (state, _rx, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_repeat_lookup_served_from_cache() {
    let (state, _rx, store) = common::create_test_state();
    let link = common::create_test_link(&store, "gh", "https://github.com", false).await;
    let server = test_server(state);

    server.get("/gh").await.assert_status(axum::http::StatusCode::FOUND);

    // Remove the row underneath; the cached snapshot still serves.
    use snipbin::domain::repositories::LinkStore;
    store.delete_by_id(link.id).await.unwrap();

    server.get("/gh").await.assert_status(axum::http::StatusCode::FOUND);
}
