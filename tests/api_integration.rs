//! Integration tests for the RedGifs API client and the dispatch flow.
//!
//! These tests run against a mock HTTP server.

use redgifs_downloader::config::ApiConfig;
use redgifs_downloader::{Dispatcher, Error, MediaApi, RedGifsApi};
use serde_json::json;
use tempfile::TempDir;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

/// Helper to create a mock server that hands out a temporary token.
async fn setup_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/auth/temporary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": TOKEN,
            "addr": "127.0.0.1",
            "agent": "test"
        })))
        .mount(&server)
        .await;

    server
}

fn api_for(server: &MockServer) -> RedGifsApi {
    let config = ApiConfig {
        base_url: server.uri(),
        page_size: 2,
        ..ApiConfig::default()
    };
    RedGifsApi::new(&config).expect("client should build")
}

fn gif_json(server: &MockServer, id: &str, file: &str) -> serde_json::Value {
    json!({
        "id": id,
        "createDate": 1657300000,
        "hasAudio": false,
        "width": 640,
        "height": 480,
        "likes": 1,
        "tags": [],
        "published": true,
        "urls": {
            "sd": format!("{}/media/{}-mobile.mp4?expires=1", server.uri(), file),
            "hd": format!("{}/media/{}.mp4?expires=1", server.uri(), file)
        }
    })
}

async fn mount_media(server: &MockServer, file: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/media/{}.mp4", file)))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_then_get_gif() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/gifs/abc"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "gif": gif_json(&server, "abc", "Abc") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_ok!(api.login().await);
    assert!(api.is_logged_in().await);

    let gif = api.get_gif("abc").await.expect("gif should resolve");
    assert_eq!(gif.id, "abc");
    assert_eq!(gif.best_url(), Some(format!("{}/media/Abc.mp4?expires=1", server.uri()).as_str()));
}

#[tokio::test]
async fn test_login_failure_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/auth/temporary"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.login().await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_unknown_gif_is_not_found() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/gifs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NotFound", "message": "gif not found" }
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.login().await.unwrap();
    let err = api.get_gif("missing").await.unwrap_err();
    assert!(matches!(err, Error::AssetNotFound(_)));
}

#[tokio::test]
async fn test_unknown_creator_is_not_found() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/users/ghost/search"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.login().await.unwrap();
    let err = api.search_creator("ghost", 1).await.unwrap_err();
    assert!(matches!(err, Error::CreatorNotFound(_)));
}

#[tokio::test]
async fn test_expired_token_is_authentication_error() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/gifs/abc"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.login().await.unwrap();
    let err = api.get_gif("abc").await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn test_dispatch_single_post_end_to_end() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/gifs/watchfulwaryasp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "gif": gif_json(&server, "watchfulwaryasp", "WatchfulWaryAsp") }),
        ))
        .mount(&server)
        .await;
    mount_media(&server, "WatchfulWaryAsp", b"video bytes").await;

    let dir = TempDir::new().unwrap();
    let api = api_for(&server);
    api.login().await.unwrap();
    let dispatcher = Dispatcher::new(&api, Some(dir.path()), false);

    let report = dispatcher
        .dispatch("https://www.redgifs.com/watch/watchfulwaryasp")
        .await
        .expect("dispatch should succeed");

    assert_eq!(report.succeeded, 1);
    let content = std::fs::read(dir.path().join("WatchfulWaryAsp.mp4")).unwrap();
    assert_eq!(content, b"video bytes");
}

#[tokio::test]
async fn test_dispatch_creator_pages_end_to_end() {
    let server = setup_server().await;

    let pages = [
        (1, vec![("a", "Alpha"), ("b", "Bravo")]),
        (2, vec![("c", "Charlie"), ("d", "Delta")]),
        (3, vec![("e", "Echo")]),
    ];
    for (page, gifs) in &pages {
        let gifs: Vec<_> = gifs
            .iter()
            .map(|(id, file)| gif_json(&server, id, file))
            .collect();
        Mock::given(method("GET"))
            .and(path("/v2/users/maker/search"))
            .and(query_param("page", page.to_string().as_str()))
            .and(query_param("count", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": page,
                "pages": 3,
                "total": 5,
                "gifs": gifs
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    for file in ["Alpha", "Bravo", "Delta", "Echo"] {
        mount_media(&server, file, file.as_bytes()).await;
    }
    Mock::given(method("GET"))
        .and(path("/media/Charlie.mp4"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let api = api_for(&server);
    api.login().await.unwrap();
    let dispatcher = Dispatcher::new(&api, Some(dir.path()), false);

    let report = dispatcher
        .dispatch("https://www.redgifs.com/users/maker")
        .await
        .expect("dispatch should succeed");

    assert_eq!(report.total, 5);
    assert_eq!(report.attempted, 5);
    assert_eq!(report.succeeded, 4);
    assert!(dir.path().join("Echo.mp4").exists());
    assert!(!dir.path().join("Charlie.mp4").exists());
}
