// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{response::Response, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use streambrowse::engines::http_engine::HttpFetchEngine;
use streambrowse::tasks::scan_task::{DirectoryScanTask, ScanError, ScanMessage};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_directory_server() -> String {
    let app = Router::new().route(
        "/dir/",
        get(|| async {
            Response::builder()
                .header("content-type", "text/html")
                .body(
                    "<html><body>\
                     <a href=\"a\">a</a>\
                     <a href=\"b\">b</a>\
                     <a href=\"c\">c</a>\
                     </body></html>"
                        .to_string(),
                )
                .unwrap()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_scan_directory_end_to_end() {
    let server_url = start_directory_server().await;
    let target = Url::parse(&format!("{}/dir/", server_url)).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let engine = Arc::new(HttpFetchEngine::new());

    DirectoryScanTask::new(target.clone(), engine, tx)
        .submit()
        .await
        .unwrap();

    let ScanMessage::DirectoryContents { outcome, .. } = rx.recv().await.expect("one delivery");
    let listing = outcome.unwrap();

    let urls: Vec<String> = listing.links.iter().map(|l| l.url.to_string()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/dir/a", server_url),
            format!("{}/dir/b", server_url),
            format!("{}/dir/c", server_url),
        ]
    );

    // Exactly one delivery per submission
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_scan_playlist_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stations.pls"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/x-scpls")
                .set_body_string(
                    "[playlist]\n\
                     NumberOfEntries=2\n\
                     File1=http://stream.example.com/one.mp3\n\
                     Title1=Station One\n\
                     File2=http://stream.example.com/two.mp3\n\
                     Title2=Station Two\n",
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let target = Url::parse(&format!("{}/stations.pls", server.uri())).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let engine = Arc::new(HttpFetchEngine::new());

    DirectoryScanTask::new(target, engine, tx).submit().await.unwrap();

    let ScanMessage::DirectoryContents { outcome, .. } = rx.recv().await.unwrap();
    let listing = outcome.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing.links[0].label, "Station One");
    assert_eq!(listing.links[1].label, "Station Two");
}

#[tokio::test]
async fn test_concurrent_scans_deliver_independently() {
    let server_url = start_directory_server().await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let engine = Arc::new(HttpFetchEngine::new());

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let target = Url::parse(&format!("{}/dir/", server_url)).unwrap();
            DirectoryScanTask::new(target, engine.clone(), tx.clone()).submit()
        })
        .collect();
    drop(tx);

    futures::future::join_all(handles).await;

    let mut deliveries = 0;
    while let Some(message) = rx.recv().await {
        let ScanMessage::DirectoryContents { outcome, .. } = message;
        assert_eq!(outcome.unwrap().len(), 3);
        deliveries += 1;
    }
    assert_eq!(deliveries, 3);
}

#[tokio::test]
async fn test_scan_unreachable_host_delivers_failure() {
    // Nothing listens on port 1
    let target = Url::parse("http://127.0.0.1:1/dir/").unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let engine = Arc::new(HttpFetchEngine::new());

    DirectoryScanTask::new(target, engine, tx)
        .with_timeout(Duration::from_secs(2))
        .submit()
        .await
        .unwrap();

    let message = rx.recv().await.expect("failures are delivered too");

    // Legacy consumers still see an empty listing
    assert!(message.links_or_empty().is_empty());

    let ScanMessage::DirectoryContents { outcome, .. } = message;
    assert!(matches!(outcome, Err(ScanError::Fetch(_))));
}
