//! Static SPA server over a real socket.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use hospitality_panel::serve::{router, SpaConfig};
use reqwest::StatusCode;
use tokio::net::TcpListener;

fn write(dist: &Path, rel: &str, body: &str) {
    let path = dist.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

async fn start(dist: &Path) -> String {
    let app = router(SpaConfig {
        dist: dist.to_path_buf(),
        base: "/hospitality".into(),
    });
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get(url: String) -> (StatusCode, Option<String>, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (status, content_type, response.text().await.unwrap())
}

fn dist() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", "<html>panel</html>");
    write(dir.path(), "assets/app.js", "console.log(1)");
    write(dir.path(), "empty.txt", "");
    dir
}

#[tokio::test]
async fn serves_assets_under_base() {
    let dir = dist();
    let base = start(dir.path()).await;

    let (status, content_type, body) = get(format!("{base}/hospitality/assets/app.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/javascript; charset=utf-8"));
    assert_eq!(body, "console.log(1)");

    let (status, _, body) = get(format!("{base}/hospitality/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>panel</html>");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dir = dist();
    let base = start(dir.path()).await;

    for path in ["/hospitality/registrants", "/hospitality/hostels/h1/edit", "/hospitality/empty.txt"] {
        let (status, content_type, body) = get(format!("{base}{path}")).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"), "{path}");
        assert_eq!(body, "<html>panel</html>", "{path}");
    }
}

#[tokio::test]
async fn outside_base_is_not_found() {
    let dir = dist();
    let base = start(dir.path()).await;

    for path in ["/", "/index.html", "/hospitalityx/index.html"] {
        let (status, _, _) = get(format!("{base}{path}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn missing_index_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let base = start(dir.path()).await;

    let (status, _, _) = get(format!("{base}/hospitality/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
