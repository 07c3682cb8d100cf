//! Static server for the built web panel.
//!
//! Everything lives under one mount path. Unknown files fall back to
//! `index.html` so client-side routes survive a reload.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::error::Result;

pub const INDEX: &str = "index.html";

#[derive(Debug, Clone)]
pub struct SpaConfig {
    /// Build output directory.
    pub dist: PathBuf,
    /// Mount path, e.g. `/hospitality`.
    pub base: String,
}

/// Maps a request path to a file under `dist`.
///
/// Returns `None` for paths outside `base` or paths that try to climb out of
/// `dist`.
pub fn resolve_path(base: &str, dist: &Path, request_path: &str) -> Option<PathBuf> {
    let base = base.trim_end_matches('/');
    let rest = request_path.strip_prefix(base)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        return None;
    }

    let relative = rest.trim_start_matches('/');
    if relative.is_empty() {
        return Some(dist.join(INDEX));
    }

    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(dist.join(relative))
}

/// MIME type by file extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

async fn spa(State(config): State<Arc<SpaConfig>>, uri: Uri) -> Response {
    let Some(candidate) = resolve_path(&config.base, &config.dist, uri.path()) else {
        debug!(path = uri.path(), "outside mount path");
        return not_found();
    };

    // Empty files fall back too.
    let path = match tokio::fs::metadata(&candidate).await {
        Ok(meta) if meta.is_file() && meta.len() > 0 => candidate,
        _ => config.dist.join(INDEX),
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(_) => not_found(),
    }
}

pub fn router(config: SpaConfig) -> Router {
    Router::new().fallback(spa).with_state(Arc::new(config))
}

/// Serves until Ctrl-C.
pub async fn serve(config: SpaConfig, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, base = %config.base, dist = %config.dist.display(), "hospitality panel listening");
    axum::serve(listener, router(config))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
