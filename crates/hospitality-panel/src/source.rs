//! Seams between screens and the outside world.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use hospitality_seeker::{Record, ViewCoordinator};
use tracing::{debug, warn};

use crate::error::{PanelError, Result};
use crate::models::User;

/// Supplies the full collection for one screen.
///
/// Each call returns a complete snapshot; there is no incremental update.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<R>>;
}

/// Answers "who is logged in?".
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<User>>;
}

/// Fetches a fresh snapshot into `view`.
///
/// A failed fetch leaves the view in its failed state with the error text and
/// is also returned to the caller.
pub async fn refresh<R, S>(view: &mut ViewCoordinator<R>, source: &S) -> Result<()>
where
    R: Record + Send,
    S: RecordSource<R> + ?Sized,
{
    match source.fetch_records().await {
        Ok(records) => {
            view.replace_records(records);
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "fetch failed");
            view.fail_load(err.to_string());
            Err(err)
        }
    }
}

/// Refreshes `view` every `every` and hands it to `on_frame`, until
/// `shutdown` resolves.
///
/// `shutdown` is polled ahead of each tick and lives for the whole watch, so
/// it still fires when it resolves while a fetch is in flight. An expired
/// session ends the watch; other fetch errors leave the view failed and the
/// watch running.
pub async fn watch<R, S, F, G>(
    view: &mut ViewCoordinator<R>,
    source: &S,
    every: Duration,
    shutdown: F,
    mut on_frame: G,
) -> Result<()>
where
    R: Record + Send,
    S: RecordSource<R> + ?Sized,
    F: Future,
    G: FnMut(&mut ViewCoordinator<R>) -> Result<()>,
{
    let mut ticker = tokio::time::interval(every);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => return Ok(()),
            _ = ticker.tick() => {
                match refresh(&mut *view, source).await {
                    Err(PanelError::Unauthenticated) => return Err(PanelError::Unauthenticated),
                    Err(_) => debug!("keeping watch"),
                    Ok(()) => {}
                }
                on_frame(&mut *view)?;
            }
        }
    }
}

/// In-memory source, for tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        StaticSource { records }
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> RecordSource<R> for StaticSource<R> {
    async fn fetch_records(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }
}

/// Session provider with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(pub Option<User>);

#[async_trait]
impl SessionProvider for StaticSession {
    async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.0.clone())
    }
}
