use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::labels::Labels;
use crate::source::{Board, LoadError, ProgressClient};

/// Messages from UI to loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    Fetch,
}

/// Messages from loader to UI. One per request.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Board),
    Failed(LoadError),
}

impl LoadOutcome {
    pub fn into_result(self) -> Result<Board, LoadError> {
        match self {
            LoadOutcome::Loaded(board) => Ok(board),
            LoadOutcome::Failed(err) => Err(err),
        }
    }
}

/// Run the loader: serve fetch requests one at a time, forward outcomes to the UI.
///
/// Requests are handled sequentially, so two fetches never overlap.
pub async fn run_loader(
    mut rx: mpsc::UnboundedReceiver<LoadRequest>,
    ui_tx: mpsc::UnboundedSender<LoadOutcome>,
    client: ProgressClient,
    labels: &'static Labels,
) {
    let mut fetch_count: u64 = 0;

    info!("Loader started, source: {:?}", client.location());

    while let Some(request) = rx.recv().await {
        match request {
            LoadRequest::Fetch => {
                fetch_count += 1;
                let outcome = match client.load(labels).await {
                    Ok(board) => {
                        info!(
                            "Fetch #{fetch_count} loaded {} projects (updated: {})",
                            board.project_count(),
                            board.updated().unwrap_or("-")
                        );
                        LoadOutcome::Loaded(board)
                    }
                    Err(e) => {
                        warn!("Fetch #{fetch_count} failed: {e}");
                        LoadOutcome::Failed(e)
                    }
                };

                if ui_tx.send(outcome).is_err() {
                    info!("UI channel closed, stopping loader");
                    break;
                }
            }
        }
    }

    info!("Loader shutting down after {fetch_count} fetches");
}
