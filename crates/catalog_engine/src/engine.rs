use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::catalog_debug;

use crate::fetch::{ApiSettings, CatSource, ReqwestCatSource};
use crate::{ApiError, EngineError, EngineEvent, FetchPayload, FetchRequest};

enum EngineCommand {
    Fetch(FetchRequest),
}

/// Runs requests on a background tokio runtime; results come back as `EngineEvent`s.
///
/// Requests run concurrently and complete in whatever order the network allows.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &ApiSettings) -> Result<Self, EngineError> {
        let source = ReqwestCatSource::new(settings)?;
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn CatSource>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, request: FetchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn CatSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch(request) => {
            catalog_debug!("Executing {:?}", request);
            let result = execute(source, &request).await;
            let _ = event_tx.send(EngineEvent::Completed { request, result });
        }
    }
}

async fn execute(source: &dyn CatSource, request: &FetchRequest) -> Result<FetchPayload, ApiError> {
    match request {
        FetchRequest::RandomCats { limit, page } => source
            .random_cats(Some(*limit), Some(*page))
            .await
            .map(FetchPayload::Images),
        FetchRequest::Breeds => source.breeds().await.map(FetchPayload::Breeds),
        FetchRequest::BreedImages { breed_id, limit } => source
            .breed_images(breed_id, Some(*limit))
            .await
            .map(FetchPayload::Images),
        FetchRequest::CatById { id } => source.cat_by_id(id).await.map(FetchPayload::Image),
    }
}
