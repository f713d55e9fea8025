use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use roster_logging::{roster_debug, roster_error};

use crate::source::{CollectionSource, ReqwestSource, SourceSettings};
use crate::{EngineEvent, OwnerId, RequestSeq};

enum EngineCommand {
    FetchAll {
        request: RequestSeq,
    },
    FetchMemberships {
        request: RequestSeq,
        owner_id: OwnerId,
    },
}

/// Runs fetches on a background tokio runtime and reports results as events.
///
/// Commands are executed concurrently; events arrive in completion order,
/// each tagged with the request sequence it answers.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SourceSettings) -> Self {
        Self::with_source(Arc::new(ReqwestSource::new(settings)))
    }

    pub fn with_source(source: Arc<dyn CollectionSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    roster_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            roster_debug!("Engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_all(&self, request: RequestSeq) {
        let _ = self.cmd_tx.send(EngineCommand::FetchAll { request });
    }

    pub fn fetch_memberships(&self, request: RequestSeq, owner_id: OwnerId) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchMemberships { request, owner_id });
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn CollectionSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchAll { request } => EngineEvent::ItemsFetched {
            request,
            result: source.fetch_all().await,
        },
        EngineCommand::FetchMemberships { request, owner_id } => {
            EngineEvent::MembershipsFetched {
                request,
                owner_id,
                result: source.fetch_memberships(owner_id).await,
            }
        }
    };
    let _ = event_tx.send(event);
}
