use crate::error::{EngineError, Result};
use crate::messages::{EngineRequest, EngineResponse};
use shoresh_graph::{compute_graph, compute_highlights};
use shoresh_meaning::GradeSource;
use shoresh_protocol::{
    GraphNode, GraphResult, NodeColorAssignment, PipelineConfig, Root, RootCatalogue,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Debounce windows for the two request streams.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub graph_debounce: Duration,
    pub highlight_debounce: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            graph_debounce: Duration::from_millis(100),
            highlight_debounce: Duration::from_millis(300),
        }
    }
}

enum Command {
    Request {
        request: EngineRequest,
        reply: oneshot::Sender<EngineResponse>,
    },
    Shutdown,
}

/// The worker side: owns an immutable snapshot of the catalogue and grade
/// source and computes every request against it. No shared mutable state —
/// replaying a request with the same computation id is safe.
pub struct GraphEngine {
    catalogue: Arc<RootCatalogue>,
    grades: Arc<dyn GradeSource>,
}

impl GraphEngine {
    /// Start the worker task and hand back the caller-side handle.
    pub fn spawn(
        catalogue: Arc<RootCatalogue>,
        grades: Arc<dyn GradeSource>,
        config: EngineConfig,
    ) -> EngineHandle {
        let (command_tx, command_rx) = mpsc::channel(32);
        let engine = Self { catalogue, grades };
        tokio::spawn(engine.run(command_rx));

        EngineHandle {
            command_tx,
            config,
            graph_seq: Arc::new(AtomicU64::new(0)),
            highlight_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    async fn run(self, mut command_rx: mpsc::Receiver<Command>) {
        while let Some(command) = command_rx.recv().await {
            match command {
                Command::Request { request, reply } => {
                    let response = self.handle(request);
                    // The caller may already have moved on; a dropped
                    // receiver is not an error.
                    let _ = reply.send(response);
                }
                Command::Shutdown => break,
            }
        }
        log::debug!("graph engine worker stopped");
    }

    fn handle(&self, request: EngineRequest) -> EngineResponse {
        match request {
            EngineRequest::Graph {
                computation_id,
                seeds,
                config,
            } => EngineResponse::Graph {
                computation_id,
                result: compute_graph(seeds, &self.catalogue, &config, self.grades.as_ref()),
            },
            EngineRequest::Highlight {
                computation_id,
                nodes,
                query,
            } => EngineResponse::Highlight {
                computation_id,
                colors: compute_highlights(&nodes, &self.catalogue, &query),
            },
        }
    }
}

/// Caller-side handle: debounced submission with per-stream monotonic
/// computation ids.
///
/// `Ok(None)` means the request was superseded by a newer one on the same
/// stream — either coalesced away inside the debounce window or answered
/// after a newer request had already been issued (stale-result rejection).
/// The computation itself is never cancelled mid-flight; only its result is
/// ignored.
#[derive(Clone)]
pub struct EngineHandle {
    command_tx: mpsc::Sender<Command>,
    config: EngineConfig,
    graph_seq: Arc<AtomicU64>,
    highlight_seq: Arc<AtomicU64>,
}

impl EngineHandle {
    pub async fn compute_graph(
        &self,
        seeds: Vec<Root>,
        config: PipelineConfig,
    ) -> Result<Option<GraphResult>> {
        let computation_id = self.graph_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.config.graph_debounce).await;
        if self.graph_seq.load(Ordering::SeqCst) != computation_id {
            log::debug!("graph request {computation_id} coalesced away");
            return Ok(None);
        }

        let request = EngineRequest::Graph {
            computation_id,
            seeds,
            config,
        };
        match self.send(request).await? {
            EngineResponse::Graph {
                computation_id: answered,
                result,
            } if answered == self.graph_seq.load(Ordering::SeqCst) => Ok(Some(result)),
            EngineResponse::Graph {
                computation_id: answered,
                ..
            } => {
                log::debug!("discarding stale graph result {answered}");
                Ok(None)
            }
            EngineResponse::Highlight { .. } => {
                // The worker answers on a per-request channel, so a crossed
                // stream would be a plumbing bug.
                unreachable!("highlight response on the graph stream")
            }
        }
    }

    pub async fn compute_highlights(
        &self,
        nodes: Vec<GraphNode>,
        query: String,
    ) -> Result<Option<Vec<NodeColorAssignment>>> {
        let computation_id = self.highlight_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.config.highlight_debounce).await;
        if self.highlight_seq.load(Ordering::SeqCst) != computation_id {
            log::debug!("highlight request {computation_id} coalesced away");
            return Ok(None);
        }

        let request = EngineRequest::Highlight {
            computation_id,
            nodes,
            query,
        };
        match self.send(request).await? {
            EngineResponse::Highlight {
                computation_id: answered,
                colors,
            } if answered == self.highlight_seq.load(Ordering::SeqCst) => Ok(Some(colors)),
            EngineResponse::Highlight {
                computation_id: answered,
                ..
            } => {
                log::debug!("discarding stale highlight result {answered}");
                Ok(None)
            }
            EngineResponse::Graph { .. } => {
                unreachable!("graph response on the highlight stream")
            }
        }
    }

    /// Stop the worker. Requests already queued behind the shutdown are
    /// answered with `WorkerGone`.
    pub async fn shutdown(&self) {
        let _ = self.command_tx.send(Command::Shutdown).await;
    }

    async fn send(&self, request: EngineRequest) -> Result<EngineResponse> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Request {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| EngineError::WorkerGone)?;
        reply_rx.await.map_err(|_| EngineError::WorkerGone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoresh_meaning::SparseGradeTable;

    fn handle() -> EngineHandle {
        let catalogue = Arc::new(RootCatalogue::new(vec![Root::new(
            1,
            ['ל', 'מ', 'ד'],
            "learn",
        )]));
        // Zero debounce: a request dispatches on its first poll, which lets
        // the test land a newer computation id between dispatch and reply.
        let config = EngineConfig {
            graph_debounce: Duration::ZERO,
            highlight_debounce: Duration::ZERO,
        };
        GraphEngine::spawn(catalogue, Arc::new(SparseGradeTable::new()), config)
    }

    #[tokio::test(start_paused = true)]
    async fn graph_reply_overtaken_by_a_newer_request_is_discarded() {
        let handle = handle();
        let seeds = vec![Root::new(1, ['ל', 'מ', 'ד'], "learn")];

        let inflight = tokio::spawn({
            let handle = handle.clone();
            async move { handle.compute_graph(seeds, PipelineConfig::default()).await }
        });
        // Let the request clear its debounce check and reach the worker.
        tokio::task::yield_now().await;
        // A newer request claims the stream while the reply is in flight.
        handle.graph_seq.fetch_add(1, Ordering::SeqCst);

        let outcome = inflight.await.unwrap().unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn highlight_reply_overtaken_by_a_newer_request_is_discarded() {
        let handle = handle();

        let inflight = tokio::spawn({
            let handle = handle.clone();
            async move {
                handle
                    .compute_highlights(Vec::new(), "learn".to_string())
                    .await
            }
        });
        tokio::task::yield_now().await;
        handle.highlight_seq.fetch_add(1, Ordering::SeqCst);

        let outcome = inflight.await.unwrap().unwrap();
        assert!(outcome.is_none());
    }
}
