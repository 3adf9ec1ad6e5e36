//! Bounded request queue feeding a single dispatcher loop.
//!
//! Callers enqueue a request together with a private reply channel and wait
//! on that channel. The dispatcher takes requests in FIFO order and spawns
//! one executor task per request, so a slow upstream never blocks pickup of
//! the next request. A full queue suspends callers until the dispatcher
//! catches up.

use async_trait::async_trait;
use ferrous_recon_application::ports::{DnsResolver, QueryExecutor};
use ferrous_recon_domain::{Answer, DnsRequest, DomainError, RecordType, ResolverConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

type Reply = oneshot::Sender<Result<Vec<Answer>, DomainError>>;

struct PendingRequest {
    request: DnsRequest,
    reply: Reply,
}

pub struct ResolverService {
    executor: Arc<dyn QueryExecutor>,
    queue_capacity: usize,
    default_server: Arc<str>,
    sender: RwLock<Option<mpsc::Sender<PendingRequest>>>,
    receiver: Mutex<Option<mpsc::Receiver<PendingRequest>>>,
    dispatcher: Mutex<Option<JoinHandle<()>>>,
    running: AtomicBool,
    shutdown: CancellationToken,
}

impl ResolverService {
    /// Creates the queue. Requests may be enqueued right away; they are
    /// picked up once [`start`](Self::start) runs the dispatcher.
    pub fn new(config: &ResolverConfig, executor: Arc<dyn QueryExecutor>) -> Self {
        let queue_capacity = config.queue_capacity.max(1);
        let (sender, receiver) = mpsc::channel(queue_capacity);

        Self {
            executor,
            queue_capacity,
            default_server: Arc::from(config.default_server.as_str()),
            sender: RwLock::new(Some(sender)),
            receiver: Mutex::new(Some(receiver)),
            dispatcher: Mutex::new(None),
            running: AtomicBool::new(false),
            shutdown: CancellationToken::new(),
        }
    }

    /// Fails with `ResolverNotRunning` once the service has been stopped.
    pub async fn start(&self) -> Result<(), DomainError> {
        if self.shutdown.is_cancelled() {
            return Err(DomainError::ResolverNotRunning);
        }

        let receiver = self
            .receiver
            .lock()
            .await
            .take()
            .ok_or(DomainError::ResolverAlreadyStarted)?;

        let executor = Arc::clone(&self.executor);
        let shutdown = self.shutdown.clone();

        let handle = tokio::spawn(Self::run(receiver, executor, shutdown));
        *self.dispatcher.lock().await = Some(handle);
        self.running.store(true, Ordering::Release);

        info!(
            queue_capacity = self.queue_capacity,
            "Resolver dispatcher started"
        );
        Ok(())
    }

    /// Stops accepting requests, dispatches whatever is still queued and
    /// waits for the dispatcher loop to exit.
    pub async fn stop(&self) {
        self.sender.write().await.take();
        self.running.store(false, Ordering::Release);
        self.shutdown.cancel();

        if let Some(handle) = self.dispatcher.lock().await.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Resolver dispatcher ended abnormally");
            }
        } else if let Some(receiver) = self.receiver.lock().await.take() {
            Self::drain(receiver, &self.executor).await;
        }

        info!("Resolver dispatcher stopped");
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Requests waiting in the queue for the dispatcher.
    pub async fn queued_requests(&self) -> usize {
        match self.sender.read().await.as_ref() {
            Some(sender) => self.queue_capacity - sender.capacity(),
            None => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn default_server(&self) -> &str {
        &self.default_server
    }

    async fn run(
        mut receiver: mpsc::Receiver<PendingRequest>,
        executor: Arc<dyn QueryExecutor>,
        shutdown: CancellationToken,
    ) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    debug!("Resolver dispatcher: shutting down");
                    break;
                }
                next = receiver.recv() => match next {
                    Some(pending) => Self::dispatch(&executor, pending),
                    None => break,
                }
            }
        }

        Self::drain(receiver, &executor).await;
    }

    async fn drain(
        mut receiver: mpsc::Receiver<PendingRequest>,
        executor: &Arc<dyn QueryExecutor>,
    ) {
        receiver.close();

        let mut drained = 0usize;
        while let Some(pending) = receiver.recv().await {
            Self::dispatch(executor, pending);
            drained += 1;
        }

        if drained > 0 {
            debug!(drained, "Dispatched requests left in the queue");
        }
    }

    fn dispatch(executor: &Arc<dyn QueryExecutor>, pending: PendingRequest) {
        let executor = Arc::clone(executor);

        tokio::spawn(async move {
            let PendingRequest { request, reply } = pending;
            let outcome = executor.execute(&request).await;

            if let Err(e) = &outcome {
                debug!(
                    name = %request.name,
                    server = %request.server,
                    record_type = %request.record_type,
                    error = %e,
                    transport = e.is_transport_error(),
                    protocol = e.is_protocol_error(),
                    "DNS query failed"
                );
            }

            // The caller may have gone away; nothing left to deliver to.
            let _ = reply.send(outcome);
        });
    }
}

#[async_trait]
impl DnsResolver for ResolverService {
    async fn resolve(
        &self,
        name: &str,
        server: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError> {
        let sender = self
            .sender
            .read()
            .await
            .clone()
            .ok_or(DomainError::ResolverNotRunning)?;

        let (reply, response) = oneshot::channel();
        let pending = PendingRequest {
            request: DnsRequest::new(name, server, record_type),
            reply,
        };

        sender
            .send(pending)
            .await
            .map_err(|_| DomainError::ResolverNotRunning)?;
        drop(sender);

        match response.await {
            Ok(Ok(answers)) if !answers.is_empty() => Ok(answers),
            Ok(Ok(_)) => {
                debug!(name, server, %record_type, "DNS query returned no answers");
                Err(DomainError::QueryUnsuccessful)
            }
            Ok(Err(_)) | Err(_) => Err(DomainError::QueryUnsuccessful),
        }
    }
}
