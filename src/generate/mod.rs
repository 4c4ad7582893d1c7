use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::errors::GenerationError;
use crate::prompt::{self, Template};
use crate::provider::DynProvider;
use crate::wire::{GenerationRequest, ParameterRecord};

/// Cancels one in-flight generation. Clones share the same token.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx: Arc::new(tx) }, CancelToken { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        // send_replace stores the flag even with no receiver left
        self.tx.send_replace(true);
    }
}

impl CancelToken {
    /// Resolves once `cancel` is called; never resolves if every handle is
    /// dropped without cancelling.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// The remote-generation variant: builds the payload and hands it to a
/// provider exactly once.
#[derive(Clone)]
pub struct Generator {
    provider: DynProvider,
    template: &'static Template,
    temperature: f64,
}

impl Generator {
    pub fn new(provider: DynProvider, template: &'static Template, temperature: f64) -> Self {
        Self { provider, template, temperature }
    }

    pub fn request_for(&self, rec: &ParameterRecord) -> GenerationRequest {
        GenerationRequest {
            instruction: prompt::generation_instruction(rec, self.template),
            temperature: self.temperature,
        }
    }

    /// Text comes back exactly as the provider returned it. Every failure
    /// collapses to `GenerationError::Failed`.
    pub async fn generate(
        &self,
        rec: &ParameterRecord,
        mut token: CancelToken,
    ) -> Result<String, GenerationError> {
        let req = self.request_for(rec);
        if let Ok(body) = serde_json::to_string(&req) {
            tracing::trace!(%body, "generation request");
        }

        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(GenerationError::Cancelled),
            res = self.provider.complete(&req) => res,
        };

        match outcome {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                tracing::warn!("generation returned no text");
                Err(GenerationError::Failed)
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "generation failed");
                Err(GenerationError::Failed)
            }
        }
    }

    /// Run `generate` as its own task, inside the caller's current span.
    pub fn spawn(&self, rec: ParameterRecord) -> GenerationTask {
        let (cancel, token) = cancel_pair();
        let this = self.clone();
        let join = tokio::spawn(
            async move { this.generate(&rec, token).await }.instrument(tracing::Span::current()),
        );
        GenerationTask { cancel, join: Some(join), busy: None }
    }
}

/// A spawned generation together with its cancel handle.
///
/// Dropping the task cancels the generation and clears the busy flag it
/// holds, if any.
pub struct GenerationTask {
    cancel: CancelHandle,
    join: Option<JoinHandle<Result<String, GenerationError>>>,
    busy: Option<Arc<AtomicBool>>,
}

impl GenerationTask {
    /// Keep `flag` set for as long as this task is alive.
    pub(crate) fn holding(mut self, flag: Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        self.busy = Some(flag);
        self
    }

    pub fn canceller(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn join(mut self) -> Result<String, GenerationError> {
        let Some(handle) = self.join.take() else {
            return Err(GenerationError::Failed);
        };
        match handle.await {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!(error = %e, "generation task aborted");
                Err(GenerationError::Failed)
            }
        }
    }
}

impl Drop for GenerationTask {
    fn drop(&mut self) {
        if self.join.is_some() {
            tracing::debug!("generation task dropped before settling");
        }
        self.cancel.cancel();
        if let Some(flag) = self.busy.take() {
            flag.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    use crate::provider::Provider;
    use crate::wire::GenerationRequest;

    pub enum Reply {
        Text(&'static str),
        Fail,
        /// Wait until released through `gate`.
        Hold,
    }

    pub struct FakeProvider {
        pub reply: Reply,
        pub calls: AtomicUsize,
        pub seen: Mutex<Vec<GenerationRequest>>,
        pub gate: Notify,
    }

    impl FakeProvider {
        pub fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                gate: Notify::new(),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Provider for FakeProvider {
        async fn complete(&self, req: &GenerationRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(req.clone());
            match self.reply {
                Reply::Text(t) => Ok(t.to_string()),
                Reply::Fail => Err(anyhow!("connection refused")),
                Reply::Hold => {
                    self.gate.notified().await;
                    Ok("late".to_string())
                }
            }
        }
    }
}
