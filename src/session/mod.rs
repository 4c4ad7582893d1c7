use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::GenerationError;
use crate::form::{FieldChange, FormState, Readiness, UiSignal};
use crate::generate::{GenerationTask, Generator};
use crate::prompt::{self, Template};

/// One user's form plus the trigger it guards.
///
/// The trigger is accepted only while the form is ready and no generation is
/// pending. Anything else is a silent no-op.
pub struct Session {
    form: FormState,
    readiness: Readiness,
    pending: Arc<AtomicBool>,
    template: &'static Template,
}

impl Session {
    pub fn new(template: &'static Template) -> Self {
        let form = FormState::default();
        let readiness = form.readiness();
        Self { form, readiness, pending: Arc::new(AtomicBool::new(false)), template }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn signal(&self) -> UiSignal {
        let mut signal = self.readiness.signal();
        signal.trigger_enabled &= !self.is_pending();
        signal
    }

    pub fn apply(&mut self, change: FieldChange) -> UiSignal {
        self.form = std::mem::take(&mut self.form).apply(change);
        let next = self.form.readiness();
        if next != self.readiness {
            tracing::debug!(from = ?self.readiness, to = ?next, "readiness changed");
            self.readiness = next;
        }
        self.signal()
    }

    pub fn apply_all<I: IntoIterator<Item = FieldChange>>(&mut self, changes: I) -> UiSignal {
        for change in changes {
            self.apply(change);
        }
        self.signal()
    }

    /// Assemble the prompt from a fresh snapshot.
    pub fn trigger_assemble(&self) -> Option<String> {
        if self.is_pending() {
            tracing::debug!("trigger ignored: generation pending");
            return None;
        }
        let Some(rec) = self.form.capture() else {
            tracing::debug!("trigger ignored: form incomplete");
            return None;
        };
        let span = tracing::info_span!("trigger", id = %Uuid::new_v4(), mode = "assemble");
        let _guard = span.enter();
        let text = prompt::assemble(&rec, self.template);
        tracing::info!(chars = text.chars().count(), "prompt assembled");
        Some(text)
    }

    /// Start a remote generation. The trigger stays disabled for as long as
    /// the returned task lives: until `settle` finishes, or until the task (or
    /// the `settle` future) is dropped, which also cancels it.
    pub fn trigger_generation(&mut self, generator: &Generator) -> Option<GenerationTask> {
        if self.is_pending() {
            tracing::debug!("trigger ignored: generation pending");
            return None;
        }
        let Some(rec) = self.form.capture() else {
            tracing::debug!("trigger ignored: form incomplete");
            return None;
        };
        let span = tracing::info_span!("trigger", id = %Uuid::new_v4(), mode = "generate");
        let _guard = span.enter();
        tracing::info!("generation started");
        Some(generator.spawn(rec).holding(self.pending.clone()))
    }

    pub async fn settle(&self, task: GenerationTask) -> Result<String, GenerationError> {
        let res = task.join().await;
        match &res {
            Ok(text) => tracing::info!(chars = text.chars().count(), "generation finished"),
            Err(e) => tracing::info!(outcome = %e, "generation finished"),
        }
        res
    }
}
