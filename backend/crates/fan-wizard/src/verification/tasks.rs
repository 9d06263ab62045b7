use std::collections::HashMap;

use log::debug;
use tokio::task::AbortHandle;
use uuid::Uuid;

/// Outstanding verification tasks keyed by the id of the item they verify.
#[derive(Debug, Default)]
pub struct VerificationTasks {
    handles: HashMap<Uuid, AbortHandle>,
}

impl VerificationTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a freshly spawned task. A task already tracked for `id` is aborted.
    pub fn track(&mut self, id: Uuid, handle: AbortHandle) {
        if let Some(previous) = self.handles.insert(id, handle) {
            previous.abort();
        }
        debug!("Verification scheduled for {} ({} outstanding)", id, self.len());
    }

    /// Abort the task for `id`, if any. Returns whether one was outstanding.
    pub fn cancel(&mut self, id: Uuid) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => {
                handle.abort();
                debug!("Verification cancelled for {}", id);
                true
            }
            None => false,
        }
    }

    /// Forget a task that ran to completion
    pub fn finish(&mut self, id: Uuid) {
        self.handles.remove(&id);
    }

    /// Abort everything; returns how many tasks were outstanding
    pub fn cancel_all(&mut self) -> usize {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
        count
    }

    pub fn is_pending(&self, id: Uuid) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for VerificationTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
