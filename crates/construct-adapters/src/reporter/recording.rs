use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use construct_core::application::ports::ProgressReporter;

/// One call made on a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Header(String),
    Created(PathBuf),
    Message(String),
    Block { delimiter: String, body: String },
}

/// Reporter that keeps every event in memory, for assertions.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Paths passed to `created`, in order.
    pub fn created_paths(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Created(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Bodies passed to `block`, in order.
    pub fn blocks(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Block { body, .. } => Some(body),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl ProgressReporter for RecordingReporter {
    fn header(&self, text: &str) {
        self.push(ReportEvent::Header(text.to_string()));
    }

    fn created(&self, path: &Path) {
        self.push(ReportEvent::Created(path.to_path_buf()));
    }

    fn message(&self, text: &str) {
        self.push(ReportEvent::Message(text.to_string()));
    }

    fn block(&self, delimiter: &str, body: &str) {
        self.push(ReportEvent::Block {
            delimiter: delimiter.to_string(),
            body: body.to_string(),
        });
    }
}
