//! Progress reporter adapters.

mod recording;

pub use recording::{RecordingReporter, ReportEvent};
