//! Infrastructure adapters for Construct.
//!
//! This crate implements the ports defined in `construct-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod inflector;
pub mod renderer;
pub mod reporter;
pub mod source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use inflector::EnglishInflector;
pub use renderer::{HandlebarsEngine, HelperSet};
pub use reporter::{RecordingReporter, ReportEvent};
pub use source::{GitSource, StaticSource};
