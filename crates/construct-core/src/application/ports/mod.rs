//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `construct-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: tree walk and file operations
//!   - `VersionedSource`: template reference → local directory
//!   - `TemplateEngine`: text substitution
//!   - `Inflector`: singular/plural word forms
//!   - `ProgressReporter`: console progress lines

pub mod output;

pub use output::{
    Filesystem, Inflector, ProgressReporter, TemplateEngine, VersionedSource, WalkEntry,
};

#[cfg(test)]
pub use output::{MockInflector, MockVersionedSource};
