//! Application layer for Construct.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TreeRenderer, InstructionsPrinter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming, classification and destination planning
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CREATING_DIRECTORY, CREATING_FILES, GenerateRequest, GenerationReport, InstructionsPrinter,
    NewProjectRequest, RenderJob, ScaffoldService, TreeRenderer,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, Inflector, ProgressReporter, TemplateEngine, VersionedSource, WalkEntry,
};

pub use error::ApplicationError;
