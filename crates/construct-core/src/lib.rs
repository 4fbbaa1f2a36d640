//! Construct Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Construct
//! application constructor, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          construct-cli (CLI)            │
//! │     (new / generate commands)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, TreeRenderer,        │
//! │   InstructionsPrinter)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateEngine,            │
//! │  VersionedSource, ProgressReporter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   construct-adapters (Infrastructure)   │
//! │ (LocalFilesystem, GitSource,            │
//! │  HandlebarsEngine, ...)                 │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TreeEntry, RenameRules, RenderView)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use construct_core::{
//!     application::{NewProjectRequest, ScaffoldService},
//!     domain::TemplateReference,
//! };
//!
//! // Adapters come from construct-adapters.
//! let service = ScaffoldService::new(source, filesystem, engine, reporter);
//! let request = NewProjectRequest {
//!     name: Some("blog".into()),
//!     template: TemplateReference::new("https://github.com/bmorton/go-template"),
//!     import_prefix: "github.com/bmorton".into(),
//!     source_root: "/home/me/go/src/github.com/bmorton".into(),
//! };
//! service.new_project(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerationReport, InstructionsPrinter, NewProjectRequest, RenderJob,
        ScaffoldService, TreeRenderer,
        ports::{
            Filesystem, Inflector, ProgressReporter, TemplateEngine, VersionedSource, WalkEntry,
        },
    };
    pub use crate::domain::{
        EntityNames, EntryKind, RelativePath, RenameRule, RenameRules, RenderView,
        ResolvedSource, TemplateReference, TreeEntry,
    };
    pub use crate::error::{ConstructError, ConstructResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
