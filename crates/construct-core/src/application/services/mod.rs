//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives `new` and `generate`; `TreeRenderer` and
//! `InstructionsPrinter` are the two steps both share.

pub mod instructions;
pub mod scaffold_service;
pub mod tree_renderer;

pub use instructions::InstructionsPrinter;
pub use scaffold_service::{
    CREATING_DIRECTORY, CREATING_FILES, GenerateRequest, GenerationReport, NewProjectRequest,
    ScaffoldService,
};
pub use tree_renderer::{RenderJob, TreeRenderer};
