//! Template source adapters.

mod git;
mod static_source;

pub use git::GitSource;
pub use static_source::StaticSource;
