//! Template rendering adapters.

mod handlebars_engine;
mod helpers;

pub use handlebars_engine::HandlebarsEngine;
pub use helpers::{HelperSet, capitalize};
