// ABOUTME: Template module for placeholder substitution
// ABOUTME: Exports the substitution engine and per-record rendering context

pub mod context;
pub mod engine;

pub use context::TemplateContext;
pub use engine::{scrub_decimal_zeros, PlaceholderEngine};
