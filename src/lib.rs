// ABOUTME: Main library module for the scanforge config generator
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod output;
pub mod render;
pub mod scan;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use output::OutputWriter;
pub use render::{RenderLayout, RenderedFile, Renderer, Step};
pub use scan::{ParamValue, ScanPoint, ScanTable};
pub use template::{PlaceholderEngine, TemplateContext};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
