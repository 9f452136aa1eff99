//! Kupu Library
//!
//! This library contains the core components of Kupu: the case-sensitive
//! word trie, dictionary loading, configuration, and the text renderers
//! used by the `kupu` binary. The library can also be used as a dependency
//! by other projects that only need the trie.
//!
//! # Architecture
//!
//! - `data_structures` holds the trie engine, which performs no I/O
//! - `dictionary` gathers words from configuration and word-list files
//! - `render` turns engine results into the text the binary prints
//! - `config` and `error` carry configuration loading and error reporting

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod render;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kupu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter as the global reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
