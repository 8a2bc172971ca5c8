//! Core domain logic (interface-agnostic)
//!
//! This module contains all business logic that is independent
//! of the CLI surface.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **segment**: Paragraph/sentence splitting and classification
//! - **chunker**: Chunk assembly strategies
//! - **overlap**: Neighbor overlap injection
//! - **emitter**: Chunk index record emission
//! - **walker**: File system traversal
//! - **pipeline**: End-to-end slicing workflow

pub mod chunker;
pub mod config;
pub mod emitter;
pub mod error;
pub mod overlap;
pub mod pipeline;
pub mod segment;
pub mod types;
pub mod walker;
pub mod xdg;

// Re-export key types for convenience
pub use chunker::Chunker;
pub use config::Config;
pub use error::{Result, SliceError};
pub use pipeline::SlicePipeline;
