//! mdslice - Markdown chunking for retrieval indexing
//!
//! Splits markdown documents into retrieval-sized chunks and emits
//! a JSON chunk index per document. Designed for feeding retrieval
//! pipelines with UTF-8 safety and structural awareness (headings,
//! embedded base64 images, lists).
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types, xdg
//!   - segment (paragraph/sentence splitting, classification)
//!   - chunker (semantic, length, paragraph strategies)
//!   - overlap (neighbor context injection)
//!   - emitter (chunk index records)
//!   - walker, pipeline (file traversal and orchestration)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - UTF-8 safe chunking (character-based, never panics)
//! - Three strategies: semantic (default), length, paragraph
//! - Atomic handling of embedded base64 image references
//! - Optional neighbor overlap injection
//! - One `chunk_index.json` per document

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::chunker::Chunker;
pub use core::config::{ChunkMethod, Config};
pub use core::error::{Result, SliceError};
pub use core::pipeline::SlicePipeline;
pub use core::types::*;
