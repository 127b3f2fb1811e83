//! Infrastructure adapters for Opsmith.
//!
//! This crate implements the ports defined in `opsmith-core` (the scaffold
//! [`Filesystem`](opsmith_core::scaffold::Filesystem) and the pipeline
//! [`CodeGenerator`](opsmith_core::pipeline::CodeGenerator)). It contains
//! all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::ControllerGenProcess;
