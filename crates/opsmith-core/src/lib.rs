//! Opsmith Core - scaffolding engine for Kubernetes controller projects.
//!
//! This crate provides the domain and application layers for the Opsmith
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           opsmith-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Scaffold engine + document pipeline   │
//! │   (Scaffold, registry, GeneratorFilter) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Driven ports (traits)              │
//! │   (Filesystem, CodeGenerator)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   opsmith-adapters (infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem,   │
//! │    ControllerGenProcess)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer ([`domain`]) is pure: the [`domain::Resource`] descriptor
//! and project [`domain::Configuration`] never touch I/O. Everything a
//! scaffold run writes is derived deterministically from those two values.
//!
//! Two parallel subsystems do the work:
//!
//! - [`scaffold`]: ordered [`scaffold::TemplateUnit`] lists rendered and
//!   written by the [`scaffold::Scaffold`] engine.
//! - [`pipeline`]: composable filters over a YAML document stream, including
//!   the external-generator splice ([`pipeline::GeneratorFilter`]).
//!
//! [`manifests`] renders the controller-manager deployment manifest set that
//! the pipeline later re-parses into discrete documents.

pub mod domain;
pub mod error;
pub mod manifests;
pub mod pipeline;
pub mod scaffold;
pub mod templates;

pub use domain::{Configuration, Resource};
pub use error::{OpsmithError, OpsmithResult};
