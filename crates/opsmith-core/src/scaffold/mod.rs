//! Scaffold subsystem: template units, their registry, and the engine that
//! renders and writes them.
//!
//! A [`TemplateUnit`] is one (destination path, body) producer closed over a
//! validated [`crate::domain::Resource`] and/or [`crate::domain::Configuration`].
//! The [`registry`] declares which units make up a "scaffold a resource" or
//! "scaffold a project" run, in a fixed, auditable order. The [`Scaffold`]
//! engine executes a unit list strictly in that order against a
//! [`Filesystem`] port.

pub mod engine;
pub mod error;
pub mod ports;
pub mod registry;
pub mod unit;

pub use engine::{Options, Scaffold};
pub use error::ScaffoldError;
pub use ports::Filesystem;
pub use unit::TemplateUnit;
