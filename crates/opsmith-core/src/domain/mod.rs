//! Domain layer: the values every generated artifact is keyed on.
//!
//! A [`Resource`] identifies one API kind (Group/Version/Kind plus the
//! plural form and scope); a [`Configuration`] carries the project-level
//! switches. Both are constructed from user input, validated once, and
//! treated as immutable for the remainder of a scaffold run.

pub mod config;
pub mod error;
pub mod resource;

pub use config::Configuration;
pub use error::DomainError;
pub use resource::Resource;
