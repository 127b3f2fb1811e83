//! The template unit contract.

use std::path::PathBuf;

use super::error::ScaffoldError;

/// One named artifact producer: a (destination path, body) pair closed over
/// a validated resource descriptor and/or project configuration.
///
/// Both methods are pure functions of the closed-over inputs — `path` never
/// touches the configuration it wasn't given, and `render` never touches
/// disk. A unit never mutates what it closes over, which is what makes unit
/// rendering safe to parallelize if that ever becomes worthwhile.
///
/// Template authors carry the main correctness burden of the whole system:
/// `render` must produce syntactically valid Go or YAML for every legal
/// combination of boolean toggles.
pub trait TemplateUnit {
    /// Stable identifier used in error reporting and logs.
    fn name(&self) -> &'static str;

    /// Destination path, relative to the scaffold output root.
    fn path(&self) -> PathBuf;

    /// Produce the file body.
    fn render(&self) -> Result<String, ScaffoldError>;

    /// Whether the engine should prepend the boilerplate license header.
    /// True for source-code units, false for YAML and manifest files.
    fn prepend_boilerplate(&self) -> bool {
        false
    }

    /// Whether an existing file at [`path`](TemplateUnit::path) should be
    /// overwritten. Defaults to false: existing files are skipped, making
    /// re-runs idempotent for hand-edited scaffolds.
    fn overwrite(&self) -> bool {
        false
    }
}
