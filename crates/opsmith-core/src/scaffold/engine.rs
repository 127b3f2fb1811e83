//! Scaffold engine - executes an ordered unit list against one configuration.
//!
//! The engine is deliberately dumb about ordering: the registry hands it a
//! hand-ordered list and it executes strictly in list order, failing fast on
//! the first render or write error. There is no rollback of already-written
//! files; a failed mid-run scaffold leaves partial output behind (accepted
//! operational risk, documented to operators).

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use super::error::ScaffoldError;
use super::ports::Filesystem;
use super::unit::TemplateUnit;

/// Per-run options shared by every unit.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Root directory all unit paths are resolved under.
    pub output_root: PathBuf,

    /// License header prepended to source-code units. `None` skips the
    /// prepend entirely (the BoilerplateOptional case).
    pub boilerplate: Option<String>,
}

/// Executes template units in order, resolving paths, rendering bodies and
/// writing them through the [`Filesystem`] port.
pub struct Scaffold {
    fs: Box<dyn Filesystem>,
}

impl Scaffold {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Execute the given units strictly in order.
    ///
    /// Per unit:
    /// 1. Resolve the destination path; skip if it exists and the unit does
    ///    not opt into overwrite.
    /// 2. Render the body; a failure aborts the whole run naming the unit.
    /// 3. Prepend the boilerplate header to source-code units.
    /// 4. Create parent directories and write.
    #[instrument(skip_all, fields(root = %options.output_root.display(), units = units.len()))]
    pub fn execute(
        &self,
        options: &Options,
        units: &[Box<dyn TemplateUnit>],
    ) -> Result<(), ScaffoldError> {
        for unit in units {
            let path = options.output_root.join(unit.path());

            if self.fs.exists(&path) && !unit.overwrite() {
                debug!(unit = unit.name(), path = %path.display(), "exists, skipping");
                continue;
            }

            let body = unit.render()?;

            let content = match (&options.boilerplate, unit.prepend_boilerplate()) {
                (Some(header), true) => format!("{header}\n{body}"),
                _ => body,
            };

            if let Some(parent) = path.parent() {
                self.fs.create_dir_all(parent)?;
            }
            self.fs.write_file(&path, &content)?;

            debug!(unit = unit.name(), path = %path.display(), "written");
        }

        info!("scaffold run completed");
        Ok(())
    }
}
