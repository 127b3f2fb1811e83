//! `opsmith project` — scaffold a new controller project.

use tracing::{info, instrument};

use opsmith_adapters::LocalFilesystem;
use opsmith_core::scaffold::{Options, Scaffold, registry};

use crate::cli::ProjectArgs;
use crate::error::CliResult;

use super::{build_configuration, load_boilerplate};

#[instrument(skip_all, fields(name = %args.config.project_name))]
pub fn execute(args: ProjectArgs) -> CliResult<()> {
    let config = build_configuration(&args.config);
    let boilerplate = load_boilerplate(args.boilerplate.as_deref())?;

    let scaffold = Scaffold::new(Box::new(LocalFilesystem::new()));
    let options = Options {
        output_root: args.output,
        boilerplate,
    };
    scaffold.execute(&options, &registry::project_units(&config))?;

    info!(root = %options.output_root.display(), "project scaffolded");
    Ok(())
}
