//! `opsmith resource` — validate a Group/Version/Kind and scaffold the API
//! resource files into an existing project.

use tracing::{info, instrument};

use opsmith_adapters::LocalFilesystem;
use opsmith_core::domain::{Configuration, Resource};
use opsmith_core::scaffold::{Options, Scaffold, registry};

use crate::cli::ResourceArgs;
use crate::error::CliResult;

use super::load_boilerplate;

#[instrument(skip_all, fields(group = %args.group, version = %args.version, kind = %args.kind))]
pub fn execute(args: ResourceArgs) -> CliResult<()> {
    let mut resource = Resource {
        group: args.group,
        version: args.version,
        kind: args.kind,
        resource: args.resource.unwrap_or_default(),
        namespaced: args.namespaced,
        ..Resource::default()
    };
    resource.validate()?;

    // Only the repo and domain feed resource units; project name and image
    // are project-scaffold concerns.
    let config = Configuration {
        repo: args.repo,
        domain: args.domain,
        ..Configuration::default()
    };

    let boilerplate = load_boilerplate(args.boilerplate.as_deref())?;
    let scaffold = Scaffold::new(Box::new(LocalFilesystem::new()));
    let options = Options {
        output_root: args.output,
        boilerplate,
    };
    scaffold.execute(&options, &registry::resource_units(&resource, &config))?;

    info!(
        resource = %resource.resource,
        root = %options.output_root.display(),
        "resource scaffolded"
    );
    Ok(())
}
