//! `opsmith manifests` — render the controller-manager manifest set,
//! optionally splicing the external generator's documents in front.

use std::io::Write as _;
use std::path::Path;

use tracing::{info, instrument};

use opsmith_adapters::ControllerGenProcess;
use opsmith_core::manifests::render_manifests;
use opsmith_core::pipeline::{DocumentFilter, GeneratorFilter, write_documents};

use crate::cli::ManifestsArgs;
use crate::error::{CliError, CliResult};

use super::build_configuration;

#[instrument(skip_all, fields(name = %args.config.project_name))]
pub fn execute(args: ManifestsArgs) -> CliResult<()> {
    let config = build_configuration(&args.config);

    let mut blob = render_manifests(&config);

    if args.run_generator {
        // Generated documents go in front of the rendered set. The rendered
        // blob itself is kept verbatim (its block comments survive); only
        // the generator's documents pass through the serializer.
        let generator = ControllerGenProcess::new();
        let generated = GeneratorFilter::new(&config, &generator).filter(Vec::new())?;
        if !generated.is_empty() {
            info!(documents = generated.len(), "generator output merged");
            blob = format!("{}---\n{blob}", write_documents(&generated)?);
        }
    }

    match args.output.as_deref() {
        None => write_stdout(&blob),
        Some(p) if p == Path::new("-") => write_stdout(&blob),
        Some(path) => {
            std::fs::write(path, &blob).map_err(|e| CliError::File {
                action: "write",
                path: path.to_path_buf(),
                source: e,
            })?;
            info!(path = %path.display(), "manifests written");
            Ok(())
        }
    }
}

fn write_stdout(blob: &str) -> CliResult<()> {
    std::io::stdout()
        .write_all(blob.as_bytes())
        .map_err(|e| CliError::File {
            action: "write",
            path: "-".into(),
            source: e,
        })
}
