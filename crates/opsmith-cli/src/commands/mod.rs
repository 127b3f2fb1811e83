//! Command handlers. One module per subcommand; shared helpers live here.

pub mod completions;
pub mod manifests;
pub mod project;
pub mod resource;

use std::path::Path;

use opsmith_core::Configuration;

use crate::cli::ConfigArgs;
use crate::error::{CliError, CliResult};

/// Assemble the core configuration from parsed flags.
pub(crate) fn build_configuration(args: &ConfigArgs) -> Configuration {
    Configuration {
        repo: args.repo.clone(),
        domain: args.domain.clone(),
        disable_create_rbac: args.toggles.disable_create_rbac,
        enable_webhooks: args.toggles.enable_webhooks,
        disable_auth_proxy: args.toggles.disable_auth_proxy,
        enable_prometheus: args.toggles.enable_prometheus,
        disable_create_namespace: args.toggles.disable_create_namespace,
        enable_cert_manager: args.toggles.enable_cert_manager,
        ..Configuration::new(args.project_name.clone(), args.image.clone())
    }
}

/// Load the license header file, if one was given.
pub(crate) fn load_boilerplate(path: Option<&Path>) -> CliResult<Option<String>> {
    match path {
        Some(path) => {
            let header = std::fs::read_to_string(path).map_err(|e| CliError::File {
                action: "read",
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(header.trim_end().to_string()))
        }
        None => Ok(None),
    }
}
