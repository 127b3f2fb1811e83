//! Project-level configuration.

use serde::{Deserialize, Serialize};

/// Switches controlling what a scaffold run generates.
///
/// Assembled once from CLI flags and defaults, read-only thereafter, and
/// shared by reference across every template unit, the manifest renderer
/// and the generator filter in one run.
///
/// The boolean toggles are independent — no two are mutually exclusive in
/// the data model, though some combinations produce degenerate YAML (e.g. a
/// webhook Service with no webhook container when `enable_webhooks` is set
/// but the deployment is hand-edited).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Project identifier, used as a prefix in generated resource names
    /// (`<name>-system`, `<name>-manager-role`, ...).
    pub name: String,

    /// Controller-manager container image reference.
    pub image: String,

    /// Go import path of the scaffolded project, e.g. `example.com/project`.
    /// Used in generated Go sources that import their own packages.
    pub repo: String,

    /// Domain appended to API groups, e.g. `example.com` giving
    /// `crew.example.com`.
    pub domain: String,

    /// Skip generating the RBAC role/rolebinding manifest set.
    pub disable_create_rbac: bool,

    /// Generate webhook configuration, service and deployment wiring.
    pub enable_webhooks: bool,

    /// Skip the kube-rbac-proxy sidecar and its RBAC/service manifests.
    pub disable_auth_proxy: bool,

    /// Generate a Prometheus ServiceMonitor for the metrics endpoint.
    pub enable_prometheus: bool,

    /// Skip generating the `<name>-system` Namespace document.
    pub disable_create_namespace: bool,

    /// Generate a self-signed cert-manager Issuer/Certificate pair.
    pub enable_cert_manager: bool,
}

impl Configuration {
    /// Create a configuration with the given project name and all toggles
    /// at their defaults.
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            repo: "example.com/project".into(),
            domain: "example.com".into(),
            ..Self::default()
        }
    }

    /// Namespace the controller-manager is deployed into.
    pub fn system_namespace(&self) -> String {
        format!("{}-system", self.name)
    }
}
