//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "opsmith",
    bin_name = "opsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Kubernetes controller project scaffolding",
    long_about = "Opsmith scaffolds controller-manager projects: API type \
                  sources, RBAC and CRD manifests, and the runtime manifest \
                  set for a controller deployment.",
    after_help = "EXAMPLES:\n\
        \x20 opsmith project --project-name ship --image example/ship:v1\n\
        \x20 opsmith resource --group crew --version v1 --kind FirstMate\n\
        \x20 opsmith manifests --project-name ship --image example/ship:v1 --enable-webhooks\n\
        \x20 opsmith completions bash > /usr/share/bash-completion/completions/opsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new controller project.
    #[command(
        about = "Scaffold a new controller project",
        after_help = "EXAMPLES:\n\
            \x20 opsmith project --project-name ship --image example/ship:v1\n\
            \x20 opsmith project --project-name ship --image example/ship:v1 --repo github.com/example/ship"
    )]
    Project(ProjectArgs),

    /// Scaffold a new API resource into an existing project.
    #[command(
        about = "Scaffold a new API resource",
        after_help = "EXAMPLES:\n\
            \x20 opsmith resource --group crew --version v1 --kind FirstMate\n\
            \x20 opsmith resource --group creatures --version v2alpha1 --kind Kraken --namespaced=false"
    )]
    Resource(ResourceArgs),

    /// Render the controller-manager manifest set.
    #[command(
        about = "Render runtime manifests",
        after_help = "EXAMPLES:\n\
            \x20 opsmith manifests --project-name ship --image example/ship:v1\n\
            \x20 opsmith manifests --project-name ship --image example/ship:v1 --run-generator -o manifests.yaml"
    )]
    Manifests(ManifestsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 opsmith completions bash > ~/.local/share/bash-completion/completions/opsmith\n\
            \x20 opsmith completions zsh  > ~/.zfunc/_opsmith"
    )]
    Completions(CompletionsArgs),
}

// ── shared configuration flags ────────────────────────────────────────────────

/// Project-level settings shared by `project` and `manifests`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Project name; namespaces and manifest names derive from it.
    #[arg(long = "project-name", value_name = "NAME", help = "Project name")]
    pub project_name: String,

    /// Controller-manager container image.
    #[arg(long = "image", value_name = "IMAGE", help = "Controller-manager image")]
    pub image: String,

    /// Go import path the scaffolded sources live under.
    #[arg(
        long = "repo",
        value_name = "PATH",
        default_value = "example.com/project",
        help = "Go import path of the project"
    )]
    pub repo: String,

    /// API group domain suffix.
    #[arg(
        long = "domain",
        value_name = "DOMAIN",
        default_value = "example.com",
        help = "Domain appended to API groups"
    )]
    pub domain: String,

    #[command(flatten)]
    pub toggles: ToggleArgs,
}

/// Feature toggles controlling which manifests and generator outputs exist.
#[derive(Debug, Args, Default)]
pub struct ToggleArgs {
    /// Skip RBAC manifest generation entirely.
    #[arg(long = "disable-create-rbac", help = "Do not generate RBAC manifests")]
    pub disable_create_rbac: bool,

    /// Generate webhook manifests and wire the webhook server.
    #[arg(long = "enable-webhooks", help = "Generate webhook manifests")]
    pub enable_webhooks: bool,

    /// Drop the kube-rbac-proxy sidecar and metrics service.
    #[arg(long = "disable-auth-proxy", help = "Do not deploy the metrics auth proxy")]
    pub disable_auth_proxy: bool,

    /// Emit a Prometheus ServiceMonitor.
    #[arg(long = "enable-prometheus", help = "Generate a ServiceMonitor")]
    pub enable_prometheus: bool,

    /// Do not emit the system Namespace document.
    #[arg(long = "disable-create-namespace", help = "Do not generate the Namespace")]
    pub disable_create_namespace: bool,

    /// Emit cert-manager Issuer and Certificate for webhook serving certs.
    #[arg(long = "enable-cert-manager", help = "Generate cert-manager resources")]
    pub enable_cert_manager: bool,
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `opsmith project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory to scaffold into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// License header file prepended to generated source files.
    #[arg(long = "boilerplate", value_name = "FILE", help = "License header file")]
    pub boilerplate: Option<PathBuf>,
}

// ── resource ──────────────────────────────────────────────────────────────────

/// Arguments for `opsmith resource`.
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// API group, e.g. `crew`.
    #[arg(short = 'g', long = "group", value_name = "GROUP", help = "API group")]
    pub group: String,

    /// API version, e.g. `v1` or `v1beta1`.
    #[arg(long = "version", value_name = "VERSION", help = "API version")]
    pub version: String,

    /// Kind, e.g. `FirstMate`.
    #[arg(short = 'k', long = "kind", value_name = "KIND", help = "Resource kind")]
    pub kind: String,

    /// Plural resource name; derived from the kind when omitted.
    #[arg(
        long = "resource",
        value_name = "PLURAL",
        help = "Plural resource name (derived when omitted)"
    )]
    pub resource: Option<String>,

    /// Whether the resource is namespace-scoped.
    #[arg(
        long = "namespaced",
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set,
        help = "Namespace-scoped resource"
    )]
    pub namespaced: bool,

    /// Go import path the scaffolded sources live under.
    #[arg(
        long = "repo",
        value_name = "PATH",
        default_value = "example.com/project",
        help = "Go import path of the project"
    )]
    pub repo: String,

    /// API group domain suffix.
    #[arg(
        long = "domain",
        value_name = "DOMAIN",
        default_value = "example.com",
        help = "Domain appended to API groups"
    )]
    pub domain: String,

    /// Directory to scaffold into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// License header file prepended to generated source files.
    #[arg(long = "boilerplate", value_name = "FILE", help = "License header file")]
    pub boilerplate: Option<PathBuf>,
}

// ── manifests ─────────────────────────────────────────────────────────────────

/// Arguments for `opsmith manifests`.
#[derive(Debug, Args)]
pub struct ManifestsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Run the external generator and merge its documents in front of the
    /// rendered set.
    #[arg(long = "run-generator", help = "Run controller-gen and merge its output")]
    pub run_generator: bool,

    /// Output file; `-` or omitted writes to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `opsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
