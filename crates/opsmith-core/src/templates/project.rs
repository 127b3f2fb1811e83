//! Project-level units: the dependency manifest, the controller-manager
//! entrypoint, the Dockerfile, and the apis/controller registration stubs.

use std::path::PathBuf;

use crate::domain::Configuration;
use crate::scaffold::{ScaffoldError, TemplateUnit};

use super::expand;

// ── Gopkg.toml ────────────────────────────────────────────────────────────────

const GOPKG_TOML_TEMPLATE: &str = r#"required = [
    "github.com/emicklei/go-restful",
    "github.com/onsi/ginkgo",
    "github.com/onsi/gomega",
    "k8s.io/client-go/plugin/pkg/client/auth/gcp",
    "k8s.io/code-generator/cmd/deepcopy-gen",
    ]

[[override]]
name = "sigs.k8s.io/controller-runtime"
version = "v0.1.1"

[[override]]
name = "k8s.io/apimachinery"
version = "kubernetes-1.11.2"

[[override]]
name = "k8s.io/client-go"
version = "kubernetes-1.11.2"

[prune]
  go-tests = true
"#;

/// `Gopkg.toml`: pinned dependency manifest for the scaffolded project.
pub struct GopkgToml;

impl GopkgToml {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl TemplateUnit for GopkgToml {
    fn name(&self) -> &'static str {
        "gopkg-toml"
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("Gopkg.toml")
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(GOPKG_TOML_TEMPLATE.to_string())
    }
}

// ── cmd/manager/main.go ───────────────────────────────────────────────────────

const MANAGER_MAIN_TEMPLATE: &str = r#"package main

import (
	"os"

	"{{REPO}}/pkg/apis"
	"{{REPO}}/pkg/controller"
	_ "k8s.io/client-go/plugin/pkg/client/auth/gcp"
	"sigs.k8s.io/controller-runtime/pkg/client/config"
	"sigs.k8s.io/controller-runtime/pkg/manager"
	logf "sigs.k8s.io/controller-runtime/pkg/runtime/log"
	"sigs.k8s.io/controller-runtime/pkg/runtime/signals"
)

func main() {
	logf.SetLogger(logf.ZapLogger(false))
	log := logf.Log.WithName("entrypoint")

	// Get a config to talk to the apiserver
	log.Info("setting up client for manager")
	cfg, err := config.GetConfig()
	if err != nil {
		log.Error(err, "unable to set up client config")
		os.Exit(1)
	}

	// Create a new Cmd to provide shared dependencies and start components
	log.Info("setting up manager")
	mgr, err := manager.New(cfg, manager.Options{})
	if err != nil {
		log.Error(err, "unable to set up overall controller manager")
		os.Exit(1)
	}

	log.Info("registering components")

	// Setup Scheme for all resources
	if err := apis.AddToScheme(mgr.GetScheme()); err != nil {
		log.Error(err, "unable to add APIs to scheme")
		os.Exit(1)
	}

	// Setup all Controllers
	if err := controller.AddToManager(mgr); err != nil {
		log.Error(err, "unable to register controllers to the manager")
		os.Exit(1)
	}

	// Start the Cmd
	log.Info("starting the manager")
	if err := mgr.Start(signals.SetupSignalHandler()); err != nil {
		log.Error(err, "unable to run the manager")
		os.Exit(1)
	}
}
"#;

/// `cmd/manager/main.go`: the controller-manager entrypoint.
pub struct ManagerMain {
    repo: String,
}

impl ManagerMain {
    pub fn new(config: &Configuration) -> Self {
        Self {
            repo: config.repo.clone(),
        }
    }
}

impl TemplateUnit for ManagerMain {
    fn name(&self) -> &'static str {
        "manager-main"
    }

    fn path(&self) -> PathBuf {
        ["cmd", "manager", "main.go"].iter().collect()
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(MANAGER_MAIN_TEMPLATE, &[("REPO", &self.repo)]))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── Dockerfile ────────────────────────────────────────────────────────────────

const DOCKERFILE_TEMPLATE: &str = r#"# Build the manager binary
FROM golang:1.10.3 as builder

# Copy in the go src
WORKDIR /go/src/{{REPO}}
COPY pkg/    pkg/
COPY cmd/    cmd/
COPY vendor/ vendor/

# Build
RUN CGO_ENABLED=0 GOOS=linux GOARCH=amd64 go build -a -o manager {{REPO}}/cmd/manager

# Copy the controller-manager into a thin image
FROM ubuntu:latest
WORKDIR /
COPY --from=builder /go/src/{{REPO}}/manager .
ENTRYPOINT ["/manager"]
"#;

/// `Dockerfile`: two-stage build for the manager image.
pub struct Dockerfile {
    repo: String,
}

impl Dockerfile {
    pub fn new(config: &Configuration) -> Self {
        Self {
            repo: config.repo.clone(),
        }
    }
}

impl TemplateUnit for Dockerfile {
    fn name(&self) -> &'static str {
        "dockerfile"
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("Dockerfile")
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(DOCKERFILE_TEMPLATE, &[("REPO", &self.repo)]))
    }
}

// ── pkg/apis/apis.go ──────────────────────────────────────────────────────────

const APIS_STUB_TEMPLATE: &str = r#"// Generated by opsmith. You probably don't want to edit it.
package apis

import (
	"k8s.io/apimachinery/pkg/runtime"
)

// AddToSchemes may be used to add all resources defined in the project to a Scheme
var AddToSchemes runtime.SchemeBuilder

// AddToScheme adds all Resources to the Scheme
func AddToScheme(s *runtime.Scheme) error {
	return AddToSchemes.AddToScheme(s)
}
"#;

/// `pkg/apis/apis.go`: the project-wide scheme-builder list that
/// per-resource `addtoscheme_*.go` files append to.
pub struct ApisStub;

impl ApisStub {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl TemplateUnit for ApisStub {
    fn name(&self) -> &'static str {
        "apis-stub"
    }

    fn path(&self) -> PathBuf {
        ["pkg", "apis", "apis.go"].iter().collect()
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(APIS_STUB_TEMPLATE.to_string())
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── pkg/controller/controller.go ──────────────────────────────────────────────

const CONTROLLER_STUB_TEMPLATE: &str = r#"package controller

import (
	"sigs.k8s.io/controller-runtime/pkg/manager"
)

// AddToManagerFuncs is a list of functions to add all Controllers to the Manager
var AddToManagerFuncs []func(manager.Manager) error

// AddToManager adds all Controllers to the Manager
func AddToManager(m manager.Manager) error {
	for _, f := range AddToManagerFuncs {
		if err := f(m); err != nil {
			return err
		}
	}
	return nil
}
"#;

/// `pkg/controller/controller.go`: the controller registration list.
pub struct ControllerStub;

impl ControllerStub {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl TemplateUnit for ControllerStub {
    fn name(&self) -> &'static str {
        "controller-stub"
    }

    fn path(&self) -> PathBuf {
        ["pkg", "controller", "controller.go"].iter().collect()
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(CONTROLLER_STUB_TEMPLATE.to_string())
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}
