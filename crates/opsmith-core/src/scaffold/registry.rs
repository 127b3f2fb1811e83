//! Template unit registry: the fixed, declared unit lists per scaffold
//! intent.
//!
//! Ordering is hand-maintained and explicit so it can be audited and tested
//! independently of rendering — the engine executes strictly in list order
//! and computes no dependency graph. The only ordering constraint that
//! actually matters is that project-level files exist before resource files
//! are written into directories they imply, which `project_units` before
//! `resource_units` satisfies.

use crate::domain::{Configuration, Resource};
use crate::templates::{
    api::{AddToScheme, Doc, Group, Register, Types, TypesTest, VersionSuiteTest},
    crd::Crd,
    project::{ApisStub, ControllerStub, Dockerfile, GopkgToml, ManagerMain},
    rbac::{Role, RoleBinding},
};

use super::unit::TemplateUnit;

/// Units written when scaffolding a new API resource.
pub fn resource_units(resource: &Resource, config: &Configuration) -> Vec<Box<dyn TemplateUnit>> {
    vec![
        Box::new(Types::new(resource)),
        Box::new(TypesTest::new(resource)),
        Box::new(VersionSuiteTest::new(resource)),
        Box::new(Doc::new(resource, &config.domain)),
        Box::new(Register::new(resource, &config.domain)),
        Box::new(Group::new(resource)),
        Box::new(AddToScheme::new(resource, &config.repo)),
        Box::new(Role::new(resource, &config.domain)),
        Box::new(RoleBinding::new(resource)),
        Box::new(Crd::new(resource, &config.domain)),
    ]
}

/// Units written when scaffolding a new project.
pub fn project_units(config: &Configuration) -> Vec<Box<dyn TemplateUnit>> {
    vec![
        Box::new(GopkgToml::new()),
        Box::new(ManagerMain::new(config)),
        Box::new(Dockerfile::new(config)),
        Box::new(ApisStub::new()),
        Box::new(ControllerStub::new()),
    ]
}
