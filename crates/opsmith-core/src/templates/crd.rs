//! CRD YAML unit: the CustomResourceDefinition stub for one resource.
//!
//! The scaffolded stub carries an open openAPIV3Schema; the real schema is
//! produced later by the external generator and spliced in through the
//! document pipeline.

use std::path::PathBuf;

use crate::domain::Resource;
use crate::scaffold::{ScaffoldError, TemplateUnit};

use super::expand;

const CRD_TEMPLATE: &str = r#"apiVersion: apiextensions.k8s.io/v1beta1
kind: CustomResourceDefinition
metadata:
  creationTimestamp: null
  labels:
    controller-tools.k8s.io: "1.0"
  name: {{PLURAL}}.{{QUALIFIED_GROUP}}
spec:
  group: {{QUALIFIED_GROUP}}
  names:
    kind: {{KIND}}
    plural: {{PLURAL}}
  scope: {{SCOPE}}
  validation:
    openAPIV3Schema:
      properties:
        apiVersion:
          type: string
        kind:
          type: string
        metadata:
          type: object
        spec:
          type: object
        status:
          type: object
      type: object
  version: {{VERSION}}
status:
  acceptedNames:
    kind: ""
    plural: ""
  conditions: []
  storedVersions: []
"#;

/// `config/crds/{group}_{version}_{lowerkind}.yaml`.
pub struct Crd {
    resource: Resource,
    qualified_group: String,
}

impl Crd {
    pub fn new(resource: &Resource, domain: &str) -> Self {
        Self {
            resource: resource.clone(),
            qualified_group: resource.qualified_group(domain),
        }
    }
}

impl TemplateUnit for Crd {
    fn name(&self) -> &'static str {
        "crd"
    }

    fn path(&self) -> PathBuf {
        ["config", "crds"].iter().collect::<PathBuf>().join(format!(
            "{}_{}_{}.yaml",
            self.resource.group,
            self.resource.version,
            self.resource.kind_lower()
        ))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(
            CRD_TEMPLATE,
            &[
                ("PLURAL", &self.resource.resource),
                ("QUALIFIED_GROUP", &self.qualified_group),
                ("KIND", &self.resource.kind),
                ("SCOPE", self.resource.scope()),
                ("VERSION", &self.resource.version),
            ],
        ))
    }
}
