//! RBAC YAML units scaffolded alongside a resource: a ClusterRole granting
//! the manager full access to the group, and its binding.

use std::path::PathBuf;

use crate::domain::Resource;
use crate::scaffold::{ScaffoldError, TemplateUnit};

use super::expand;

const ROLE_TEMPLATE: &str = r#"apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  creationTimestamp: null
  name: {{GROUP}}-role
rules:
- apiGroups:
  - {{QUALIFIED_GROUP}}
  resources:
  - '*'
  verbs:
  - '*'
"#;

/// `config/manager/{group}_role_rbac.yaml`.
pub struct Role {
    resource: Resource,
    qualified_group: String,
}

impl Role {
    pub fn new(resource: &Resource, domain: &str) -> Self {
        Self {
            resource: resource.clone(),
            qualified_group: resource.qualified_group(domain),
        }
    }
}

impl TemplateUnit for Role {
    fn name(&self) -> &'static str {
        "rbac-role"
    }

    fn path(&self) -> PathBuf {
        ["config", "manager"]
            .iter()
            .collect::<PathBuf>()
            .join(format!("{}_role_rbac.yaml", self.resource.group))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(
            ROLE_TEMPLATE,
            &[
                ("GROUP", &self.resource.group),
                ("QUALIFIED_GROUP", &self.qualified_group),
            ],
        ))
    }
}

const ROLE_BINDING_TEMPLATE: &str = r#"apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRoleBinding
metadata:
  creationTimestamp: null
  name: {{GROUP}}-rolebinding
roleRef:
  apiGroup: rbac.authorization.k8s.io
  kind: ClusterRole
  name: {{GROUP}}-role
subjects:
- kind: ServiceAccount
  name: default
  namespace: system
"#;

/// `config/manager/{group}_rolebinding_rbac.yaml`.
pub struct RoleBinding {
    resource: Resource,
}

impl RoleBinding {
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource: resource.clone(),
        }
    }
}

impl TemplateUnit for RoleBinding {
    fn name(&self) -> &'static str {
        "rbac-rolebinding"
    }

    fn path(&self) -> PathBuf {
        ["config", "manager"]
            .iter()
            .collect::<PathBuf>()
            .join(format!("{}_rolebinding_rbac.yaml", self.resource.group))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(ROLE_BINDING_TEMPLATE, &[("GROUP", &self.resource.group)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_grants_wildcard_on_qualified_group() {
        let mut r = Resource {
            group: "ship".into(),
            version: "v1beta1".into(),
            kind: "Frigate".into(),
            namespaced: true,
            ..Resource::default()
        };
        r.validate().unwrap();

        let body = Role::new(&r, "example.com").render().unwrap();
        assert!(body.contains("name: ship-role"));
        assert!(body.contains("- ship.example.com"));

        let binding = RoleBinding::new(&r).render().unwrap();
        assert!(binding.contains("name: ship-rolebinding"));
        assert!(binding.contains("name: ship-role"));
    }
}
