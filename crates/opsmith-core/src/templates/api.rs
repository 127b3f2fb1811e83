//! Go source units scaffolded for one API resource: the type definitions,
//! their storage test, the version test suite, and the scheme-registration
//! glue.

use std::path::PathBuf;

use crate::domain::Resource;
use crate::scaffold::{ScaffoldError, TemplateUnit};

use super::expand;

fn api_dir(resource: &Resource) -> PathBuf {
    ["pkg", "apis", &resource.group, &resource.version]
        .iter()
        .collect()
}

// ── types.go ──────────────────────────────────────────────────────────────────

const TYPES_TEMPLATE: &str = r#"package {{VERSION}}

import (
	metav1 "k8s.io/apimachinery/pkg/apis/meta/v1"
)

// EDIT THIS FILE!  THIS IS SCAFFOLDING FOR YOU TO OWN!
// NOTE: json tags are required.  Any new fields you add must have json tags for the fields to be serialized.

// {{KIND}}Spec defines the desired state of {{KIND}}
type {{KIND}}Spec struct {
	// INSERT ADDITIONAL SPEC FIELDS - desired state of cluster
	// Important: Run "make" to regenerate code after modifying this file
}

// {{KIND}}Status defines the observed state of {{KIND}}
type {{KIND}}Status struct {
	// INSERT ADDITIONAL STATUS FIELD - define observed state of cluster
	// Important: Run "make" to regenerate code after modifying this file
}

// +genclient{{NON_NAMESPACED}}
// +k8s:deepcopy-gen:interfaces=k8s.io/apimachinery/pkg/runtime.Object

// {{KIND}} is the Schema for the {{PLURAL}} API
// +k8s:openapi-gen=true
type {{KIND}} struct {
	metav1.TypeMeta   `json:",inline"`
	metav1.ObjectMeta `json:"metadata,omitempty"`

	Spec   {{KIND}}Spec   `json:"spec,omitempty"`
	Status {{KIND}}Status `json:"status,omitempty"`
}

// +k8s:deepcopy-gen:interfaces=k8s.io/apimachinery/pkg/runtime.Object

// {{KIND}}List contains a list of {{KIND}}
type {{KIND}}List struct {
	metav1.TypeMeta `json:",inline"`
	metav1.ListMeta `json:"metadata,omitempty"`
	Items           []{{KIND}} `json:"items"`
}

func init() {
	SchemeBuilder.Register(&{{KIND}}{}, &{{KIND}}List{})
}
"#;

/// `{lowerkind}_types.go`: the Spec/Status/List type definitions.
pub struct Types {
    resource: Resource,
}

impl Types {
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource: resource.clone(),
        }
    }
}

impl TemplateUnit for Types {
    fn name(&self) -> &'static str {
        "types"
    }

    fn path(&self) -> PathBuf {
        api_dir(&self.resource).join(format!("{}_types.go", self.resource.kind_lower()))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        let non_namespaced = if self.resource.namespaced {
            ""
        } else {
            "\n// +genclient:nonNamespaced"
        };
        Ok(expand(
            TYPES_TEMPLATE,
            &[
                ("VERSION", &self.resource.version),
                ("KIND", &self.resource.kind),
                ("PLURAL", &self.resource.resource),
                ("NON_NAMESPACED", non_namespaced),
            ],
        ))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── types_test.go ─────────────────────────────────────────────────────────────

const TYPES_TEST_TEMPLATE: &str = r#"package {{VERSION}}

import (
	"testing"

	"github.com/onsi/gomega"
	"golang.org/x/net/context"
	metav1 "k8s.io/apimachinery/pkg/apis/meta/v1"
	"k8s.io/apimachinery/pkg/types"
)

func TestStorage{{KIND}}(t *testing.T) {
	key := types.NamespacedName{{OBJECT_KEY}}
	created := &{{KIND}}{ObjectMeta: metav1.ObjectMeta{{OBJECT_KEY}}}
	g := gomega.NewGomegaWithT(t)

	// Test Create
	fetched := &{{KIND}}{}
	g.Expect(c.Create(context.TODO(), created)).NotTo(gomega.HaveOccurred())

	g.Expect(c.Get(context.TODO(), key, fetched)).NotTo(gomega.HaveOccurred())
	g.Expect(fetched).To(gomega.Equal(created))

	// Test Updating the Labels
	updated := fetched.DeepCopy()
	updated.Labels = map[string]string{"hello": "world"}
	g.Expect(c.Update(context.TODO(), updated)).NotTo(gomega.HaveOccurred())

	g.Expect(c.Get(context.TODO(), key, fetched)).NotTo(gomega.HaveOccurred())
	g.Expect(fetched).To(gomega.Equal(updated))

	// Test Delete
	g.Expect(c.Delete(context.TODO(), fetched)).NotTo(gomega.HaveOccurred())
	g.Expect(c.Get(context.TODO(), key, fetched)).To(gomega.HaveOccurred())
}
"#;

/// `{lowerkind}_types_test.go`: storage round-trip test for the type.
pub struct TypesTest {
    resource: Resource,
}

impl TypesTest {
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource: resource.clone(),
        }
    }
}

impl TemplateUnit for TypesTest {
    fn name(&self) -> &'static str {
        "types-test"
    }

    fn path(&self) -> PathBuf {
        api_dir(&self.resource).join(format!("{}_types_test.go", self.resource.kind_lower()))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        let object_key = if self.resource.namespaced {
            r#"{Name: "foo", Namespace: "default"}"#
        } else {
            r#"{Name: "foo"}"#
        };
        Ok(expand(
            TYPES_TEST_TEMPLATE,
            &[
                ("VERSION", &self.resource.version),
                ("KIND", &self.resource.kind),
                ("OBJECT_KEY", object_key),
            ],
        ))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── {version}_suite_test.go ───────────────────────────────────────────────────

const VERSION_SUITE_TEST_TEMPLATE: &str = r#"package {{VERSION}}

import (
	"log"
	"os"
	"path/filepath"
	"testing"

	"k8s.io/client-go/kubernetes/scheme"
	"k8s.io/client-go/rest"
	"sigs.k8s.io/controller-runtime/pkg/client"
	"sigs.k8s.io/controller-runtime/pkg/envtest"
)

var cfg *rest.Config
var c client.Client

func TestMain(m *testing.M) {
	t := &envtest.Environment{
		CRDDirectoryPaths: []string{filepath.Join("..", "..", "..", "..", "config", "crds")},
	}

	err := SchemeBuilder.AddToScheme(scheme.Scheme)
	if err != nil {
		log.Fatal(err)
	}

	if cfg, err = t.Start(); err != nil {
		log.Fatal(err)
	}

	if c, err = client.New(cfg, client.Options{Scheme: scheme.Scheme}); err != nil {
		log.Fatal(err)
	}

	code := m.Run()
	t.Stop()
	os.Exit(code)
}
"#;

/// `{version}_suite_test.go`: envtest harness shared by the version package.
pub struct VersionSuiteTest {
    resource: Resource,
}

impl VersionSuiteTest {
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource: resource.clone(),
        }
    }
}

impl TemplateUnit for VersionSuiteTest {
    fn name(&self) -> &'static str {
        "version-suite-test"
    }

    fn path(&self) -> PathBuf {
        api_dir(&self.resource).join(format!("{}_suite_test.go", self.resource.version))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(
            VERSION_SUITE_TEST_TEMPLATE,
            &[("VERSION", &self.resource.version)],
        ))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── doc.go ────────────────────────────────────────────────────────────────────

const DOC_TEMPLATE: &str = r#"// Package {{VERSION}} contains API Schema definitions for the {{GROUP}} {{VERSION}} API group
// +k8s:deepcopy-gen=package,register
// +groupName={{QUALIFIED_GROUP}}
package {{VERSION}}
"#;

/// `doc.go`: package-level deepcopy/groupName markers.
pub struct Doc {
    resource: Resource,
    qualified_group: String,
}

impl Doc {
    pub fn new(resource: &Resource, domain: &str) -> Self {
        Self {
            resource: resource.clone(),
            qualified_group: resource.qualified_group(domain),
        }
    }
}

impl TemplateUnit for Doc {
    fn name(&self) -> &'static str {
        "doc"
    }

    fn path(&self) -> PathBuf {
        api_dir(&self.resource).join("doc.go")
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(
            DOC_TEMPLATE,
            &[
                ("VERSION", &self.resource.version),
                ("GROUP", &self.resource.group),
                ("QUALIFIED_GROUP", &self.qualified_group),
            ],
        ))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── register.go ───────────────────────────────────────────────────────────────

const REGISTER_TEMPLATE: &str = r#"// NOTE: Boilerplate only.  Ignore this file.

// Package {{VERSION}} contains API Schema definitions for the {{GROUP}} {{VERSION}} API group
// +k8s:deepcopy-gen=package,register
// +groupName={{QUALIFIED_GROUP}}
package {{VERSION}}

import (
	"k8s.io/apimachinery/pkg/runtime/schema"
	"sigs.k8s.io/controller-runtime/pkg/runtime/scheme"
)

var (
	// SchemeGroupVersion is group version used to register these objects
	SchemeGroupVersion = schema.GroupVersion{Group: "{{QUALIFIED_GROUP}}", Version: "{{VERSION}}"}

	// SchemeBuilder is used to add go types to the GroupVersionKind scheme
	SchemeBuilder = &scheme.Builder{GroupVersion: SchemeGroupVersion}
)
"#;

/// `register.go`: the SchemeBuilder for the group/version package.
pub struct Register {
    resource: Resource,
    qualified_group: String,
}

impl Register {
    pub fn new(resource: &Resource, domain: &str) -> Self {
        Self {
            resource: resource.clone(),
            qualified_group: resource.qualified_group(domain),
        }
    }
}

impl TemplateUnit for Register {
    fn name(&self) -> &'static str {
        "register"
    }

    fn path(&self) -> PathBuf {
        api_dir(&self.resource).join("register.go")
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(
            REGISTER_TEMPLATE,
            &[
                ("VERSION", &self.resource.version),
                ("GROUP", &self.resource.group),
                ("QUALIFIED_GROUP", &self.qualified_group),
            ],
        ))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── group.go ──────────────────────────────────────────────────────────────────

const GROUP_TEMPLATE: &str = r#"// Package {{GROUP}} contains {{GROUP}} API versions
package {{GROUP}}
"#;

/// `group.go`: the group package doc stub.
pub struct Group {
    resource: Resource,
}

impl Group {
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource: resource.clone(),
        }
    }
}

impl TemplateUnit for Group {
    fn name(&self) -> &'static str {
        "group"
    }

    fn path(&self) -> PathBuf {
        ["pkg", "apis", &self.resource.group, "group.go"].iter().collect()
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(GROUP_TEMPLATE, &[("GROUP", &self.resource.group)]))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}

// ── addtoscheme_{group}_{version}.go ──────────────────────────────────────────

const ADD_TO_SCHEME_TEMPLATE: &str = r#"package apis

import (
	"{{REPO}}/pkg/apis/{{GROUP}}/{{VERSION}}"
)

func init() {
	// Register the types with the Scheme so the components can map objects to GroupVersionKinds and back
	AddToSchemes = append(AddToSchemes, {{VERSION}}.SchemeBuilder.AddToScheme)
}
"#;

/// `addtoscheme_{group}_{version}.go`: appends the version's SchemeBuilder
/// to the project-wide list.
pub struct AddToScheme {
    resource: Resource,
    repo: String,
}

impl AddToScheme {
    pub fn new(resource: &Resource, repo: &str) -> Self {
        Self {
            resource: resource.clone(),
            repo: repo.to_string(),
        }
    }
}

impl TemplateUnit for AddToScheme {
    fn name(&self) -> &'static str {
        "add-to-scheme"
    }

    fn path(&self) -> PathBuf {
        ["pkg", "apis"].iter().collect::<PathBuf>().join(format!(
            "addtoscheme_{}_{}.go",
            self.resource.group, self.resource.version
        ))
    }

    fn render(&self) -> Result<String, ScaffoldError> {
        Ok(expand(
            ADD_TO_SCHEME_TEMPLATE,
            &[
                ("REPO", &self.repo),
                ("GROUP", &self.resource.group),
                ("VERSION", &self.resource.version),
            ],
        ))
    }

    fn prepend_boilerplate(&self) -> bool {
        true
    }
}
