//! Resource descriptor: the Group/Version/Kind identity of one API type.
//!
//! Every generated artifact — Go types, registration glue, RBAC YAML, the
//! CRD — is keyed on this descriptor. It is constructed from CLI input,
//! validated exactly once via [`Resource::validate`], then treated as
//! immutable for the rest of the scaffold run.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Group token grammar: all-lowercase alphabetic, nothing else.
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("group regex is valid"));

/// Version token grammar: `v1`, `v1beta1`, `v2alpha3`, ...
///
/// Rejects bare digits (`1`), missing `v` (`1beta1`), leading junk
/// (`a1beta1`), a suffix without its digit (`v1beta`), and stacked suffixes
/// (`v1beta1alpha1`) — the `$` anchor handles the last two.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+(?:(?:alpha|beta)\d+)?$").expect("version regex is valid"));

/// Descriptor for one custom-resource API kind.
///
/// `resource` is the lowercase plural form; when left empty it is derived
/// from `kind` during [`validate`](Resource::validate). `namespaced`
/// selects the CRD scope and client-generation markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// API group, e.g. `crew`. Lowercase alphabetic.
    pub group: String,

    /// API version, e.g. `v1`, `v1beta1`, `v2alpha1`.
    pub version: String,

    /// Kind, e.g. `FirstMate`. First character must be uppercase; interior
    /// casing is deliberately not checked (a `Firstmate` typo passes).
    pub kind: String,

    /// Plural resource name, e.g. `firstmates`. Defaulted from `kind` when
    /// empty; an explicitly supplied value is never overwritten.
    pub resource: String,

    /// Whether the resource is namespace-scoped (vs cluster-scoped).
    pub namespaced: bool,

    /// Whether to scaffold an example reconcile body for this resource.
    /// Recorded on the descriptor for controller scaffolding; none of the
    /// API-layer units read it.
    pub create_example_reconcile_body: bool,
}

impl Resource {
    /// Validate the descriptor and fill the plural default.
    ///
    /// Idempotent and pure apart from defaulting `resource`: no I/O, and a
    /// second call on an already-valid descriptor changes nothing.
    pub fn validate(&mut self) -> Result<(), DomainError> {
        if self.group.is_empty() {
            return Err(DomainError::validation("group", "group cannot be empty"));
        }
        if !GROUP_RE.is_match(&self.group) {
            return Err(DomainError::validation(
                "group",
                format!("'{}' must be lowercase alphabetic characters only", self.group),
            ));
        }

        if self.version.is_empty() {
            return Err(DomainError::validation("version", "version cannot be empty"));
        }
        if !VERSION_RE.is_match(&self.version) {
            return Err(DomainError::validation(
                "version",
                format!(
                    "'{}' must match v<digits> with an optional alpha<digits> or beta<digits> suffix",
                    self.version
                ),
            ));
        }

        if self.kind.is_empty() {
            return Err(DomainError::validation("kind", "kind cannot be empty"));
        }
        // Only the first character is checked; interior casing violations
        // (e.g. "Firstmate") cannot be detected and are accepted.
        let first = self.kind.chars().next().unwrap_or(' ');
        if !first.is_uppercase() {
            return Err(DomainError::validation(
                "kind",
                format!("'{}' must start with an uppercase letter", self.kind),
            ));
        }

        if self.resource.is_empty() {
            self.resource = pluralize(&self.kind.to_lowercase());
        }

        Ok(())
    }

    /// Lowercased kind, used in generated file names.
    pub fn kind_lower(&self) -> String {
        self.kind.to_lowercase()
    }

    /// Fully qualified group, e.g. `crew.example.com`.
    pub fn qualified_group(&self, domain: &str) -> String {
        format!("{}.{}", self.group, domain)
    }

    /// CRD scope string as it appears in the generated YAML.
    pub fn scope(&self) -> &'static str {
        if self.namespaced { "Namespaced" } else { "Cluster" }
    }
}

/// English pluralization for the default resource name.
///
/// Ordered rule list, first match wins:
/// 1. uncountables (`fish`) pass through unchanged
/// 2. `...man` -> `...men`
/// 3. `sh` / `ch` / `ss` / `x` endings append `es`
/// 4. consonant + `y` drops the `y` and appends `ies`
/// 5. default appends `s`
fn pluralize(word: &str) -> String {
    if word.ends_with("fish") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("man") {
        return format!("{stem}men");
    }
    if word.ends_with("sh") || word.ends_with("ch") || word.ends_with("ss") || word.ends_with('x') {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let penultimate = stem.chars().last().unwrap_or(' ');
        if penultimate.is_ascii_alphabetic() && !"aeiou".contains(penultimate) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(group: &str, version: &str, kind: &str) -> Resource {
        Resource {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            ..Resource::default()
        }
    }

    // ── group ─────────────────────────────────────────────────────────────────

    #[test]
    fn valid_resource_passes() {
        assert!(resource("crew", "v1", "FirstMate").validate().is_ok());
    }

    #[test]
    fn missing_group_fails() {
        let err = resource("", "v1", "FirstMate").validate().unwrap_err();
        assert_eq!(err.field(), "group");
    }

    #[test]
    fn uppercase_group_fails() {
        assert!(resource("Crew", "v1", "FirstMate").validate().is_err());
    }

    #[test]
    fn non_alpha_group_fails() {
        assert!(resource("crew1", "v1", "FirstMate").validate().is_err());
        assert!(resource("crew-api", "v1", "FirstMate").validate().is_err());
    }

    // ── version ───────────────────────────────────────────────────────────────

    #[test]
    fn missing_version_fails() {
        let err = resource("crew", "", "FirstMate").validate().unwrap_err();
        assert_eq!(err.field(), "version");
    }

    #[test]
    fn valid_versions_pass() {
        for v in ["v1", "v1beta1", "v2alpha3", "v10", "v1alpha12"] {
            assert!(resource("crew", v, "FirstMate").validate().is_ok(), "{v}");
        }
    }

    #[test]
    fn malformed_versions_fail() {
        for v in ["1", "1beta1", "a1beta1", "v1beta", "v1beta1alpha1", "v1alpha", "vbeta1"] {
            assert!(resource("crew", v, "FirstMate").validate().is_err(), "{v}");
        }
    }

    // ── kind ──────────────────────────────────────────────────────────────────

    #[test]
    fn missing_kind_fails() {
        let err = resource("crew", "v1", "").validate().unwrap_err();
        assert_eq!(err.field(), "kind");
    }

    #[test]
    fn kind_first_character_must_be_uppercase() {
        assert!(resource("crew", "v1", "FirstMate").validate().is_ok());
        // Interior casing is not checked: this one slips through.
        assert!(resource("crew", "v1", "Firstmate").validate().is_ok());
        assert!(resource("crew", "v1", "firstMate").validate().is_err());
        assert!(resource("crew", "v1", "firstmate").validate().is_err());
    }

    // ── plural defaulting ─────────────────────────────────────────────────────

    #[test]
    fn plural_defaults_from_kind() {
        let mut r = resource("crew", "v1", "FirstMate");
        r.validate().unwrap();
        assert_eq!(r.resource, "firstmates");

        let mut r = resource("crew", "v1", "Fish");
        r.validate().unwrap();
        assert_eq!(r.resource, "fish");

        let mut r = resource("crew", "v1", "Helmswoman");
        r.validate().unwrap();
        assert_eq!(r.resource, "helmswomen");
    }

    #[test]
    fn plural_suffix_rules() {
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("bench"), "benches");
        assert_eq!(pluralize("boss"), "bosses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("company"), "companies");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("kraken"), "krakens");
    }

    #[test]
    fn explicit_resource_is_kept() {
        let mut r = resource("crew", "v1", "FirstMate");
        r.resource = "myresource".into();
        r.validate().unwrap();
        assert_eq!(r.resource, "myresource");
    }

    #[test]
    fn validate_is_idempotent() {
        let mut r = resource("crew", "v1", "FirstMate");
        r.validate().unwrap();
        let snapshot = r.clone();
        r.validate().unwrap();
        assert_eq!(r, snapshot);
    }

    // ── helpers ───────────────────────────────────────────────────────────────

    #[test]
    fn scope_tracks_namespaced_flag() {
        let mut r = resource("creatures", "v2alpha1", "Kraken");
        assert_eq!(r.scope(), "Cluster");
        r.namespaced = true;
        assert_eq!(r.scope(), "Namespaced");
    }

    #[test]
    fn qualified_group_joins_domain() {
        let r = resource("crew", "v1", "FirstMate");
        assert_eq!(r.qualified_group("example.com"), "crew.example.com");
    }
}
