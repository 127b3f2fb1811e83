//! Concrete template units.
//!
//! Each unit here is a body of literal template text with `{{TOKEN}}`
//! placeholders, expanded by [`expand`] against values taken from the
//! closed-over [`crate::domain::Resource`] / [`crate::domain::Configuration`].
//! Expansion is plain token replacement: templates carry no conditionals,
//! loops or escaping — where output varies structurally (namespaced vs
//! cluster-scoped), the unit computes the varying fragment in Rust and
//! substitutes it as a token.

pub mod api;
pub mod crd;
pub mod project;
pub mod rbac;

/// Replace `{{KEY}}` placeholders with their values.
///
/// Unknown placeholders are left as-is, which makes a forgotten variable
/// visible in golden tests instead of silently producing empty output.
pub(crate) fn expand(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}
