//! The generator-invoking filter: runs the external CRD/RBAC/webhook
//! emitter and splices its output into the document stream.

use tracing::{debug, instrument};

use crate::domain::Configuration;

use super::error::PipelineError;
use super::{Document, DocumentFilter, read_documents};

/// Narrow port over the external code generator.
///
/// One method: run with the given arguments, return captured stdout. The
/// invocation is synchronous, happens exactly once per call, and is never
/// retried. Implementations pass the child's stderr through to the host
/// process for visibility and enforce a bounded deadline
/// (`opsmith_adapters::ControllerGenProcess` in production). Defining this
/// as a trait lets an in-process generator stand in where the external
/// binary is unavailable, without changing the merge contract below.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator {
    fn generate(&self, args: &[String]) -> Result<Vec<u8>, PipelineError>;
}

/// Filter that runs the external generator and prepends its documents to
/// the input stream.
///
/// Generated documents come first, in their emitted order, followed by the
/// input documents in their original order. No de-duplication or
/// merge-by-key is attempted — consumers wanting one canonical document per
/// (kind, namespace, name) must de-duplicate themselves.
pub struct GeneratorFilter<'a> {
    config: &'a Configuration,
    generator: &'a dyn CodeGenerator,
}

impl<'a> GeneratorFilter<'a> {
    pub fn new(config: &'a Configuration, generator: &'a dyn CodeGenerator) -> Self {
        Self { config, generator }
    }

    /// Argument list for the external generator, assembled from the
    /// configuration toggles.
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "paths=./...".to_string(),
            "crd".to_string(),
            "output:crd:stdout".to_string(),
        ];
        if !self.config.disable_create_rbac {
            args.push("output:rbac:stdout".to_string());
            args.push(format!("rbac:roleName={}-manager-role", self.config.name));
        }
        if self.config.enable_webhooks {
            args.push("webhook".to_string());
            args.push("output:webhook:stdout".to_string());
        }
        args
    }
}

impl DocumentFilter for GeneratorFilter<'_> {
    #[instrument(skip_all, fields(project = %self.config.name))]
    fn filter(&self, input: Vec<Document>) -> Result<Vec<Document>, PipelineError> {
        let args = self.args();
        debug!(?args, "invoking code generator");

        let stdout = self.generator.generate(&args)?;
        let text = String::from_utf8(stdout)
            .map_err(|e| PipelineError::parse("controller-gen output", e))?;

        let mut documents = read_documents(&text, "controller-gen output")?;
        debug!(generated = documents.len(), existing = input.len(), "merging streams");

        documents.extend(input);
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::read_documents;

    fn config() -> Configuration {
        Configuration::new("testproject", "example/image:v1")
    }

    #[test]
    fn base_args_request_crd_and_rbac() {
        let config = config();
        let generator = MockCodeGenerator::new();
        let filter = GeneratorFilter::new(&config, &generator);
        assert_eq!(
            filter.args(),
            [
                "paths=./...",
                "crd",
                "output:crd:stdout",
                "output:rbac:stdout",
                "rbac:roleName=testproject-manager-role",
            ]
        );
    }

    #[test]
    fn toggles_shape_the_argument_list() {
        let mut config = config();
        config.disable_create_rbac = true;
        config.enable_webhooks = true;
        let generator = MockCodeGenerator::new();
        let filter = GeneratorFilter::new(&config, &generator);
        assert_eq!(
            filter.args(),
            ["paths=./...", "crd", "output:crd:stdout", "webhook", "output:webhook:stdout"]
        );
    }

    #[test]
    fn generated_documents_precede_input() {
        let config = config();
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok(b"gen: one\n---\ngen: two\n".to_vec()));

        let input = read_documents("existing: a\n---\nexisting: b\n---\nexisting: c\n", "input")
            .unwrap();
        let filter = GeneratorFilter::new(&config, &generator);
        let merged = filter.filter(input).unwrap();

        assert_eq!(merged.len(), 5);
        assert_eq!(merged[0]["gen"], "one");
        assert_eq!(merged[1]["gen"], "two");
        assert_eq!(merged[2]["existing"], "a");
        assert_eq!(merged[4]["existing"], "c");
    }

    #[test]
    fn generator_failure_yields_no_documents() {
        let config = config();
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(1).returning(|_| {
            Err(PipelineError::ExternalTool {
                tool: "controller-gen".into(),
                reason: "exited with status 1".into(),
                source: None,
            })
        });

        let input = read_documents("existing: a\n", "input").unwrap();
        let filter = GeneratorFilter::new(&config, &generator);
        let err = filter.filter(input).unwrap_err();
        assert!(matches!(err, PipelineError::ExternalTool { .. }));
        assert!(err.to_string().contains("failed to run controller-gen"));
    }

    #[test]
    fn malformed_generator_output_is_a_parse_error() {
        let config = config();
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(b"a: [unclosed".to_vec()));

        let filter = GeneratorFilter::new(&config, &generator);
        let err = filter.filter(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("failed to parse controller-gen output"));
    }
}
