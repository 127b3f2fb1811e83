//! Document-stream pipeline: composable transforms over an ordered sequence
//! of parsed YAML documents.
//!
//! A [`DocumentFilter`] consumes a document sequence and produces a new one,
//! so filters can be chained (read → transform → write). Order is always
//! preserved and documents carry no uniqueness constraint — de-duplication,
//! if wanted, is a consumer concern.

pub mod error;
pub mod generator;

pub use error::PipelineError;
pub use generator::{CodeGenerator, GeneratorFilter};

use serde::Deserialize;

/// One parsed YAML document.
pub type Document = serde_yaml::Value;

/// A composable transform over an ordered document sequence.
pub trait DocumentFilter {
    fn filter(&self, input: Vec<Document>) -> Result<Vec<Document>, PipelineError>;
}

/// Parse a multi-document YAML stream.
///
/// Empty documents (consecutive separators, trailing `---`) are dropped.
/// `source_name` is used in the error context ("failed to parse ...").
pub fn read_documents(input: &str, source_name: &str) -> Result<Vec<Document>, PipelineError> {
    let mut documents = Vec::new();
    for de in serde_yaml::Deserializer::from_str(input) {
        let doc = Document::deserialize(de).map_err(|e| PipelineError::parse(source_name, e))?;
        if !doc.is_null() {
            documents.push(doc);
        }
    }
    Ok(documents)
}

/// Serialize a document sequence back into one `---`-separated stream.
pub fn write_documents(documents: &[Document]) -> Result<String, PipelineError> {
    let mut out = String::new();
    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            out.push_str("---\n");
        }
        let text =
            serde_yaml::to_string(doc).map_err(|e| PipelineError::parse("document stream", e))?;
        out.push_str(&text);
    }
    Ok(out)
}
