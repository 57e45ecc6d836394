//! Element record loading
//!
//! Reads the input JSON document and extracts the ordered element records
//! found under its `elements` key. Any load failure is fatal: the pipeline
//! never emits partial output from a document it could not fully parse.

use crate::errors::PipelineError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One chemical element as it appears in the input document.
///
/// All fields are required. A record missing `number` or `name` fails the
/// whole load; absent values are never passed through into an output file.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementRecord {
    /// Unique, stable identifier, also the output file name
    pub number: u32,
    pub name: String,
    /// Short symbol (e.g. "H"), used only in diagnostics
    pub symbol: String,
    pub summary: String,
    pub atomic_mass: f64,
    pub period: u32,
}

#[derive(Debug, Deserialize)]
struct ElementsFile {
    elements: Vec<ElementRecord>,
}

/// Load the ordered element records from the document at `path`.
///
/// Records are returned in file order. `number` uniqueness is relied on,
/// not enforced; a duplicate silently overwrites its predecessor's output
/// file downstream.
pub async fn load_elements(path: &Path) -> Result<Vec<ElementRecord>, PipelineError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| PipelineError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let file: ElementsFile =
        serde_json::from_slice(&bytes).map_err(|e| PipelineError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    if file.elements.is_empty() {
        return Err(PipelineError::EmptyElements);
    }

    debug!(
        path = %path.display(),
        count = file.elements.len(),
        "Element file loaded"
    );

    Ok(file.elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_elements(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_preserves_order() {
        let file = write_elements(
            r#"{"elements": [
                {"number": 1, "name": "Hydrogen", "symbol": "H", "summary": "First element", "atomic_mass": 1.008, "period": 1},
                {"number": 2, "name": "Helium", "symbol": "He", "summary": "Noble gas", "atomic_mass": 4.0026, "period": 1},
                {"number": 3, "name": "Lithium", "symbol": "Li", "summary": "Alkali metal", "atomic_mass": 6.94, "period": 2}
            ]}"#,
        );

        let elements = load_elements(file.path()).await.unwrap();
        assert_eq!(elements.len(), 3);
        let names: Vec<&str> = elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Hydrogen", "Helium", "Lithium"]);
        assert_eq!(elements[1].number, 2);
        assert_eq!(elements[2].period, 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let err = load_elements(Path::new("/nonexistent/elements.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_fatal() {
        let file = write_elements("{not json");
        let err = load_elements(file.path()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }

    #[tokio::test]
    async fn test_missing_elements_key_is_fatal() {
        let file = write_elements(r#"{"items": []}"#);
        let err = load_elements(file.path()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }

    #[tokio::test]
    async fn test_empty_elements_is_fatal() {
        let file = write_elements(r#"{"elements": []}"#);
        let err = load_elements(file.path()).await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyElements));
    }

    // Records with missing required fields are rejected at the load
    // boundary, never written out with absent values.
    #[tokio::test]
    async fn test_record_missing_name_is_fatal() {
        let file = write_elements(
            r#"{"elements": [
                {"number": 1, "symbol": "H", "summary": "First element", "atomic_mass": 1.008, "period": 1}
            ]}"#,
        );
        let err = load_elements(file.path()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }
}
