use crate::swagger::SchemaDocument;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Loader for Swagger 2.0 documents.
///
/// Documents may be written in JSON or YAML. Both are first decoded into an
/// order-preserving JSON value so paths, properties and definitions keep the order in
/// which they appear in the file.
///
/// # Example
///
/// ```no_run
/// use swagger_to_js::parser::DocumentParser;
/// use std::path::Path;
///
/// let doc = DocumentParser::parse_file(Path::new("swagger.json")).unwrap();
/// println!("Loaded {} definitions", doc.definitions.len());
/// ```
pub struct DocumentParser;

/// Source format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` files are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

impl DocumentParser {
    /// Reads and parses a document file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid JSON/YAML
    /// - The content does not have the shape of a Swagger document
    pub fn parse_file(path: &Path) -> Result<SchemaDocument> {
        debug!("Parsing document: {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let document = Self::parse_str(&content, DocumentFormat::from_path(path))
            .with_context(|| format!("Failed to parse Swagger document: {}", path.display()))?;

        debug!("Successfully parsed document: {}", path.display());
        Ok(document)
    }

    /// Parses document text in the given format.
    pub fn parse_str(content: &str, format: DocumentFormat) -> Result<SchemaDocument> {
        let value: serde_json::Value = match format {
            DocumentFormat::Json => serde_json::from_str(content).context("Invalid JSON")?,
            DocumentFormat::Yaml => serde_yaml::from_str(content).context("Invalid YAML")?,
        };

        match value.get("swagger").and_then(|v| v.as_str()) {
            Some("2.0") => {}
            Some(other) => warn!("Document declares swagger version {}, expected 2.0", other),
            None => warn!("Document has no 'swagger' version field"),
        }

        serde_json::from_value(value).context("Document does not match the Swagger 2.0 layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Helper function to create a temporary file with content
    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("swagger")), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(
            &temp_dir,
            "swagger.json",
            r#"{
                "swagger": "2.0",
                "basePath": "/api/",
                "paths": { "/pets": { "get": { "operationId": "listPets" } } },
                "definitions": { "Pet": { "type": "object" } }
            }"#,
        );

        let doc = DocumentParser::parse_file(&path).unwrap();

        assert_eq!(doc.base_path, "/api/");
        assert_eq!(doc.paths.len(), 1);
        assert!(doc.definitions.contains_key("Pet"));
    }

    #[test]
    fn test_parse_yaml_keeps_property_order() {
        let yaml = r#"
swagger: "2.0"
definitions:
  Pet:
    type: object
    properties:
      name:
        type: string
      id:
        type: integer
      age:
        type: integer
"#;

        let doc = DocumentParser::parse_str(yaml, DocumentFormat::Yaml).unwrap();
        let names: Vec<_> = doc.definitions["Pet"]
            .properties
            .as_ref()
            .unwrap()
            .keys()
            .cloned()
            .collect();

        assert_eq!(names, vec!["name", "id", "age"]);
    }

    #[test]
    fn test_missing_sections_default() {
        let doc = DocumentParser::parse_str(r#"{ "swagger": "2.0" }"#, DocumentFormat::Json).unwrap();
        assert_eq!(doc.base_path, "");
        assert!(doc.paths.is_empty());
        assert!(doc.definitions.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = DocumentParser::parse_str("{ not json", DocumentFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = DocumentParser::parse_file(Path::new("/nonexistent/swagger.json"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }
}
