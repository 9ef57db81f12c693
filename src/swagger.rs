//! Swagger 2.0 document model.
//!
//! Only the parts of the Swagger grammar that drive code generation are modelled here:
//! paths with their operations, operation parameters, the `200` response and the
//! `definitions` section. Everything else in the document is ignored during decoding.
//!
//! The model is read-only once parsed. [`SchemaDocument::operations`] flattens the nested
//! `paths` map into a list of [`OperationSpec`] values with their method and full path filled in.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Prefix every local definition reference starts with.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A parsed Swagger 2.0 document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Base path prepended to every path template (e.g. "/v1/")
    #[serde(rename = "basePath", default)]
    pub base_path: String,
    /// Path template -> raw path item (method -> operation, plus other keys)
    #[serde(default)]
    pub paths: IndexMap<String, IndexMap<String, serde_json::Value>>,
    /// Definition name -> type
    #[serde(default)]
    pub definitions: IndexMap<String, TypeSpec>,
}

/// HTTP methods that may appear as keys of a Swagger path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Parse a path item key into a method. Returns `None` for keys that are not operations.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "put" => Some(HttpMethod::Put),
            "post" => Some(HttpMethod::Post),
            "delete" => Some(HttpMethod::Delete),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "patch" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    /// Uppercased verb as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// One API operation, i.e. one (path, method) pair.
///
/// `method` and `path` are not part of the Swagger operation object; they are filled in
/// from the enclosing path item by [`SchemaDocument::operations`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Globally unique identifier, used as function and file name
    #[serde(rename = "operationId")]
    pub operation_id: String,
    #[serde(skip)]
    pub method: HttpMethod,
    /// Path template joined with the document base path
    #[serde(skip)]
    pub path: String,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Status code -> response. Only "200" is consumed.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OperationSpec {
    /// Schema declared for the successful ("200") response, if any
    pub fn success_schema(&self) -> Option<&TypeSpec> {
        self.responses.get("200").and_then(|r| r.schema.as_ref())
    }

    /// Whether the operation carries neither a summary nor a description
    pub fn is_undocumented(&self) -> bool {
        let missing = |text: &Option<String>| text.as_deref().map_or(true, str::is_empty);
        missing(&self.summary) && missing(&self.description)
    }
}

/// Where a parameter is carried in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    /// `{name}` segment of the URL template
    Path,
    /// Query string entry
    Query,
    /// HTTP header (not used by the generated client)
    Header,
    /// Form field of the request payload
    FormData,
    /// The request payload itself
    Body,
    /// Any other location, or none at all (e.g. a `$ref` parameter); ignored
    #[default]
    #[serde(other)]
    Other,
}

/// One operation parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: ParameterLocation,
    /// Link to a shared parameter; such entries carry no name or location and are ignored
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Inline primitive type (non-body parameters)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    /// Element type when the inline type is "array"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<TypeSpec>>,
    /// Nested schema (body parameters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TypeSpec>,
}

impl ParameterSpec {
    /// The declared type of this parameter, preferring `schema` over the inline `type`.
    ///
    /// Returns `None` when the parameter declares neither, in which case the generated
    /// argument carries no annotation.
    pub fn declared_type(&self) -> Option<TypeSpec> {
        if let Some(schema) = &self.schema {
            return Some(schema.clone());
        }
        self.param_type.as_ref().map(|kind| TypeSpec {
            kind: Some(kind.clone()),
            items: self.items.clone(),
            ..TypeSpec::default()
        })
    }

    pub fn is_required_path(&self) -> bool {
        self.location == ParameterLocation::Path && self.required
    }

    pub fn is_payload(&self) -> bool {
        matches!(self.location, ParameterLocation::FormData | ParameterLocation::Body)
    }
}

/// One entry of an operation's `responses` map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TypeSpec>,
}

/// Recursive structural type node as written in the document.
///
/// The raw fields are kept as decoded; [`TypeSpec::shape`] classifies a node into one of
/// the variants the translator understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, TypeSpec>>,
    #[serde(
        default,
        deserialize_with = "required_names",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<TypeSpec>>,
}

/// Accepts the `required` name list, tolerating the boolean form some documents put on
/// object schemas by mistake (treated as "no required properties").
fn required_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Required {
        Names(Vec<String>),
        Flag(bool),
    }

    Ok(match Required::deserialize(deserializer)? {
        Required::Names(names) => names,
        Required::Flag(_) => Vec::new(),
    })
}

/// Classified view of a [`TypeSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Link to a local definition, by name
    Reference(&'a str),
    /// Object; `None` properties means an open shape
    Object {
        properties: Option<&'a IndexMap<String, TypeSpec>>,
        required: &'a [String],
    },
    Array(Option<&'a TypeSpec>),
    Primitive(Primitive),
}

/// Primitive kinds. Anything unrecognised is `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Any,
}

impl TypeSpec {
    /// Shorthand for a `$ref` to a local definition
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("{}{}", DEFINITIONS_PREFIX, name)),
            ..Self::default()
        }
    }

    /// Shorthand for a node with only `type` set
    pub fn of_kind(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            ..Self::default()
        }
    }

    /// Name of the referenced definition, if this node is a local `$ref`.
    ///
    /// References that do not point into `#/definitions` are not links; the node is then
    /// classified by its `type` like any other.
    pub fn referenced_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .and_then(|r| r.strip_prefix(DEFINITIONS_PREFIX))
    }

    pub fn shape(&self) -> Shape<'_> {
        if let Some(name) = self.referenced_name() {
            return Shape::Reference(name);
        }
        match self.kind.as_deref() {
            Some("object") => Shape::Object {
                properties: self.properties.as_ref(),
                required: &self.required,
            },
            Some("array") => Shape::Array(self.items.as_deref()),
            Some("string") => Shape::Primitive(Primitive::String),
            Some("integer") | Some("float") | Some("int64") => Shape::Primitive(Primitive::Number),
            Some("boolean") => Shape::Primitive(Primitive::Boolean),
            _ => Shape::Primitive(Primitive::Any),
        }
    }
}

impl SchemaDocument {
    /// Base path with a single trailing slash removed
    pub fn normalized_base_path(&self) -> &str {
        self.base_path.strip_suffix('/').unwrap_or(&self.base_path)
    }

    /// Flatten `paths` into one [`OperationSpec`] per (path, method) pair, in document order.
    ///
    /// Path item keys that are not HTTP methods (path-level `parameters`, `$ref`, vendor
    /// extensions) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an operation object cannot be decoded, e.g. when it lacks an
    /// `operationId`.
    pub fn operations(&self) -> Result<Vec<OperationSpec>> {
        let base_path = self.normalized_base_path();
        let mut operations = Vec::new();

        for (template, item) in &self.paths {
            for (key, value) in item {
                let Some(method) = HttpMethod::from_key(key) else {
                    debug!("Skipping non-operation key '{}' under path {}", key, template);
                    continue;
                };

                let mut operation: OperationSpec = serde_json::from_value(value.clone())
                    .with_context(|| {
                        format!("Invalid operation {} {}", method.as_str(), template)
                    })?;
                for reference in operation.parameters.iter().filter_map(|p| p.reference.as_ref()) {
                    debug!(
                        "Ignoring parameter reference {} in operation {}",
                        reference, operation.operation_id
                    );
                }
                operation.method = method;
                operation.path = format!("{}{}", base_path, template);
                operations.push(operation);
            }
        }

        debug!("Flattened {} operations", operations.len());
        Ok(operations)
    }
}
