use thiserror::Error;

/// Result type alias for schema compilation
pub type Result<T> = std::result::Result<T, CompileError>;

/// Fatal schema-authoring defects. Any of these aborts the whole run before output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// URL placeholders and required path parameters of one operation disagree
    #[error(
        "Path parameter mismatch in operation '{operation_id}' ({path}): placeholders {} vs parameters {}",
        brace_set(.placeholders),
        brace_set(.parameters)
    )]
    PathParameterMismatch {
        operation_id: String,
        path: String,
        placeholders: Vec<String>,
        parameters: Vec<String>,
    },

    /// Two or more operations share an identifier
    #[error("Duplicate operationId: {}", .operation_ids.join(", "))]
    DuplicateOperationId { operation_ids: Vec<String> },

    /// Definition names that differ only by case would map to the same file on
    /// case-insensitive storage
    #[error("Definition names collide case-insensitively: {}", collision_list(.collisions))]
    DefinitionNameCollision { collisions: Vec<(String, String)> },

    /// A path parameter shadows one of the generated function's own arguments
    #[error("Path parameter '{name}' of operation '{operation_id}' clashes with a generated argument name")]
    ReservedParameterName { operation_id: String, name: String },

    /// A path parameter name is not a valid argument name in the generated source
    #[error("Path parameter '{name}' of operation '{operation_id}' is not a valid identifier")]
    InvalidParameterName { operation_id: String, name: String },
}

fn brace_set(names: &[String]) -> String {
    let inner: Vec<String> = names.iter().map(|n| format!("{{{}}}", n)).collect();
    if inner.is_empty() {
        "{}".to_string()
    } else {
        inner.join(", ")
    }
}

fn collision_list(collisions: &[(String, String)]) -> String {
    collisions
        .iter()
        .map(|(existing, new)| format!("'{}' and '{}'", existing, new))
        .collect::<Vec<_>>()
        .join(", ")
}
