//! Compilation of a single API operation into a client function.
//!
//! For an operation such as `GET /v1/pets/{petId}` with a query parameter, the compiled
//! unit corresponds to:
//!
//! ```text
//! import makeQuery from '../helpers/makeQuery';
//! import AjaxPipe from '../helpers/AjaxPipe';
//!
//! export type Response = any;
//!
//! export default function getPet(hostname: string, petId: number, query: Object) {
//!   return new AjaxPipe({
//!     method: 'GET',
//!     url: hostname + (`/v1/pets/${petId}` + makeQuery(query))
//!   });
//! }
//! ```
//!
//! Argument order is fixed: `hostname`, the required path parameters in the order they are
//! declared in `parameters`, then `query` and `data` when the operation has query or
//! payload parameters.

use crate::ast::{
    CompiledUnit, Expr, FunctionDecl, Import, Item, Param, Program, Stmt, TemplatePart,
    TypeAlias, TypeExpr, UnitKind,
};
use crate::error::{CompileError, Result};
use crate::renderer::is_identifier;
use crate::swagger::{OperationSpec, ParameterLocation, ParameterSpec};
use crate::type_translator::{dedup_names, translate_into};
use log::{debug, warn};
use std::collections::{BTreeSet, HashSet};

pub const HOSTNAME_ARG: &str = "hostname";
pub const QUERY_ARG: &str = "query";
pub const DATA_ARG: &str = "data";

/// Request wrapper constructor every operation returns
pub const REQUEST_WRAPPER: &str = "AjaxPipe";
/// Query-string serializer, imported only when a query bag exists
pub const QUERY_HELPER: &str = "makeQuery";
/// Name of the per-operation response type alias
pub const RESPONSE_ALIAS: &str = "Response";

/// Words a strict-mode function cannot take as an argument name
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in", "instanceof",
    "interface", "let", "new", "null", "package", "private", "protected", "public", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void",
    "while", "with", "yield",
];

const HELPERS_DIR: &str = "../helpers/";
const TYPES_DIR: &str = "../types/";

/// A lexical piece of a URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Literal(String),
    Placeholder(String),
}

/// Split a path template on `{` and `}` into literal and placeholder segments.
///
/// Delimiters are purely lexical: `{` switches to placeholder mode and `}` back to literal
/// mode, without any nesting. Empty literal runs are dropped.
pub fn parse_path_template(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_placeholder = false;

    for c in path.chars() {
        match c {
            '{' | '}' => {
                flush_segment(&mut segments, &mut current, in_placeholder);
                in_placeholder = c == '{';
            }
            _ => current.push(c),
        }
    }
    flush_segment(&mut segments, &mut current, in_placeholder);

    segments
}

fn flush_segment(segments: &mut Vec<PathSegment>, current: &mut String, in_placeholder: bool) {
    let text = std::mem::take(current);
    if in_placeholder {
        segments.push(PathSegment::Placeholder(text));
    } else if !text.is_empty() {
        segments.push(PathSegment::Literal(text));
    }
}

/// Placeholder names of a path template, in order of first appearance.
pub fn placeholder_names(path: &str) -> Vec<String> {
    let names = parse_path_template(path)
        .into_iter()
        .filter_map(|segment| match segment {
            PathSegment::Placeholder(name) => Some(name),
            PathSegment::Literal(_) => None,
        })
        .collect();
    dedup_names(names)
}

/// Check that the URL placeholders and the required path parameters name the same set.
///
/// # Errors
///
/// Returns [`CompileError::PathParameterMismatch`] carrying both sets when they differ.
pub fn validate_path_parameters(operation: &OperationSpec) -> Result<()> {
    let placeholders = placeholder_names(&operation.path);
    let parameters = dedup_names(
        operation
            .parameters
            .iter()
            .filter(|p| p.is_required_path())
            .map(|p| p.name.clone())
            .collect(),
    );

    let placeholder_set: BTreeSet<&String> = placeholders.iter().collect();
    let parameter_set: BTreeSet<&String> = parameters.iter().collect();
    if placeholder_set != parameter_set {
        return Err(CompileError::PathParameterMismatch {
            operation_id: operation.operation_id.clone(),
            path: operation.path.clone(),
            placeholders,
            parameters,
        });
    }

    Ok(())
}

/// Compile one operation into a function unit.
///
/// # Errors
///
/// Fails before building anything if the path parameters are inconsistent
/// ([`CompileError::PathParameterMismatch`]), a path parameter is not usable as an argument
/// name ([`CompileError::InvalidParameterName`]) or it would shadow one of the generated
/// arguments ([`CompileError::ReservedParameterName`]).
pub fn compile_operation(operation: &OperationSpec) -> Result<CompiledUnit> {
    debug!(
        "Compiling operation {} ({} {})",
        operation.operation_id,
        operation.method.as_str(),
        operation.path
    );

    validate_path_parameters(operation)?;

    let has_query = operation
        .parameters
        .iter()
        .any(|p| p.location == ParameterLocation::Query);
    let payload = payload_parameter(operation);
    check_path_parameter_names(operation, has_query, payload.is_some())?;

    let mut type_deps = Vec::new();

    // Signature
    let mut params = vec![Param::new(HOSTNAME_ARG, Some(TypeExpr::String))];
    let mut seen = HashSet::new();
    for param in operation.parameters.iter().filter(|p| p.is_required_path()) {
        if !seen.insert(param.name.as_str()) {
            warn!(
                "Operation {} declares path parameter '{}' more than once; only the first is used",
                operation.operation_id, param.name
            );
            continue;
        }
        let ty = param
            .declared_type()
            .map(|spec| translate_into(&spec, &mut type_deps));
        params.push(Param::new(&param.name, ty));
    }
    if has_query {
        params.push(Param::new(QUERY_ARG, Some(TypeExpr::Object)));
    }
    if let Some(payload) = payload {
        let ty = payload
            .declared_type()
            .map(|spec| translate_into(&spec, &mut type_deps));
        params.push(Param::new(DATA_ARG, ty));
    }

    // Body
    let mut descriptor = vec![
        ("method".to_string(), Expr::Str(operation.method.as_str().to_string())),
        ("url".to_string(), url_expression(&operation.path, has_query)),
    ];
    if payload.is_some() {
        descriptor.push((DATA_ARG.to_string(), Expr::ident(DATA_ARG)));
    }
    let body = vec![Stmt::Return(Expr::New {
        callee: REQUEST_WRAPPER.to_string(),
        args: vec![Expr::Object(descriptor)],
    })];

    let mut response_ty = match operation.success_schema() {
        Some(schema) => translate_into(schema, &mut type_deps),
        None => TypeExpr::Any,
    };

    // Imports
    let type_imports = dedup_names(type_deps);
    let response_local = response_import_name(&type_imports);
    if let Some(local) = &response_local {
        debug!(
            "Importing definition {} as {} in operation {}",
            RESPONSE_ALIAS, local, operation.operation_id
        );
        for ty in params.iter_mut().filter_map(|p| p.ty.as_mut()) {
            ty.rename_links(RESPONSE_ALIAS, local);
        }
        response_ty.rename_links(RESPONSE_ALIAS, local);
    }
    let mut items = Vec::new();
    if has_query {
        items.push(Item::Import(helper_import(QUERY_HELPER)));
    }
    items.push(Item::Import(helper_import(REQUEST_WRAPPER)));
    items.extend(type_imports.iter().map(|name| {
        let local = match &response_local {
            Some(local) if name == RESPONSE_ALIAS => local.clone(),
            _ => name.clone(),
        };
        Item::Import(Import::Type {
            name: name.clone(),
            local,
            source: format!("{}{}", TYPES_DIR, name),
        })
    }));
    items.push(Item::TypeAlias(TypeAlias {
        name: RESPONSE_ALIAS.to_string(),
        ty: response_ty,
        exported: true,
    }));
    items.push(Item::Function(FunctionDecl {
        name: operation.operation_id.clone(),
        params,
        body,
    }));

    Ok(CompiledUnit {
        name: operation.operation_id.clone(),
        kind: UnitKind::Operation,
        program: Program { items },
        type_imports,
    })
}

/// First `formData`/`body` parameter. Any further ones are ignored with a warning.
fn payload_parameter(operation: &OperationSpec) -> Option<&ParameterSpec> {
    let mut payloads = operation.parameters.iter().filter(|p| p.is_payload());
    let first = payloads.next()?;
    for extra in payloads {
        warn!(
            "Operation {} declares more than one body/formData parameter; '{}' is ignored in favour of '{}'",
            operation.operation_id, extra.name, first.name
        );
    }
    Some(first)
}

/// Local name for an imported `Response` definition, which would otherwise clash with the
/// response alias. `None` when no such definition is imported.
fn response_import_name(type_imports: &[String]) -> Option<String> {
    if !type_imports.iter().any(|name| name == RESPONSE_ALIAS) {
        return None;
    }
    let taken = |candidate: &str| {
        type_imports.iter().any(|name| name == candidate)
            || candidate == REQUEST_WRAPPER
            || candidate == QUERY_HELPER
    };
    let mut candidate = format!("{}Type", RESPONSE_ALIAS);
    let mut suffix = 1;
    while taken(&candidate) {
        suffix += 1;
        candidate = format!("{}Type{}", RESPONSE_ALIAS, suffix);
    }
    Some(candidate)
}

fn check_path_parameter_names(
    operation: &OperationSpec,
    has_query: bool,
    has_payload: bool,
) -> Result<()> {
    for param in operation.parameters.iter().filter(|p| p.is_required_path()) {
        let name = param.name.as_str();
        if !is_identifier(name) || RESERVED_WORDS.contains(&name) {
            return Err(CompileError::InvalidParameterName {
                operation_id: operation.operation_id.clone(),
                name: param.name.clone(),
            });
        }
        if name == HOSTNAME_ARG
            || name == REQUEST_WRAPPER
            || (has_query && (name == QUERY_ARG || name == QUERY_HELPER))
            || (has_payload && name == DATA_ARG)
        {
            return Err(CompileError::ReservedParameterName {
                operation_id: operation.operation_id.clone(),
                name: param.name.clone(),
            });
        }
    }
    Ok(())
}

/// `hostname + <template>`, or `hostname + (<template> + makeQuery(query))` with a query bag.
fn url_expression(path: &str, has_query: bool) -> Expr {
    let parts = parse_path_template(path)
        .into_iter()
        .map(|segment| match segment {
            PathSegment::Literal(text) => TemplatePart::Text(text),
            PathSegment::Placeholder(name) => TemplatePart::Expr(Expr::Ident(name)),
        })
        .collect();
    let template = Expr::Template(parts);

    let path_expr = if has_query {
        Expr::concat(
            template,
            Expr::Call {
                callee: QUERY_HELPER.to_string(),
                args: vec![Expr::ident(QUERY_ARG)],
            },
        )
    } else {
        template
    };

    Expr::concat(Expr::ident(HOSTNAME_ARG), path_expr)
}

fn helper_import(name: &str) -> Import {
    Import::Default {
        local: name.to_string(),
        source: format!("{}{}", HELPERS_DIR, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::HttpMethod;
    use serde_json::json;

    fn operation(method: HttpMethod, path: &str, value: serde_json::Value) -> OperationSpec {
        let mut op: OperationSpec = serde_json::from_value(value).unwrap();
        op.method = method;
        op.path = path.to_string();
        op
    }

    fn param_names(unit: &CompiledUnit) -> Vec<String> {
        unit.program
            .function()
            .unwrap()
            .params
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    fn descriptor(unit: &CompiledUnit) -> Vec<(String, Expr)> {
        let function = unit.program.function().unwrap();
        match &function.body[0] {
            Stmt::Return(Expr::New { callee, args }) => {
                assert_eq!(callee, REQUEST_WRAPPER);
                match &args[0] {
                    Expr::Object(fields) => fields.clone(),
                    other => panic!("unexpected argument {:?}", other),
                }
            }
            other => panic!("unexpected statement {:?}", other),
        }
    }

    fn field<'a>(fields: &'a [(String, Expr)], key: &str) -> Option<&'a Expr> {
        fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[test]
    fn test_parse_path_template() {
        assert_eq!(
            parse_path_template("/v1/pets/{petId}/toys/{toyId}"),
            vec![
                PathSegment::Literal("/v1/pets/".to_string()),
                PathSegment::Placeholder("petId".to_string()),
                PathSegment::Literal("/toys/".to_string()),
                PathSegment::Placeholder("toyId".to_string()),
            ]
        );
        assert_eq!(
            parse_path_template("{a}{b}"),
            vec![
                PathSegment::Placeholder("a".to_string()),
                PathSegment::Placeholder("b".to_string()),
            ]
        );
        assert_eq!(
            parse_path_template("/pets"),
            vec![PathSegment::Literal("/pets".to_string())]
        );
    }

    #[test]
    fn test_placeholder_names_dedup() {
        assert_eq!(placeholder_names("/a/{id}/b/{id}/{x}"), vec!["id", "x"]);
        assert!(placeholder_names("/pets").is_empty());
    }

    #[test]
    fn test_path_parameter_named_in_signature() {
        let op = operation(
            HttpMethod::Get,
            "/pets/{petId}",
            json!({
                "operationId": "getPet",
                "parameters": [{ "name": "petId", "in": "path", "required": true, "type": "integer" }]
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(unit.name, "getPet");
        assert_eq!(unit.kind, UnitKind::Operation);
        assert_eq!(param_names(&unit), vec!["hostname", "petId"]);
        let function = unit.program.function().unwrap();
        assert_eq!(function.params[1].ty, Some(TypeExpr::Number));
    }

    #[test]
    fn test_path_parameter_mismatch() {
        let op = operation(
            HttpMethod::Get,
            "/pets/{petId}",
            json!({
                "operationId": "getPet",
                "parameters": [{ "name": "id", "in": "path", "required": true }]
            }),
        );

        let err = compile_operation(&op).unwrap_err();

        assert_eq!(
            err,
            CompileError::PathParameterMismatch {
                operation_id: "getPet".to_string(),
                path: "/pets/{petId}".to_string(),
                placeholders: vec!["petId".to_string()],
                parameters: vec!["id".to_string()],
            }
        );
        assert!(err.to_string().contains("{petId} vs parameters {id}"));
    }

    #[test]
    fn test_optional_path_parameter_does_not_count() {
        let op = operation(
            HttpMethod::Get,
            "/pets/{petId}",
            json!({
                "operationId": "getPet",
                "parameters": [{ "name": "petId", "in": "path" }]
            }),
        );

        assert!(matches!(
            compile_operation(&op),
            Err(CompileError::PathParameterMismatch { .. })
        ));
    }

    #[test]
    fn test_path_parameters_follow_declaration_order() {
        let op = operation(
            HttpMethod::Get,
            "/owners/{ownerId}/pets/{petId}",
            json!({
                "operationId": "getOwnedPet",
                "parameters": [
                    { "name": "petId", "in": "path", "required": true },
                    { "name": "ownerId", "in": "path", "required": true }
                ]
            }),
        );

        let unit = compile_operation(&op).unwrap();
        assert_eq!(param_names(&unit), vec!["hostname", "petId", "ownerId"]);

        let fields = descriptor(&unit);
        assert_eq!(
            field(&fields, "url"),
            Some(&Expr::concat(
                Expr::ident("hostname"),
                Expr::Template(vec![
                    TemplatePart::Text("/owners/".to_string()),
                    TemplatePart::Expr(Expr::ident("ownerId")),
                    TemplatePart::Text("/pets/".to_string()),
                    TemplatePart::Expr(Expr::ident("petId")),
                ])
            ))
        );
    }

    #[test]
    fn test_query_parameters_collapse_into_one_bag() {
        let op = operation(
            HttpMethod::Get,
            "/pets",
            json!({
                "operationId": "listPets",
                "parameters": [
                    { "name": "limit", "in": "query", "type": "integer" },
                    { "name": "tag", "in": "query", "type": "string" }
                ]
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(param_names(&unit), vec!["hostname", "query"]);
        let function = unit.program.function().unwrap();
        assert_eq!(function.params[1].ty, Some(TypeExpr::Object));

        let fields = descriptor(&unit);
        assert_eq!(
            field(&fields, "url"),
            Some(&Expr::concat(
                Expr::ident("hostname"),
                Expr::concat(
                    Expr::Template(vec![TemplatePart::Text("/pets".to_string())]),
                    Expr::Call {
                        callee: "makeQuery".to_string(),
                        args: vec![Expr::ident("query")],
                    }
                )
            ))
        );

        let imports: Vec<_> = unit.program.imports().cloned().collect();
        assert_eq!(
            imports,
            vec![
                Import::Default {
                    local: "makeQuery".to_string(),
                    source: "../helpers/makeQuery".to_string(),
                },
                Import::Default {
                    local: "AjaxPipe".to_string(),
                    source: "../helpers/AjaxPipe".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_query_means_no_bag_and_no_helper() {
        let op = operation(HttpMethod::Delete, "/pets", json!({ "operationId": "clearPets" }));

        let unit = compile_operation(&op).unwrap();

        assert_eq!(param_names(&unit), vec!["hostname"]);
        let fields = descriptor(&unit);
        assert_eq!(
            field(&fields, "url"),
            Some(&Expr::concat(
                Expr::ident("hostname"),
                Expr::Template(vec![TemplatePart::Text("/pets".to_string())])
            ))
        );
        assert_eq!(field(&fields, "method"), Some(&Expr::Str("DELETE".to_string())));
        assert!(unit.program.imports().all(|i| !matches!(
            i,
            Import::Default { local, .. } if local == QUERY_HELPER
        )));
    }

    #[test]
    fn test_form_data_payload_typed_from_inline_type() {
        let op = operation(
            HttpMethod::Post,
            "/pets",
            json!({
                "operationId": "createPet",
                "parameters": [{ "name": "name", "in": "formData", "type": "string" }]
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(param_names(&unit), vec!["hostname", "data"]);
        let function = unit.program.function().unwrap();
        assert_eq!(function.params[1].ty, Some(TypeExpr::String));
        assert_eq!(field(&descriptor(&unit), "data"), Some(&Expr::ident("data")));
    }

    #[test]
    fn test_no_payload_means_no_data_field() {
        let op = operation(
            HttpMethod::Get,
            "/pets",
            json!({
                "operationId": "listPets",
                "parameters": [{ "name": "X-Trace", "in": "header", "type": "string" }]
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(param_names(&unit), vec!["hostname"]);
        assert!(field(&descriptor(&unit), "data").is_none());
    }

    #[test]
    fn test_body_schema_reference_becomes_type_import() {
        let op = operation(
            HttpMethod::Put,
            "/pets/{petId}",
            json!({
                "operationId": "updatePet",
                "parameters": [
                    { "name": "petId", "in": "path", "required": true, "type": "integer" },
                    { "name": "body", "in": "body", "schema": { "$ref": "#/definitions/Pet" } },
                    { "name": "extra", "in": "body", "schema": { "$ref": "#/definitions/Ignored" } }
                ],
                "responses": { "200": { "schema": { "$ref": "#/definitions/Pet" } } }
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(param_names(&unit), vec!["hostname", "petId", "data"]);
        let function = unit.program.function().unwrap();
        assert_eq!(function.params[2].ty, Some(TypeExpr::Named("Pet".to_string())));
        assert_eq!(unit.type_imports, vec!["Pet"]);
        assert!(unit.program.imports().any(|i| *i
            == Import::Type {
                name: "Pet".to_string(),
                local: "Pet".to_string(),
                source: "../types/Pet".to_string(),
            }));
    }

    #[test]
    fn test_response_alias() {
        let with_schema = operation(
            HttpMethod::Get,
            "/pets",
            json!({
                "operationId": "listPets",
                "responses": {
                    "200": { "schema": { "type": "array", "items": { "$ref": "#/definitions/Pet" } } },
                    "404": { "schema": { "$ref": "#/definitions/Error" } }
                }
            }),
        );
        let unit = compile_operation(&with_schema).unwrap();
        let alias = unit.program.type_alias(RESPONSE_ALIAS).unwrap();
        assert_eq!(
            alias.ty,
            TypeExpr::Array(Box::new(TypeExpr::Named("Pet".to_string())))
        );
        assert_eq!(unit.type_imports, vec!["Pet"]);

        let without_schema = operation(HttpMethod::Get, "/ping", json!({ "operationId": "ping" }));
        let unit = compile_operation(&without_schema).unwrap();
        assert_eq!(unit.program.type_alias(RESPONSE_ALIAS).unwrap().ty, TypeExpr::Any);
        assert!(unit.type_imports.is_empty());
    }

    #[test]
    fn test_response_definition_imported_under_local_name() {
        let op = operation(
            HttpMethod::Post,
            "/jobs",
            json!({
                "operationId": "runJob",
                "parameters": [{ "name": "body", "in": "body", "schema": { "$ref": "#/definitions/Response" } }],
                "responses": { "200": { "schema": { "type": "array", "items": { "$ref": "#/definitions/Response" } } } }
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(unit.type_imports, vec!["Response"]);
        let imports: Vec<_> = unit.program.imports().cloned().collect();
        assert_eq!(
            imports[1],
            Import::Type {
                name: "Response".to_string(),
                local: "ResponseType".to_string(),
                source: "../types/Response".to_string(),
            }
        );
        assert_eq!(
            unit.program.type_alias(RESPONSE_ALIAS).unwrap().ty,
            TypeExpr::Array(Box::new(TypeExpr::Named("ResponseType".to_string())))
        );
        let function = unit.program.function().unwrap();
        assert_eq!(function.params[1].ty, Some(TypeExpr::Named("ResponseType".to_string())));
    }

    #[test]
    fn test_response_import_name_skips_taken_names() {
        assert_eq!(response_import_name(&["Pet".to_string()]), None);
        assert_eq!(
            response_import_name(&["Response".to_string(), "ResponseType".to_string()]),
            Some("ResponseType2".to_string())
        );
    }

    #[test]
    fn test_duplicate_path_parameter_appears_once() {
        let op = operation(
            HttpMethod::Get,
            "/pets/{petId}",
            json!({
                "operationId": "getPet",
                "parameters": [
                    { "name": "petId", "in": "path", "required": true, "type": "integer" },
                    { "name": "petId", "in": "path", "required": true, "type": "string" }
                ]
            }),
        );

        let unit = compile_operation(&op).unwrap();

        assert_eq!(param_names(&unit), vec!["hostname", "petId"]);
        let function = unit.program.function().unwrap();
        assert_eq!(function.params[1].ty, Some(TypeExpr::Number));
    }

    #[test]
    fn test_invalid_path_parameter_name() {
        let op = operation(
            HttpMethod::Get,
            "/pets/{pet-id}",
            json!({
                "operationId": "getPet",
                "parameters": [{ "name": "pet-id", "in": "path", "required": true }]
            }),
        );

        assert_eq!(
            compile_operation(&op),
            Err(CompileError::InvalidParameterName {
                operation_id: "getPet".to_string(),
                name: "pet-id".to_string(),
            })
        );

        let keyword = operation(
            HttpMethod::Get,
            "/classes/{class}",
            json!({
                "operationId": "getClass",
                "parameters": [{ "name": "class", "in": "path", "required": true }]
            }),
        );
        assert!(matches!(
            compile_operation(&keyword),
            Err(CompileError::InvalidParameterName { .. })
        ));
    }

    #[test]
    fn test_reserved_parameter_name() {
        let op = operation(
            HttpMethod::Get,
            "/hosts/{hostname}",
            json!({
                "operationId": "getHost",
                "parameters": [{ "name": "hostname", "in": "path", "required": true }]
            }),
        );

        assert_eq!(
            compile_operation(&op),
            Err(CompileError::ReservedParameterName {
                operation_id: "getHost".to_string(),
                name: "hostname".to_string(),
            })
        );
    }

    #[test]
    fn test_query_named_path_parameter_allowed_without_query_bag() {
        let op = operation(
            HttpMethod::Get,
            "/search/{query}",
            json!({
                "operationId": "search",
                "parameters": [{ "name": "query", "in": "path", "required": true }]
            }),
        );

        let unit = compile_operation(&op).unwrap();
        assert_eq!(param_names(&unit), vec!["hostname", "query"]);
    }
}
