use super::{indent, property_key, quote, ExprPrinter, Renderer};
use crate::ast::{FunctionDecl, Import, Item, Param, Program, Stmt, TypeAlias, TypeExpr};

/// Renders ES modules annotated with Flow types (`.js.flow` files).
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowRenderer;

impl Renderer for FlowRenderer {
    fn render(&self, program: &Program) -> String {
        let mut imports = Vec::new();
        let mut blocks = Vec::new();

        for item in &program.items {
            match item {
                Item::Import(import) => imports.push(render_import(import)),
                Item::TypeAlias(alias) => blocks.push(render_alias(alias)),
                Item::Function(function) => blocks.push(render_function(function)),
            }
        }

        let mut sections = vec!["// @flow".to_string()];
        if !imports.is_empty() {
            sections.push(imports.join("\n"));
        }
        sections.extend(blocks);

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    fn extension(&self) -> &'static str {
        "js.flow"
    }
}

fn render_import(import: &Import) -> String {
    match import {
        Import::Default { local, source } => format!("import {} from {};", local, quote(source)),
        Import::Type {
            name,
            local,
            source,
        } if name != local => {
            format!("import type {{ {} as {} }} from {};", name, local, quote(source))
        }
        Import::Type { name, source, .. } => {
            format!("import type {{ {} }} from {};", name, quote(source))
        }
    }
}

fn render_alias(alias: &TypeAlias) -> String {
    let export = if alias.exported { "export " } else { "" };
    format!("{}type {} = {};", export, alias.name, render_type(&alias.ty, 0))
}

fn render_function(function: &FunctionDecl) -> String {
    let params: Vec<String> = function.params.iter().map(render_param).collect();
    let printer = ExprPrinter {
        lower_templates: false,
    };
    let body: Vec<String> = function
        .body
        .iter()
        .map(|stmt| match stmt {
            Stmt::Return(expr) => format!("{}return {};", indent(1), printer.print(expr, 1)),
        })
        .collect();

    format!(
        "export default function {}({}) {{\n{}\n}}",
        function.name,
        params.join(", "),
        body.join("\n")
    )
}

fn render_param(param: &Param) -> String {
    match &param.ty {
        Some(ty) => format!("{}: {}", param.name, render_type(ty, 0)),
        None => param.name.clone(),
    }
}

/// Flow type syntax. Records print one field per line, indented from `level`.
pub fn render_type(ty: &TypeExpr, level: usize) -> String {
    match ty {
        TypeExpr::String => "string".to_string(),
        TypeExpr::Number => "number".to_string(),
        TypeExpr::Boolean => "boolean".to_string(),
        TypeExpr::Any => "any".to_string(),
        TypeExpr::Object => "Object".to_string(),
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Array(element) => format!("Array<{}>", render_type(element, level)),
        TypeExpr::Record(fields) if fields.is_empty() => "{||}".to_string(),
        TypeExpr::Record(fields) => {
            let lines: Vec<String> = fields
                .iter()
                .map(|field| {
                    format!(
                        "{}{}{}: {}",
                        indent(level + 1),
                        property_key(&field.name),
                        if field.optional { "?" } else { "" },
                        render_type(&field.ty, level + 1)
                    )
                })
                .collect();
            format!("{{|\n{}\n{}|}}", lines.join(",\n"), indent(level))
        }
    }
}
