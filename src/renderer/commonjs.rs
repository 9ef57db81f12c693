use super::{indent, quote, ExprPrinter, Renderer};
use crate::ast::{FunctionDecl, Import, Item, Program, Stmt};

/// Renders plain CommonJS scripts: type imports, aliases and annotations are erased and
/// template literals become string concatenation, so the output runs without a transpiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonJsRenderer;

impl Renderer for CommonJsRenderer {
    fn render(&self, program: &Program) -> String {
        let mut requires = Vec::new();
        let mut blocks = Vec::new();

        for item in &program.items {
            match item {
                Item::Import(Import::Default { local, source }) => {
                    requires.push(format!("var {} = require({});", local, quote(source)));
                }
                Item::Import(Import::Type { .. }) | Item::TypeAlias(_) => {}
                Item::Function(function) => blocks.push(render_function(function)),
            }
        }

        let mut sections = vec!["'use strict';".to_string()];
        if !requires.is_empty() {
            sections.push(requires.join("\n"));
        }
        sections.extend(blocks);

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    fn extension(&self) -> &'static str {
        "js"
    }
}

fn render_function(function: &FunctionDecl) -> String {
    let params: Vec<&str> = function.params.iter().map(|p| p.name.as_str()).collect();
    let printer = ExprPrinter {
        lower_templates: true,
    };
    let body: Vec<String> = function
        .body
        .iter()
        .map(|stmt| match stmt {
            Stmt::Return(expr) => format!("{}return {};", indent(1), printer.print(expr, 1)),
        })
        .collect();

    format!(
        "exports.default = function {}({}) {{\n{}\n}};",
        function.name,
        params.join(", "),
        body.join("\n")
    )
}
