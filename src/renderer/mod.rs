//! Rendering of compiled syntax trees into JavaScript source text.
//!
//! The compiler produces [`Program`] trees with no knowledge of output syntax. A
//! [`Renderer`] turns a tree into text for one target dialect:
//!
//! - **Flow**: ES modules with Flow type annotations, see [`flow::FlowRenderer`]
//! - **CommonJS**: plain ES5-style scripts with types erased, see [`commonjs::CommonJsRenderer`]
//!
//! # Example
//!
//! ```
//! use swagger_to_js::renderer::{Renderer, flow::FlowRenderer};
//! use swagger_to_js::schema_walker::compile_definition;
//! use swagger_to_js::swagger::TypeSpec;
//!
//! let unit = compile_definition("Name", &TypeSpec::of_kind("string"));
//! let source = FlowRenderer.render(&unit.program);
//! assert!(source.contains("export type Name = string;"));
//! ```

pub mod commonjs;
pub mod flow;

use crate::ast::{Expr, Program, TemplatePart};

/// Turns a syntax tree into source text.
pub trait Renderer {
    /// Renders a whole program, ending with a newline.
    fn render(&self, program: &Program) -> String;

    /// File extension (without the leading dot) for files produced by this renderer.
    fn extension(&self) -> &'static str;
}

const INDENT: &str = "  ";

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Single-quoted JavaScript string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Whether `name` can be written as a bare identifier / property key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

/// Lower a template literal into a left-associated `+` chain of strings and expressions.
///
/// A leading empty string is kept when the template starts with an expression, so the
/// result is always a string concatenation.
fn lower_template(parts: &[TemplatePart]) -> Expr {
    let mut pieces: Vec<Expr> = parts
        .iter()
        .filter_map(|part| match part {
            TemplatePart::Text(text) if text.is_empty() => None,
            TemplatePart::Text(text) => Some(Expr::Str(text.clone())),
            TemplatePart::Expr(expr) => Some(expr.clone()),
        })
        .collect();

    if !matches!(pieces.first(), Some(Expr::Str(_))) {
        pieces.insert(0, Expr::Str(String::new()));
    }

    let mut pieces = pieces.into_iter();
    let first = pieces.next().unwrap_or_else(|| Expr::Str(String::new()));
    pieces.fold(first, Expr::concat)
}

/// Expression printer shared by both dialects.
struct ExprPrinter {
    /// Print template literals as string concatenation
    lower_templates: bool,
}

impl ExprPrinter {
    fn print(&self, expr: &Expr, level: usize) -> String {
        match expr {
            Expr::Ident(name) => name.clone(),
            Expr::Str(value) => quote(value),
            Expr::Template(parts) if self.lower_templates => {
                self.print(&lower_template(parts), level)
            }
            Expr::Template(parts) => self.print_template(parts, level),
            Expr::Concat(left, right) => {
                let right_text = self.print(right, level);
                let right_text = if self.is_compound(right) {
                    format!("({})", right_text)
                } else {
                    right_text
                };
                format!("{} + {}", self.print(left, level), right_text)
            }
            Expr::Call { callee, args } => format!("{}({})", callee, self.print_args(args, level)),
            Expr::New { callee, args } => {
                format!("new {}({})", callee, self.print_args(args, level))
            }
            Expr::Object(fields) if fields.is_empty() => "{}".to_string(),
            Expr::Object(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(key, value)| {
                        format!(
                            "{}{}: {}",
                            indent(level + 1),
                            property_key(key),
                            self.print(value, level + 1)
                        )
                    })
                    .collect();
                format!("{{\n{}\n{}}}", inner.join(",\n"), indent(level))
            }
        }
    }

    /// Whether the expression prints as a `+` chain and needs parentheses on the right of `+`.
    fn is_compound(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Concat(..) => true,
            Expr::Template(parts) if self.lower_templates => {
                matches!(lower_template(parts), Expr::Concat(..))
            }
            _ => false,
        }
    }

    fn print_args(&self, args: &[Expr], level: usize) -> String {
        args.iter()
            .map(|arg| self.print(arg, level))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn print_template(&self, parts: &[TemplatePart], level: usize) -> String {
        let mut out = String::from("`");
        for part in parts {
            match part {
                TemplatePart::Text(text) => {
                    for c in text.chars() {
                        match c {
                            '\\' | '`' | '$' => {
                                out.push('\\');
                                out.push(c);
                            }
                            _ => out.push(c),
                        }
                    }
                }
                TemplatePart::Expr(expr) => {
                    out.push_str("${");
                    out.push_str(&self.print(expr, level));
                    out.push('}');
                }
            }
        }
        out.push('`');
        out
    }
}
