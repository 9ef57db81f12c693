//! Output syntax tree for generated client sources.
//!
//! Every generated file is described as a [`Program`] made of a handful of node kinds:
//! import declarations, type aliases and a single function declaration. The tree carries
//! no knowledge of how it is printed; see [`crate::renderer`] for that.

/// Static type expression (the right-hand side of a type alias or an annotation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    String,
    Number,
    Boolean,
    /// Unconstrained type
    Any,
    /// Open, untyped object
    Object,
    /// Reference to another generated type, by name
    Named(String),
    /// Sequence of the element type
    Array(Box<TypeExpr>),
    /// Closed record whose fields are exactly the listed ones
    Record(Vec<Field>),
}

impl TypeExpr {
    /// Point every [`TypeExpr::Named`] link to `from` at `to` instead.
    pub fn rename_links(&mut self, from: &str, to: &str) {
        match self {
            TypeExpr::Named(name) if name == from => *name = to.to_string(),
            TypeExpr::Array(inner) => inner.rename_links(from, to),
            TypeExpr::Record(fields) => {
                for field in fields {
                    field.ty.rename_links(from, to);
                }
            }
            _ => {}
        }
    }
}

/// One field of a [`TypeExpr::Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
}

/// Value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Str(String),
    /// Template literal interleaving text and expressions
    Template(Vec<TemplatePart>),
    /// `left + right`
    Concat(Box<Expr>, Box<Expr>),
    Call { callee: String, args: Vec<Expr> },
    New { callee: String, args: Vec<Expr> },
    /// Object literal; keys in insertion order
    Object(Vec<(String, Expr)>),
}

impl Expr {
    pub fn ident(name: &str) -> Self {
        Expr::Ident(name.to_string())
    }

    pub fn concat(left: Expr, right: Expr) -> Self {
        Expr::Concat(Box::new(left), Box::new(right))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Text(String),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Return(Expr),
}

/// Function parameter with an optional type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: Option<TypeExpr>,
}

impl Param {
    pub fn new(name: &str, ty: Option<TypeExpr>) -> Self {
        Self {
            name: name.to_string(),
            ty,
        }
    }
}

/// A default-exported function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
    /// `import local from 'source'`
    Default { local: String, source: String },
    /// `import type { name } from 'source'`, or `{ name as local }` when the two differ
    Type {
        name: String,
        local: String,
        source: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub ty: TypeExpr,
    pub exported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Import(Import),
    TypeAlias(TypeAlias),
    Function(FunctionDecl),
}

/// A whole generated source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.items.iter().filter_map(|item| match item {
            Item::Import(import) => Some(import),
            _ => None,
        })
    }

    pub fn function(&self) -> Option<&FunctionDecl> {
        self.items.iter().find_map(|item| match item {
            Item::Function(function) => Some(function),
            _ => None,
        })
    }

    pub fn type_alias(&self, name: &str) -> Option<&TypeAlias> {
        self.items.iter().find_map(|item| match item {
            Item::TypeAlias(alias) if alias.name == name => Some(alias),
            _ => None,
        })
    }
}

/// What a [`CompiledUnit`] was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Operation,
    Definition,
}

/// One generated source artifact: a named program plus the type names it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUnit {
    pub name: String,
    pub kind: UnitKind,
    pub program: Program,
    /// Referenced definition names, deduplicated, in first-seen order
    pub type_imports: Vec<String>,
}
