//! Translation of Swagger type nodes into [`TypeExpr`] trees.
//!
//! `$ref` links are recorded as dependencies and never expanded, which keeps recursive
//! definitions finite.

use crate::ast::{Field, TypeExpr};
use crate::swagger::{Primitive, Shape, TypeSpec};
use log::debug;
use std::collections::HashSet;

/// A translated type together with the definition names it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub ty: TypeExpr,
    /// Every `$ref` target met during the walk, duplicates included
    pub dependencies: Vec<String>,
}

/// Translate a type node with a fresh dependency accumulator.
pub fn translate(spec: &TypeSpec) -> Translation {
    let mut dependencies = Vec::new();
    let ty = translate_into(spec, &mut dependencies);
    Translation { ty, dependencies }
}

/// Translate a type node, appending every referenced definition name to `imports`.
///
/// References are never followed: a `$ref` becomes a [`TypeExpr::Named`] link plus an entry
/// in `imports`, so self-referential and mutually recursive definitions translate in a
/// single bounded walk. Translation is total; unknown kinds become [`TypeExpr::Any`].
pub fn translate_into(spec: &TypeSpec, imports: &mut Vec<String>) -> TypeExpr {
    match spec.shape() {
        Shape::Reference(name) => {
            debug!("Linking referenced type: {}", name);
            imports.push(name.to_string());
            TypeExpr::Named(name.to_string())
        }
        Shape::Object {
            properties: None, ..
        } => TypeExpr::Object,
        Shape::Object {
            properties: Some(properties),
            required,
        } => {
            let fields = properties
                .iter()
                .map(|(name, property)| Field {
                    name: name.clone(),
                    ty: translate_into(property, imports),
                    optional: !required.contains(name),
                })
                .collect();
            TypeExpr::Record(fields)
        }
        Shape::Array(items) => {
            let element = match items {
                Some(items) => translate_into(items, imports),
                None => TypeExpr::Any,
            };
            TypeExpr::Array(Box::new(element))
        }
        Shape::Primitive(Primitive::String) => TypeExpr::String,
        Shape::Primitive(Primitive::Number) => TypeExpr::Number,
        Shape::Primitive(Primitive::Boolean) => TypeExpr::Boolean,
        Shape::Primitive(Primitive::Any) => TypeExpr::Any,
    }
}

/// Remove repeated names, keeping the first occurrence of each.
pub fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
