//! Whole-document compilation.
//!
//! Checks the invariants that span operations and definitions (unique operation ids,
//! definition names distinct ignoring case), then compiles every definition and operation
//! and builds the export manifest. Nothing is returned unless every unit compiles.

use crate::ast::{CompiledUnit, Import, Item, Program, TypeAlias, UnitKind};
use crate::error::{CompileError, Result};
use crate::operation_compiler::compile_operation;
use crate::swagger::{OperationSpec, SchemaDocument, TypeSpec};
use crate::type_translator::{dedup_names, translate};
use indexmap::IndexMap;
use log::{debug, error, info, warn};
use std::collections::HashMap;

/// Everything generated from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPackage {
    /// One type-alias unit per definition, in document order
    pub definitions: Vec<CompiledUnit>,
    /// One function unit per operation, in flattening order
    pub operations: Vec<CompiledUnit>,
    pub manifest: ExportManifest,
}

/// Public entry point table: export name -> compiled unit whose default export it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportManifest {
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub export_name: String,
    pub unit_name: String,
}

impl ExportManifest {
    /// Build the table from operation names, keeping the first occurrence of each name.
    pub fn from_operation_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let entries = dedup_names(names.into_iter().collect())
            .into_iter()
            .map(|name| ManifestEntry {
                export_name: name.clone(),
                unit_name: name,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten a document into operations and compile it with [`compile_all`].
///
/// # Errors
///
/// Returns an error if an operation cannot be decoded, or wraps the [`CompileError`] that
/// aborted compilation (recoverable with `downcast_ref`).
pub fn compile_document(document: &SchemaDocument) -> anyhow::Result<CompiledPackage> {
    let operations = document.operations()?;
    Ok(compile_all(&operations, &document.definitions)?)
}

/// Compile a flattened document: validate the global invariants, then translate every
/// definition and compile every operation.
///
/// Nothing is produced unless every check passes. The order of checks is: duplicate
/// operation ids, case-insensitive definition name collisions, then per-operation path
/// parameter consistency while compiling.
///
/// # Errors
///
/// Returns the first fatal [`CompileError`] met.
pub fn compile_all(
    operations: &[OperationSpec],
    definitions: &IndexMap<String, TypeSpec>,
) -> Result<CompiledPackage> {
    info!(
        "Compiling {} operations and {} definitions",
        operations.len(),
        definitions.len()
    );

    check_unique_operation_ids(operations)?;
    warn_undocumented(operations);
    check_definition_names(definitions.keys())?;

    let definition_units: Vec<CompiledUnit> = definitions
        .iter()
        .map(|(name, spec)| compile_definition(name, spec))
        .collect();

    let operation_units = operations
        .iter()
        .map(compile_operation)
        .collect::<Result<Vec<_>>>()?;

    let manifest =
        ExportManifest::from_operation_names(operation_units.iter().map(|unit| unit.name.clone()));

    debug!(
        "Compiled {} definition units, {} operation units, {} exports",
        definition_units.len(),
        operation_units.len(),
        manifest.len()
    );

    Ok(CompiledPackage {
        definitions: definition_units,
        operations: operation_units,
        manifest,
    })
}

/// Translate one definition into an exported type alias with its type imports.
pub fn compile_definition(name: &str, spec: &TypeSpec) -> CompiledUnit {
    debug!("Compiling definition {}", name);

    let translation = translate(spec);
    let type_imports = dedup_names(translation.dependencies);

    let mut items: Vec<Item> = type_imports
        .iter()
        .filter(|dep| dep.as_str() != name)
        .map(|dep| {
            Item::Import(Import::Type {
                name: dep.clone(),
                local: dep.clone(),
                source: format!("./{}", dep),
            })
        })
        .collect();
    items.push(Item::TypeAlias(TypeAlias {
        name: name.to_string(),
        ty: translation.ty,
        exported: true,
    }));

    CompiledUnit {
        name: name.to_string(),
        kind: UnitKind::Definition,
        program: Program { items },
        type_imports,
    }
}

/// Fail with every identifier used by more than one operation.
pub fn check_unique_operation_ids(operations: &[OperationSpec]) -> Result<()> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for operation in operations {
        *counts.entry(operation.operation_id.as_str()).or_default() += 1;
    }

    let duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(CompileError::DuplicateOperationId {
            operation_ids: duplicates,
        })
    }
}

/// Fail with every pair of definition names that differ only by case.
///
/// All names are scanned before failing so the report lists every collision.
pub fn check_definition_names<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut registry: HashMap<String, &str> = HashMap::new();
    let mut collisions = Vec::new();

    for name in names {
        let folded = name.to_lowercase();
        match registry.get(&folded) {
            Some(existing) => {
                error!(
                    "Definition '{}' collides with '{}' on case-insensitive file systems",
                    name, existing
                );
                collisions.push((existing.to_string(), name.clone()));
            }
            None => {
                registry.insert(folded, name.as_str());
            }
        }
    }

    if collisions.is_empty() {
        Ok(())
    } else {
        Err(CompileError::DefinitionNameCollision { collisions })
    }
}

fn warn_undocumented(operations: &[OperationSpec]) {
    for operation in operations.iter().filter(|op| op.is_undocumented()) {
        warn!(
            "Operation {} ({} {}) has neither a summary nor a description",
            operation.operation_id,
            operation.method.as_str(),
            operation.path
        );
    }
}
