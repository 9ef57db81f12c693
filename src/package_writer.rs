//! Writing a compiled package to disk.
//!
//! Layout of the generated package under the output directory:
//!
//! ```text
//! index.js                  entry point exporting every operation
//! package.json              npm manifest
//! helpers/AjaxPipe.js       request wrapper
//! helpers/makeQuery.js      query-string serializer
//! src/<operationId>.js.flow Flow-annotated source
//! src/<operationId>.js      CommonJS build
//! types/<Definition>.js.flow
//! ```

use crate::renderer::commonjs::CommonJsRenderer;
use crate::renderer::flow::FlowRenderer;
use crate::renderer::Renderer;
use crate::schema_walker::{CompiledPackage, ExportManifest};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const AJAX_PIPE_JS: &str = include_str!("../assets/helpers/AjaxPipe.js");
const MAKE_QUERY_JS: &str = include_str!("../assets/helpers/makeQuery.js");

/// Package metadata supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub name: String,
    pub version: String,
}

/// `package.json` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub main: String,
    pub license: String,
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn new(config: &PackageConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: "auto-generated api from Swagger.json".to_string(),
            version: config.version.clone(),
            main: "index.js".to_string(),
            license: "MIT".to_string(),
            dependencies: BTreeMap::new(),
        }
    }
}

/// Counts of what was written, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub files: Vec<PathBuf>,
    pub operations: usize,
    pub definitions: usize,
}

/// Renders the CommonJS entry point mapping every export to its unit's default export.
pub fn render_index(manifest: &ExportManifest) -> String {
    if manifest.is_empty() {
        return "module.exports = {};\n".to_string();
    }

    let entries: Vec<String> = manifest
        .entries
        .iter()
        .map(|entry| {
            format!(
                "  {}: require('./src/{}.js').default",
                entry.export_name, entry.unit_name
            )
        })
        .collect();

    format!("module.exports = {{\n{}\n}};\n", entries.join(",\n"))
}

/// Writes the whole package under `output`.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created, or if the manifest cannot
/// be serialized.
pub fn write_package(
    package: &CompiledPackage,
    config: &PackageConfig,
    output: &Path,
) -> Result<WriteSummary> {
    info!("Writing package '{}' to {}", config.name, output.display());

    let mut summary = WriteSummary::default();
    let mut write = |relative: PathBuf, content: &str| -> Result<()> {
        let path = output.join(&relative);
        write_to_file(content, &path)?;
        summary.files.push(relative);
        Ok(())
    };

    write(PathBuf::from("helpers/AjaxPipe.js"), AJAX_PIPE_JS)?;
    write(PathBuf::from("helpers/makeQuery.js"), MAKE_QUERY_JS)?;

    let operation_renderers: [&dyn Renderer; 2] = [&FlowRenderer, &CommonJsRenderer];
    for unit in &package.operations {
        for renderer in operation_renderers {
            let relative = PathBuf::from(format!("src/{}.{}", unit.name, renderer.extension()));
            write(relative, &renderer.render(&unit.program))?;
        }
    }

    for unit in &package.definitions {
        let relative = PathBuf::from(format!("types/{}.{}", unit.name, FlowRenderer.extension()));
        write(relative, &FlowRenderer.render(&unit.program))?;
    }

    write(PathBuf::from("index.js"), &render_index(&package.manifest))?;

    let manifest = serde_json::to_string_pretty(&PackageManifest::new(config))
        .context("Failed to serialize package.json")?;
    write(PathBuf::from("package.json"), &format!("{}\n", manifest))?;

    summary.operations = package.operations.len();
    summary.definitions = package.definitions.len();
    info!(
        "Wrote {} files ({} operations, {} definitions)",
        summary.files.len(),
        summary.operations,
        summary.definitions
    );
    Ok(summary)
}

/// Writes string content to a file, creating parent directories and overwriting any
/// existing file.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
