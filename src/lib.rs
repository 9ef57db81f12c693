//! Swagger to JavaScript API generator.
//!
//! Converts a Swagger 2.0 document into a client package: one callable function per API
//! operation, one Flow type per schema definition, an entry point and an npm manifest.
//!
//! # Architecture
//!
//! 1. [`parser`] - Loads a JSON or YAML document into the [`swagger`] model
//! 2. [`swagger`] - Document model and flattening of paths into operations
//! 3. [`type_translator`] - Converts schema types into [`ast::TypeExpr`] trees
//! 4. [`operation_compiler`] - Compiles one operation into a function unit
//! 5. [`schema_walker`] - Validates global invariants and drives compilation
//! 6. [`renderer`] - Prints syntax trees as Flow or CommonJS source
//! 7. [`package_writer`] - Writes the generated package to disk
//!
//! # Example Usage
//!
//! ```no_run
//! use swagger_to_js::{
//!     package_writer::{write_package, PackageConfig},
//!     parser::DocumentParser,
//!     schema_walker::compile_document,
//! };
//! use std::path::Path;
//!
//! let document = DocumentParser::parse_file(Path::new("petstore.json")).unwrap();
//! let package = compile_document(&document).unwrap();
//! let config = PackageConfig {
//!     name: "petstore-api".to_string(),
//!     version: "1.0.0".to_string(),
//! };
//! write_package(&package, &config, Path::new("./petstore-api")).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod ast;
pub mod cli;
pub mod error;
pub mod operation_compiler;
pub mod package_writer;
pub mod parser;
pub mod renderer;
pub mod schema_walker;
pub mod swagger;
pub mod type_translator;
