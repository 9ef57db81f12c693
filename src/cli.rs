use crate::package_writer::{write_package, PackageConfig};
use crate::parser::DocumentParser;
use crate::schema_walker::compile_document;
use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Swagger to JavaScript API generator - Generates a typed client package from a Swagger 2.0 document
#[derive(Parser, Debug)]
#[command(name = "swagger-to-js")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Swagger JSON/YAML file to convert
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Folder to write the generated package to
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: PathBuf,

    /// Name for the generated package
    #[arg(short = 'n', long = "name")]
    pub name: String,

    /// Version number for the generated package (default: 1.0.$BUILD_NUMBER)
    #[arg(long = "package-version", value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Package metadata, filling in the default version.
    pub fn package_config(&self) -> PackageConfig {
        PackageConfig {
            name: self.name.clone(),
            version: self
                .package_version
                .clone()
                .unwrap_or_else(|| default_version(std::env::var("BUILD_NUMBER").ok())),
        }
    }
}

/// `1.0.<build number>`, or `1.0.0` outside of CI.
pub fn default_version(build_number: Option<String>) -> String {
    match build_number {
        Some(build) if !build.trim().is_empty() => format!("1.0.{}", build.trim()),
        _ => "1.0.0".to_string(),
    }
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    if !args.input.is_file() {
        anyhow::bail!("Input path is not a file: {}", args.input.display());
    }

    if args.name.trim().is_empty() {
        anyhow::bail!("Package name must not be empty");
    }

    info!("Input: {}", args.input.display());
    info!("Output: {}", args.output.display());
    info!("Package name: {}", args.name);

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Starting client generation...");

    // Step 1: Load the document
    info!("Reading Swagger document...");
    let document = DocumentParser::parse_file(&args.input)?;

    // Step 2: Validate and compile every operation and definition
    info!("Compiling operations and definitions...");
    let package = compile_document(&document)?;

    // Step 3: Render and write
    let config = args.package_config();
    info!("Package version: {}", config.version);
    let summary = write_package(&package, &config, &args.output)?;

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Operations: {}", summary.operations);
    info!("  - Definitions: {}", summary.definitions);
    info!("  - Files written: {}", summary.files.len());

    Ok(())
}
