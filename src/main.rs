//! Swagger to JavaScript API generator - command-line tool.
//!
//! Reads a Swagger 2.0 document and writes a client package with one function per
//! operation and one Flow type per definition.
//!
//! # Usage
//!
//! ```bash
//! swagger-to-js -i <FILE> -o <DIR> -n <NAME> [--package-version <VERSION>] [-v]
//! ```
//!
//! # Examples
//!
//! ```bash
//! swagger-to-js -i petstore.json -o ./petstore-api -n petstore-api
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! swagger-to-js -i petstore.yaml -o ./petstore-api -n petstore-api -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use swagger_to_js::cli;

fn main() -> Result<()> {
    // Parse once to read the verbose flag before the logger exists
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger to JavaScript API generator starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Client package generation completed successfully");

    Ok(())
}
