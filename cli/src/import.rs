#![deny(missing_docs)]

//! # Import Command
//!
//! Converts an OpenAPI document into a route manifest.

use crate::error::{CliError, CliResult};
use linkt_core::manifest_from_openapi_yaml;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the import command.
#[derive(clap::Args, Debug, Clone)]
pub struct ImportArgs {
    /// Path to the OpenAPI spec.
    #[clap(long, default_value = "docs/openapi.yaml")]
    pub openapi: PathBuf,

    /// Manifest to write; `.json` selects JSON, anything else YAML.
    #[clap(long, default_value = "routes.yaml")]
    pub output: PathBuf,
}

/// Executes the import command.
pub fn execute(args: &ImportArgs, out: &mut impl Write) -> CliResult<()> {
    if !args.openapi.exists() {
        return Err(CliError::General(format!(
            "OpenAPI file not found: {:?}",
            args.openapi
        )));
    }

    let yaml = fs::read_to_string(&args.openapi)?;
    let manifest = manifest_from_openapi_yaml(&yaml)?;
    manifest.write_to(&args.output)?;

    writeln!(
        out,
        "Imported {} routes into {:?}",
        manifest.routes.len(),
        args.output
    )?;
    Ok(())
}
