#![deny(missing_docs)]

//! # Linkt CLI
//!
//! Command Line Interface for building templated endpoint links.
//!
//! Supported Commands:
//! - `template`: Build a template from a resolved URI and parameter names.
//! - `link`: Resolve a named route from a manifest and print its link.
//! - `routes`: List the templates of every route in a manifest.
//! - `import`: Derive a route manifest from an OpenAPI document.

use clap::{Parser, Subcommand};
use std::io;

use crate::error::CliResult;

mod error;
mod import;
mod link;
mod routes;
mod template;

#[derive(Parser, Debug)]
#[clap(author, version, about = "URI template link builder")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a template from a resolved URI.
    Template(template::TemplateArgs),
    /// Print the link for a named route.
    Link(link::LinkArgs),
    /// List route templates.
    Routes(routes::RoutesArgs),
    /// Import routes from an OpenAPI document.
    Import(import::ImportArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Template(args) => template::execute(args, &mut stdout)?,
        Commands::Link(args) => link::execute(args, &mut stdout)?,
        Commands::Routes(args) => routes::execute(args, &mut stdout)?,
        Commands::Import(args) => import::execute(args, &mut stdout)?,
    }

    Ok(())
}
