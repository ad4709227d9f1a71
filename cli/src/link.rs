#![deny(missing_docs)]

//! # Link Command
//!
//! Resolves a named route from a manifest and prints its link.

use crate::error::{parse_key_val, CliError, CliResult};
use linkt_core::{Invocation, Link, LinkBuilder, RouteRegistry};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output encodings for links.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Just the href.
    #[default]
    Text,
    /// The link object as JSON.
    Json,
    /// The link object as YAML.
    Yaml,
    /// An RFC 8288 `Link` header value.
    Header,
}

/// Arguments for the link command.
#[derive(clap::Args, Debug, Clone)]
pub struct LinkArgs {
    /// Route manifest (YAML or JSON).
    #[clap(long, env = "LINKT_ROUTES", default_value = "routes.yaml")]
    pub routes: PathBuf,

    /// Overrides the manifest's base URI.
    #[clap(long, env = "LINKT_BASE_URI")]
    pub base_uri: Option<String>,

    /// Name of the route to link to.
    #[clap(long)]
    pub route: String,

    /// Argument as `name=value`; repeat for several.
    #[clap(long = "arg", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,

    /// Link relation.
    #[clap(long, default_value = Link::SELF_REL)]
    pub rel: String,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Loads a manifest into a registry, applying a base URI override.
pub fn load_registry(path: &Path, base_uri: Option<&str>) -> CliResult<RouteRegistry> {
    if !path.exists() {
        return Err(CliError::General(format!(
            "Route manifest not found: {:?}",
            path
        )));
    }
    let mut manifest = linkt_core::RouteManifest::from_path(path)?;
    if let Some(base) = base_uri {
        manifest.base_uri = Some(base.to_string());
    }
    Ok(manifest.into_registry()?)
}

/// Executes the link command.
pub fn execute(args: &LinkArgs, out: &mut impl Write) -> CliResult<()> {
    let registry = load_registry(&args.routes, args.base_uri.as_deref())?;
    let builder = LinkBuilder::from_registry(registry);

    let mut invocation = Invocation::new(&args.route);
    for (name, value) in &args.args {
        invocation = invocation.arg(name, value);
    }

    let link = builder.link_to(&invocation)?.with_rel(&args.rel);
    writeln!(out, "{}", render(&link, args.format)?)?;
    Ok(())
}

fn render(link: &Link, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(link.href.to_string()),
        OutputFormat::Header => Ok(link.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(link).map_err(|e| CliError::Render(e.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(link)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| CliError::Render(e.to_string())),
    }
}
