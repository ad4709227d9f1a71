#![deny(missing_docs)]

//! # Routes Command
//!
//! Lists every route in a manifest alongside its template.

use crate::error::CliResult;
use crate::link::load_registry;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the routes command.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// Route manifest (YAML or JSON).
    #[clap(long, env = "LINKT_ROUTES", default_value = "routes.yaml")]
    pub routes: PathBuf,

    /// Overrides the manifest's base URI.
    #[clap(long, env = "LINKT_BASE_URI")]
    pub base_uri: Option<String>,
}

/// Executes the routes command: one `name<TAB>template` line per route.
pub fn execute(args: &RoutesArgs, out: &mut impl Write) -> CliResult<()> {
    let registry = load_registry(&args.routes, args.base_uri.as_deref())?;
    if registry.is_empty() {
        writeln!(out, "No routes found in {:?}.", args.routes)?;
        return Ok(());
    }
    for route in registry.routes() {
        let template = registry.route_template(&route.name)?;
        writeln!(out, "{}\t{}", route.name, template)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lists_routes_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        fs::write(
            &path,
            r#"{"routes":[
                {"name":"items.list","path":"/items","query":["page","size"]},
                {"name":"health","path":"/health"}
            ]}"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        execute(
            &RoutesArgs {
                routes: path,
                base_uri: None,
            },
            &mut buf,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "items.list\t/items{?page,size}\nhealth\t/health\n"
        );
    }

    #[test]
    fn test_empty_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.yaml");
        fs::write(&path, "routes: []\n").unwrap();

        let mut buf = Vec::new();
        execute(
            &RoutesArgs {
                routes: path,
                base_uri: None,
            },
            &mut buf,
        )
        .unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("No routes found"));
    }
}
