#![deny(missing_docs)]

//! # Template Command
//!
//! Builds a template directly from a resolved URI and parameter names.

use crate::error::CliResult;
use linkt_core::{build_template_with, TemplateOptions};
use std::io::Write;

/// Arguments for the template command.
#[derive(clap::Args, Debug, Clone)]
pub struct TemplateArgs {
    /// The resolved URI (absolute or relative).
    #[clap(long)]
    pub uri: String,

    /// Optional query parameter name; repeat to declare several, order is kept.
    #[clap(long = "param")]
    pub params: Vec<String>,

    /// Reject names that are not RFC 6570 variable names.
    #[clap(long)]
    pub strict: bool,
}

/// Executes the template command, writing the template on its own line.
pub fn execute(args: &TemplateArgs, out: &mut impl Write) -> CliResult<()> {
    let options = if args.strict {
        TemplateOptions::strict()
    } else {
        TemplateOptions::default()
    };
    let template = build_template_with(&args.uri, &args.params, &options)?;
    writeln!(out, "{}", template)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn run(args: TemplateArgs) -> CliResult<String> {
        let mut buf = Vec::new();
        execute(&args, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_prints_template() {
        let out = run(TemplateArgs {
            uri: "/items/5?sort=asc".into(),
            params: vec!["sort".into(), "filter".into()],
            strict: false,
        })
        .unwrap();
        assert_eq!(out, "/items/5{?sort,filter}\n");
    }

    #[test]
    fn test_malformed_uri() {
        let err = run(TemplateArgs {
            uri: "http://[invalid".into(),
            params: vec![],
            strict: false,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn test_strict_flag() {
        let err = run(TemplateArgs {
            uri: "/a".into(),
            params: vec!["bad name".into()],
            strict: true,
        })
        .unwrap_err();
        assert!(err.to_string().contains("bad name"));
    }
}
