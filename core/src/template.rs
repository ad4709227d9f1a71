#![deny(missing_docs)]

//! # URI Templates
//!
//! Turns a concrete, resolved endpoint URI into an RFC 6570 template that
//! advertises the endpoint's optional query parameters.
//!
//! The transformation:
//! 1. drops a stale `{?...}` expression the resolver may already have appended,
//! 2. drops the concrete query string (`?k=v&...`) left by real argument values,
//! 3. appends `{?name1,name2,...}` when any parameter names are declared.
//!
//! Only the form-style query expansion (`{?...}`) is ever produced.

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;
use url::{ParseError, Url};

const DUMMY_BASE: &str = "http://example.invalid/";

/// How declared parameter names are treated before they are embedded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// Names are embedded unchanged, whatever characters they contain.
    #[default]
    Verbatim,
    /// Names must be RFC 6570 `varname`s, anything else is rejected.
    Strict,
}

/// Options controlling template construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Parameter name handling.
    #[serde(default)]
    pub name_policy: NamePolicy,
}

impl TemplateOptions {
    /// Options that reject names which are not valid template variables.
    pub fn strict() -> Self {
        Self {
            name_policy: NamePolicy::Strict,
        }
    }
}

/// A URI template of the form `<path>` or `<path>{?name1,name2,...}`.
///
/// Serialized as a plain string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UriTemplate {
    raw: String,
    /// Byte offset of the trailing `{?...}` expression, if one was appended.
    expr_start: Option<usize>,
}

impl UriTemplate {
    fn plain(raw: String) -> Self {
        Self {
            raw,
            expr_start: None,
        }
    }

    /// Recovers a template from its string form.
    ///
    /// The expression is located at the last `{?`, so names that themselves
    /// contain `{?` only survive templates built by [`build_template`].
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let expr_start = match raw.rfind("{?") {
            Some(idx) if raw.ends_with('}') => Some(idx),
            _ => None,
        };
        Self { raw, expr_start }
    }

    /// Returns the raw template string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the template, returning the underlying string.
    pub fn into_string(self) -> String {
        self.raw
    }

    /// True when the template carries a `{?...}` expression.
    pub fn is_templated(&self) -> bool {
        self.query_expression().is_some()
    }

    /// The variable names of the trailing `{?...}` expression, in order.
    pub fn variables(&self) -> Vec<&str> {
        match self.query_expression() {
            Some(expr) => expr.split(',').collect(),
            None => Vec::new(),
        }
    }

    /// The part of the template before the query expression.
    pub fn base(&self) -> &str {
        match self.expr_start {
            Some(idx) => &self.raw[..idx],
            None => &self.raw,
        }
    }

    fn query_expression(&self) -> Option<&str> {
        let idx = self.expr_start?;
        self.raw[idx + 2..].strip_suffix('}')
    }
}

impl Serialize for UriTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for UriTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::parse)
    }
}

impl fmt::Debug for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UriTemplate({:?})", self.raw)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for UriTemplate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq<str> for UriTemplate {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for UriTemplate {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl From<UriTemplate> for String {
    fn from(template: UriTemplate) -> Self {
        template.raw
    }
}

/// Builds a template from a resolved URI and the endpoint's declared
/// optional query parameter names, embedding names verbatim.
///
/// # Arguments
///
/// * `resolved_uri` - Absolute or relative URI produced by the route resolver.
/// * `parameter_names` - Declared names; order and duplicates are preserved.
///
/// # Errors
///
/// `AppError::MalformedInput` when `resolved_uri` cannot be parsed.
pub fn build_template<S: AsRef<str>>(
    resolved_uri: &str,
    parameter_names: &[S],
) -> AppResult<UriTemplate> {
    build_template_with(resolved_uri, parameter_names, &TemplateOptions::default())
}

/// Same as [`build_template`], honouring the given options.
pub fn build_template_with<S: AsRef<str>>(
    resolved_uri: &str,
    parameter_names: &[S],
    options: &TemplateOptions,
) -> AppResult<UriTemplate> {
    if options.name_policy == NamePolicy::Strict {
        for name in parameter_names {
            validate_varname(name.as_ref())?;
        }
    }

    let mut template = strip_query_expression(resolved_uri).into_owned();

    let url = parse_uri(&template)?;
    if url.query().is_some_and(|q| !q.is_empty()) {
        if let Some(raw) = raw_query(&template) {
            let literal = format!("?{}", raw);
            template = template.replacen(&literal, "", 1);
        }
    }

    if parameter_names.is_empty() {
        return Ok(UriTemplate::plain(template));
    }

    let expr_start = template.len();
    let names: Vec<&str> = parameter_names.iter().map(AsRef::as_ref).collect();
    template.push_str("{?");
    template.push_str(&names.join(","));
    template.push('}');

    Ok(UriTemplate {
        raw: template,
        expr_start: Some(expr_start),
    })
}

/// Removes a `{?...}` expression, spanning greedily up to the last `}`.
fn strip_query_expression(uri: &str) -> std::borrow::Cow<'_, str> {
    static QUERY_EXPR_RE: OnceLock<Regex> = OnceLock::new();
    let re = QUERY_EXPR_RE.get_or_init(|| Regex::new(r"\{\?.+\}").expect("Invalid regex"));
    re.replace_all(uri, "")
}

/// Parses absolute URIs directly and relative references against a dummy base.
fn parse_uri(uri: &str) -> AppResult<Url> {
    let malformed = |e: ParseError| AppError::MalformedInput {
        uri: uri.to_string(),
        reason: e.to_string(),
    };

    match Url::parse(uri) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(DUMMY_BASE).map_err(malformed)?;
            base.join(uri).map_err(malformed)
        }
        Err(e) => Err(malformed(e)),
    }
}

/// The query exactly as written: after the first `?`, before any `#`.
fn raw_query(uri: &str) -> Option<&str> {
    let before_fragment = uri.split('#').next().unwrap_or(uri);
    let (_, query) = before_fragment.split_once('?')?;
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

fn validate_varname(name: &str) -> AppResult<()> {
    static VARNAME_RE: OnceLock<Regex> = OnceLock::new();
    let re = VARNAME_RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9_]|%[0-9A-Fa-f]{2})(?:\.?(?:[A-Za-z0-9_]|%[0-9A-Fa-f]{2}))*$")
            .expect("Invalid regex")
    });
    if re.is_match(name) {
        Ok(())
    } else {
        Err(AppError::InvalidParameterName(name.to_string()))
    }
}
