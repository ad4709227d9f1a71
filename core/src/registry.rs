#![deny(missing_docs)]

//! # Route Registry
//!
//! An explicit route table populated at startup. Each route is a path
//! template (e.g. `/items/{id}`) plus its declared query parameters.
//!
//! Resolving an [`Invocation`] against the registry substitutes path
//! arguments and appends the query arguments that were supplied as a
//! concrete query string. The template builder strips that query again and
//! advertises every declared parameter instead.

use crate::error::{AppError, AppResult};
use crate::resolver::{Invocation, ResolvedInvocation, RouteResolver};
use crate::template::{build_template_with, NamePolicy, TemplateOptions, UriTemplate};
use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters escaped when an argument is substituted into a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in query keys and values.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A declared query parameter.
///
/// Manifests may give either a bare name (`sort`) or a map
/// (`{ name: sort, required: true }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QueryParamRepr")]
pub struct QueryParam {
    /// Parameter name as it appears in the query string.
    pub name: String,
    /// Whether resolution fails when no argument is supplied.
    #[serde(skip_serializing_if = "crate::link::is_false")]
    pub required: bool,
}

impl QueryParam {
    /// An optional query parameter.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// A required query parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QueryParamRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        required: bool,
    },
}

impl From<QueryParamRepr> for QueryParam {
    fn from(repr: QueryParamRepr) -> Self {
        match repr {
            QueryParamRepr::Name(name) => QueryParam::optional(name),
            QueryParamRepr::Full { name, required } => QueryParam { name, required },
        }
    }
}

/// A single registered endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Unique route name used by invocations.
    pub name: String,
    /// Path template with `{variable}` segments.
    pub path: String,
    /// Declared query parameters, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
}

impl RouteDescriptor {
    /// Creates a route without query parameters.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a declared query parameter.
    pub fn with_query(mut self, param: QueryParam) -> Self {
        self.query.push(param);
        self
    }

    /// Names of the declared query parameters, in declaration order.
    pub fn query_names(&self) -> Vec<String> {
        self.query.iter().map(|q| q.name.clone()).collect()
    }

    /// Names of the `{variable}` segments in the path, in order.
    pub fn path_variables(&self) -> AppResult<Vec<&str>> {
        let mut vars = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                AppError::Config(format!(
                    "Route '{}' has an unclosed '{{' in path '{}'",
                    self.name, self.path
                ))
            })?;
            let var = &after[..end];
            if var.is_empty() || var.contains('{') {
                return Err(AppError::Config(format!(
                    "Route '{}' has an invalid path variable in '{}'",
                    self.name, self.path
                )));
            }
            vars.push(var);
            rest = &after[end + 1..];
        }
        Ok(vars)
    }

    fn expand_path(&self, args: &IndexMap<String, String>) -> AppResult<String> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                AppError::Config(format!("Unclosed '{{' in path '{}'", self.path))
            })?;
            let var = &after[..end];
            let value = args.get(var).ok_or_else(|| AppError::MissingArgument {
                route: self.name.clone(),
                name: var.to_string(),
            })?;
            out.extend(utf8_percent_encode(value, PATH_SEGMENT));
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// The route table. Implements [`RouteResolver`].
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    base_uri: Option<String>,
    options: TemplateOptions,
    routes: IndexMap<String, RouteDescriptor>,
}

impl RouteRegistry {
    /// Creates an empty registry producing relative URIs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes every resolved path with `base_uri` (e.g. `http://localhost:8080/api`).
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Sets how declared parameter names are checked when building templates.
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.options.name_policy = policy;
        self
    }

    /// The configured base URI, if any.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    /// Template options derived from the registry configuration.
    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Registers a route. Names must be unique and paths well formed.
    pub fn register(&mut self, route: RouteDescriptor) -> AppResult<()> {
        route.path_variables()?;
        if self.routes.contains_key(&route.name) {
            return Err(AppError::Config(format!(
                "Route '{}' is already registered",
                route.name
            )));
        }
        self.routes.insert(route.name.clone(), route);
        Ok(())
    }

    /// Looks up a route by name.
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.get(name)
    }

    /// Iterates routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.values()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The template of a route without substituting any arguments,
    /// e.g. `/items/{id}{?sort,filter}`.
    pub fn route_template(&self, name: &str) -> AppResult<UriTemplate> {
        let route = self.lookup(name)?;
        let uri = join_base(self.base_uri.as_deref(), &route.path);
        build_template_with(&uri, &route.query_names(), &self.options)
    }

    fn lookup(&self, name: &str) -> AppResult<&RouteDescriptor> {
        self.routes
            .get(name)
            .ok_or_else(|| AppError::UnknownRoute(name.to_string()))
    }
}

impl RouteResolver for RouteRegistry {
    /// Arguments that are neither path variables nor declared query
    /// parameters are ignored.
    fn resolve(&self, invocation: &Invocation) -> AppResult<ResolvedInvocation> {
        let route = self.lookup(&invocation.route)?;
        let path = route.expand_path(&invocation.args)?;
        let mut uri = join_base(self.base_uri.as_deref(), &path);

        let mut pairs = Vec::new();
        for param in &route.query {
            match invocation.args.get(&param.name) {
                Some(value) => pairs.push(format!(
                    "{}={}",
                    utf8_percent_encode(&param.name, QUERY_COMPONENT),
                    utf8_percent_encode(value, QUERY_COMPONENT)
                )),
                None if param.required => {
                    return Err(AppError::MissingArgument {
                        route: route.name.clone(),
                        name: param.name.clone(),
                    })
                }
                None => {}
            }
        }
        if !pairs.is_empty() {
            uri.push('?');
            uri.push_str(&pairs.join("&"));
        }

        Ok(ResolvedInvocation {
            route: route.name.clone(),
            arguments: invocation.args.clone(),
            uri,
            parameter_names: route.query_names(),
        })
    }
}

fn join_base(base: Option<&str>, path: &str) -> String {
    match base {
        Some(base) if !base.is_empty() => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        _ => path.to_string(),
    }
}
