#![deny(missing_docs)]

//! # Route Resolution
//!
//! The seam between "which endpoint, with which arguments" and the concrete
//! URI for that call. Implementations own every lookup; the template builder
//! only consumes the resolved URI and the declared parameter names.

use crate::error::AppResult;
use indexmap::IndexMap;
use std::sync::Arc;

/// A description of a call to a named endpoint with argument values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Name the endpoint was registered under (e.g. `items.show`).
    pub route: String,
    /// Argument values keyed by parameter name, in the order supplied.
    pub args: IndexMap<String, String>,
}

impl Invocation {
    /// Creates an invocation of `route` without arguments.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            args: IndexMap::new(),
        }
    }

    /// Adds an argument value, replacing any earlier value for the same name.
    pub fn arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }

    /// Parses a `name=value` pair as supplied on a command line.
    ///
    /// Returns `None` when there is no `=` or the name is empty.
    pub fn parse_arg(pair: &str) -> Option<(String, String)> {
        let (name, value) = pair.split_once('=')?;
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.to_string()))
    }
}

/// The outcome of resolving an [`Invocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInvocation {
    /// Route the invocation targeted.
    pub route: String,
    /// Argument values used during resolution.
    pub arguments: IndexMap<String, String>,
    /// Concrete URI built from the arguments, possibly with a query string.
    pub uri: String,
    /// Declared optional query parameter names, in declaration order.
    pub parameter_names: Vec<String>,
}

/// Maps invocations to concrete URIs plus declared query parameter names.
///
/// Chosen once at startup and injected into [`crate::LinkBuilder`].
pub trait RouteResolver {
    /// Resolves a single invocation.
    fn resolve(&self, invocation: &Invocation) -> AppResult<ResolvedInvocation>;
}

impl<R: RouteResolver + ?Sized> RouteResolver for &R {
    fn resolve(&self, invocation: &Invocation) -> AppResult<ResolvedInvocation> {
        (**self).resolve(invocation)
    }
}

impl<R: RouteResolver + ?Sized> RouteResolver for Arc<R> {
    fn resolve(&self, invocation: &Invocation) -> AppResult<ResolvedInvocation> {
        (**self).resolve(invocation)
    }
}

impl<R: RouteResolver + ?Sized> RouteResolver for Box<R> {
    fn resolve(&self, invocation: &Invocation) -> AppResult<ResolvedInvocation> {
        (**self).resolve(invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl RouteResolver for Fixed {
        fn resolve(&self, invocation: &Invocation) -> AppResult<ResolvedInvocation> {
            Ok(ResolvedInvocation {
                route: invocation.route.clone(),
                arguments: invocation.args.clone(),
                uri: "/fixed".into(),
                parameter_names: vec!["q".into()],
            })
        }
    }

    #[test]
    fn test_invocation_builder_keeps_order() {
        let inv = Invocation::new("items.list").arg("page", 2).arg("sort", "asc");
        let keys: Vec<&str> = inv.args.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["page", "sort"]);
        assert_eq!(inv.args["page"], "2");
    }

    #[test]
    fn test_parse_arg() {
        assert_eq!(
            Invocation::parse_arg("id=5"),
            Some(("id".to_string(), "5".to_string()))
        );
        assert_eq!(
            Invocation::parse_arg("q=a=b"),
            Some(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(Invocation::parse_arg("novalue"), None);
        assert_eq!(Invocation::parse_arg("=x"), None);
    }

    #[test]
    fn test_resolver_through_pointers() {
        let inv = Invocation::new("any");
        let by_ref: &dyn RouteResolver = &Fixed;
        assert_eq!(by_ref.resolve(&inv).unwrap().uri, "/fixed");

        let shared: Arc<dyn RouteResolver> = Arc::new(Fixed);
        assert_eq!(shared.resolve(&inv).unwrap().parameter_names, vec!["q"]);

        let boxed: Box<dyn RouteResolver> = Box::new(Fixed);
        assert_eq!(boxed.resolve(&inv).unwrap().route, "any");
    }
}
