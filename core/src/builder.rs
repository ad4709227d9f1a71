#![deny(missing_docs)]

//! # Link Builder
//!
//! Glues a [`RouteResolver`] to the template builder. The resolver is
//! injected once and never swapped, so a builder can be shared freely across
//! threads when its resolver can.

use crate::error::AppResult;
use crate::link::Link;
use crate::registry::RouteRegistry;
use crate::resolver::{Invocation, RouteResolver};
use crate::template::{build_template_with, TemplateOptions, UriTemplate};

/// Builds templated links for endpoint invocations.
#[derive(Debug, Clone)]
pub struct LinkBuilder<R> {
    resolver: R,
    options: TemplateOptions,
}

impl<R: RouteResolver> LinkBuilder<R> {
    /// Creates a builder that embeds parameter names verbatim.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            options: TemplateOptions::default(),
        }
    }

    /// Overrides the template options.
    pub fn with_options(mut self, options: TemplateOptions) -> Self {
        self.options = options;
        self
    }

    /// The injected resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolves the invocation and builds its URI template.
    pub fn template_for(&self, invocation: &Invocation) -> AppResult<UriTemplate> {
        let resolved = self.resolver.resolve(invocation)?;
        build_template_with(&resolved.uri, &resolved.parameter_names, &self.options)
    }

    /// Resolves the invocation and wraps its template in a `self` link.
    pub fn link_to(&self, invocation: &Invocation) -> AppResult<Link> {
        Ok(Link::of(self.template_for(invocation)?))
    }
}

impl LinkBuilder<RouteRegistry> {
    /// Creates a builder using the registry's own naming policy.
    pub fn from_registry(registry: RouteRegistry) -> Self {
        let options = *registry.options();
        Self::new(registry).with_options(options)
    }
}
