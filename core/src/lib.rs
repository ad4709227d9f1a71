#![deny(missing_docs)]

//! # Linkt Core
//!
//! Builds RFC 6570 URI templates advertising an endpoint's optional query
//! parameters, starting from the concrete URI of a resolved invocation.

/// Shared error types.
pub mod error;

/// Template construction.
pub mod template;

/// Link value objects.
pub mod link;

/// Resolver strategy interface.
pub mod resolver;

/// Startup route table.
pub mod registry;

/// Route manifest loading.
pub mod manifest;

/// OpenAPI route import.
pub mod openapi;

/// Resolver-backed link building.
pub mod builder;

pub use builder::LinkBuilder;
pub use error::{AppError, AppResult};
pub use link::Link;
pub use manifest::RouteManifest;
pub use openapi::manifest_from_openapi_yaml;
pub use registry::{QueryParam, RouteDescriptor, RouteRegistry};
pub use resolver::{Invocation, ResolvedInvocation, RouteResolver};
pub use template::{build_template, build_template_with, NamePolicy, TemplateOptions, UriTemplate};
