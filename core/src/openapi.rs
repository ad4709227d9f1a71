#![deny(missing_docs)]

//! # OpenAPI Import
//!
//! Derives a route manifest from an OpenAPI document. Every operation with an
//! `operationId` becomes a route; its `in: query` parameters become the
//! declared query parameters, path-item parameters first.
//!
//! Local `#/components/parameters/...` references are followed. External
//! references are skipped, no documents are fetched.

use crate::error::{AppError, AppResult};
use crate::manifest::RouteManifest;
use crate::registry::{QueryParam, RouteDescriptor, RouteRegistry};
use serde_json::Value as JsonValue;

const METHODS: [&str; 9] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace", "query",
];

/// Builds a manifest from an OpenAPI document in YAML (or JSON) form.
pub fn manifest_from_openapi_yaml(yaml: &str) -> AppResult<RouteManifest> {
    let raw: JsonValue = serde_yaml::from_str(yaml)
        .map_err(|e| AppError::Config(format!("Failed to parse OpenAPI YAML: {}", e)))?;
    manifest_from_openapi_value(&raw)
}

/// Builds a manifest from an already parsed OpenAPI document.
pub fn manifest_from_openapi_value(doc: &JsonValue) -> AppResult<RouteManifest> {
    if doc.get("openapi").is_none() && doc.get("swagger").is_none() {
        return Err(AppError::Config(
            "Document is missing the 'openapi' version field".into(),
        ));
    }

    let mut routes = Vec::new();
    if let Some(paths) = doc.get("paths").and_then(JsonValue::as_object) {
        for (path, item) in paths {
            if path.starts_with("x-") {
                continue;
            }
            let shared = query_params(doc, item.get("parameters"));

            for method in METHODS {
                let Some(op) = item.get(method) else {
                    continue;
                };
                let Some(op_id) = op.get("operationId").and_then(JsonValue::as_str) else {
                    continue;
                };

                let mut query = shared.clone();
                for param in query_params(doc, op.get("parameters")) {
                    match query.iter_mut().find(|q| q.name == param.name) {
                        Some(existing) => *existing = param,
                        None => query.push(param),
                    }
                }

                routes.push(RouteDescriptor {
                    name: op_id.to_string(),
                    path: path.clone(),
                    query,
                });
            }
        }
    }

    Ok(RouteManifest {
        base_uri: server_url(doc),
        routes,
        ..RouteManifest::default()
    })
}

impl RouteRegistry {
    /// Builds a registry from an OpenAPI document.
    pub fn from_openapi_yaml(yaml: &str) -> AppResult<Self> {
        manifest_from_openapi_yaml(yaml)?.into_registry()
    }
}

fn query_params(doc: &JsonValue, params: Option<&JsonValue>) -> Vec<QueryParam> {
    let Some(list) = params.and_then(JsonValue::as_array) else {
        return Vec::new();
    };

    list.iter()
        .filter_map(|p| resolve_parameter(doc, p))
        .filter(|p| p.get("in").and_then(JsonValue::as_str) == Some("query"))
        .filter_map(|p| {
            let name = p.get("name").and_then(JsonValue::as_str)?;
            let required = p
                .get("required")
                .and_then(JsonValue::as_bool)
                .unwrap_or(false);
            Some(QueryParam {
                name: name.to_string(),
                required,
            })
        })
        .collect()
}

fn resolve_parameter<'a>(doc: &'a JsonValue, param: &'a JsonValue) -> Option<&'a JsonValue> {
    match param.get("$ref").and_then(JsonValue::as_str) {
        Some(reference) => {
            let pointer = reference.strip_prefix('#')?;
            doc.pointer(pointer)
        }
        None => Some(param),
    }
}

/// First server URL, with server variables replaced by their defaults.
fn server_url(doc: &JsonValue) -> Option<String> {
    let server = doc.get("servers")?.as_array()?.first()?;
    let mut url = server.get("url")?.as_str()?.to_string();
    if let Some(vars) = server.get("variables").and_then(JsonValue::as_object) {
        for (name, var) in vars {
            if let Some(default) = var.get("default").and_then(JsonValue::as_str) {
                url = url.replace(&format!("{{{}}}", name), default);
            }
        }
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Invocation, RouteResolver};
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
openapi: 3.1.0
info: {title: Items, version: 1.0.0}
servers:
  - url: https://{host}/api
    variables:
      host: {default: example.com}
paths:
  /items:
    parameters:
      - {name: page, in: query}
      - {name: X-Trace, in: header}
    get:
      operationId: listItems
      parameters:
        - $ref: '#/components/parameters/Sort'
        - {name: page, in: query, required: true}
      responses:
        '200': {description: OK}
    post:
      operationId: createItem
      responses:
        '201': {description: Created}
  /items/{id}:
    get:
      operationId: getItem
      parameters:
        - {name: id, in: path, required: true}
        - {name: expand, in: query}
      responses:
        '200': {description: OK}
    delete:
      responses:
        '204': {description: Deleted}
components:
  parameters:
    Sort: {name: sort, in: query}
"#;

    #[test]
    fn test_routes_from_operations() {
        let manifest = manifest_from_openapi_yaml(DOC).unwrap();
        let names: Vec<&str> = manifest.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["listItems", "createItem", "getItem"]);
        assert_eq!(manifest.base_uri.as_deref(), Some("https://example.com/api"));
    }

    #[test]
    fn test_operation_parameters_override_path_level() {
        let manifest = manifest_from_openapi_yaml(DOC).unwrap();
        assert_eq!(
            manifest.routes[0].query,
            vec![QueryParam::required("page"), QueryParam::optional("sort")]
        );
        assert_eq!(manifest.routes[1].query, vec![QueryParam::optional("page")]);
        assert_eq!(manifest.routes[2].query, vec![QueryParam::optional("expand")]);
    }

    #[test]
    fn test_registry_from_openapi() {
        let registry = RouteRegistry::from_openapi_yaml(DOC).unwrap();
        let resolved = registry
            .resolve(&Invocation::new("getItem").arg("id", 3).arg("expand", "owner"))
            .unwrap();
        assert_eq!(resolved.uri, "https://example.com/api/items/3?expand=owner");
    }

    #[test]
    fn test_rejects_non_openapi_document() {
        let err = manifest_from_openapi_yaml("routes: []").unwrap_err();
        assert!(format!("{}", err).contains("openapi"));
    }

    #[test]
    fn test_unresolvable_ref_skipped() {
        let doc = r#"
openapi: 3.1.0
paths:
  /a:
    get:
      operationId: a
      parameters:
        - $ref: 'other.yaml#/components/parameters/X'
        - $ref: '#/components/parameters/Missing'
"#;
        let manifest = manifest_from_openapi_yaml(doc).unwrap();
        assert!(manifest.routes[0].query.is_empty());
    }
}
