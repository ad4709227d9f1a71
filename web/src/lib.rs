#![deny(missing_docs)]

//! # Linkt Web Library
//!
//! Demo handlers whose JSON responses carry templated `_links`.
//! The link builder is created once at startup and shared as app data.

use actix_web::{error, get, web, HttpResponse, Responder};
use linkt_core::{AppResult, Invocation, LinkBuilder, QueryParam, RouteDescriptor, RouteRegistry};
use serde::Deserialize;
use serde_json::json;

/// The link builder shared by all workers.
pub type Links = LinkBuilder<RouteRegistry>;

/// The routes served by this app, as known to the link builder.
pub fn default_registry() -> AppResult<RouteRegistry> {
    let mut registry = RouteRegistry::new();
    registry.register(
        RouteDescriptor::new("items.list", "/items")
            .with_query(QueryParam::optional("page"))
            .with_query(QueryParam::optional("size"))
            .with_query(QueryParam::optional("sort")),
    )?;
    registry.register(
        RouteDescriptor::new("items.show", "/items/{id}").with_query(QueryParam::optional("expand")),
    )?;
    Ok(registry)
}

/// Registers the handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_items)
        .service(get_item);
}

/// A simple health check handler.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// Paging options for the item list.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
    /// Sort key.
    pub sort: Option<String>,
}

/// Options for a single item.
#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    /// Related resource to inline.
    pub expand: Option<String>,
}

fn with_optional(inv: Invocation, name: &str, value: Option<impl ToString>) -> Invocation {
    match value {
        Some(v) => inv.arg(name, v),
        None => inv,
    }
}

/// Lists a page of items.
#[get("/items")]
pub async fn list_items(
    query: web::Query<ListQuery>,
    links: web::Data<Links>,
) -> actix_web::Result<HttpResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let size = query.size.unwrap_or(10).clamp(1, 100);

    let current = with_optional(
        Invocation::new("items.list").arg("page", page).arg("size", size),
        "sort",
        query.sort.as_deref(),
    );
    let self_link = links.link_to(&current).map_err(error::ErrorInternalServerError)?;

    let last = page
        .checked_mul(size)
        .ok_or_else(|| error::ErrorBadRequest(format!("page {} is out of range", page)))?;
    let first = last - size + 1;

    let mut items = Vec::new();
    for id in first..=last {
        let item = links
            .link_to(&Invocation::new("items.show").arg("id", id))
            .map_err(error::ErrorInternalServerError)?
            .with_rel("item");
        items.push(json!({ "id": id, "_links": { "self": item } }));
    }

    Ok(HttpResponse::Ok().json(json!({
        "items": items,
        "_links": { "self": self_link },
    })))
}

/// Returns a single item.
#[get("/items/{id}")]
pub async fn get_item(
    path: web::Path<u64>,
    query: web::Query<ItemQuery>,
    links: web::Data<Links>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();

    let current = with_optional(
        Invocation::new("items.show").arg("id", id),
        "expand",
        query.expand.as_deref(),
    );
    let self_link = links.link_to(&current).map_err(error::ErrorInternalServerError)?;
    let collection = links
        .link_to(&Invocation::new("items.list"))
        .map_err(error::ErrorInternalServerError)?
        .with_rel("collection");

    Ok(HttpResponse::Ok().json(json!({
        "id": id,
        "name": format!("Item {}", id),
        "_links": { "self": self_link, "collection": collection },
    })))
}
