#![deny(missing_docs)]

//! # Linkt Web Binary
//!
//! Entry point for the Actix Web demo server.

use actix_web::{web, App, HttpServer};
use linkt_core::{LinkBuilder, RouteRegistry};
use linkt_web::{configure, default_registry, Links};
use std::io;
use std::net::TcpListener;
use std::path::Path;

fn build_server(listener: TcpListener, links: Links) -> io::Result<actix_web::dev::Server> {
    let links = web::Data::new(links);
    Ok(HttpServer::new(move || App::new().app_data(links.clone()).configure(configure))
        .listen(listener)?
        .run())
}

fn resolve_bind_addr() -> String {
    std::env::var("LINKT_WEB_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Routes come from `LINKT_ROUTES` when set, the built-in table otherwise.
fn load_registry() -> io::Result<RouteRegistry> {
    let registry = match std::env::var("LINKT_ROUTES") {
        Ok(path) => RouteRegistry::from_path(Path::new(&path)),
        Err(_) => default_registry(),
    };
    registry.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let links = LinkBuilder::from_registry(load_registry()?);
    let bind_addr = resolve_bind_addr();
    let listener = TcpListener::bind(&bind_addr)?;
    let server = build_server(listener, links)?;

    println!("Serving templated links on http://{}", bind_addr);

    if std::env::var("LINKT_WEB_ONESHOT").is_ok() {
        server.handle().stop(true).await;
    }

    server.await
}
