//! # Blog API
//!
//! Actix-web server exposing CRUD endpoints for blog posts under `/posts`.

use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, web};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use observability::RequestIdMiddleware;
use state::AppState;

/// Build the HTTP server on an already bound listener.
///
/// The returned [`Server`] must be awaited (or spawned) to start serving;
/// use [`Server::handle`] to stop it.
pub fn run(listener: TcpListener, state: AppState, workers: usize) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .workers(workers)
    .listen(listener)?
    .run();

    Ok(server)
}
