// Front-facing HTTP server: landing page, pipeline trigger and stats endpoint.

mod page;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::app::App;

pub use page::render_index;

/// Build the router for the given application context.
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/api", get(api_handler))
        .route("/stats", get(stats_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(log_request))
        .with_state(app)
}

/// Bind the configured port on all interfaces and serve until the process exits.
pub async fn serve(app: Arc<App>) -> std::io::Result<()> {
    let port = app.config().port;
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    info!("Server running at http://localhost:{}/", port);
    info!("Open the URL in your browser and click the button.");
    debug!("Debug mode: {}", if app.config().debug { "ON" } else { "OFF" });
    debug!("Timeout: {} ms", app.config().timeout_ms());

    serve_on(listener, app).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, app: Arc<App>) -> std::io::Result<()> {
    axum::serve(listener, router(app)).await
}

async fn log_request(req: Request, next: Next) -> Response {
    debug!("Request received: {} {}", req.method(), req.uri());
    next.run(req).await
}

async fn index_handler(State(app): State<Arc<App>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        render_index(&app.stats()),
    )
}

async fn api_handler(State(app): State<Arc<App>>) -> impl IntoResponse {
    let run = app.run_presentation().await;

    let status_line = if run.succeeded {
        "API process finished. Check the server console."
    } else {
        "API process finished with errors. Check the server logs."
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("{}\n{}", status_line, run.output),
    )
}

async fn stats_handler(State(app): State<Arc<App>>) -> impl IntoResponse {
    Json(app.stats())
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Not Found",
    )
}
