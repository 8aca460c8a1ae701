use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::get,
};
use leptos::prelude::*;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::ui::app::App;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    // A "disabled" timeout is just a very large one, which keeps the
    // router type independent of the setting.
    let timeout = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(config.resilience.request_timeout_secs)
    };

    let app = router(timeout);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
#[must_use]
pub fn router(timeout: Duration) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
}

/// GET / - render the chat application shell.
async fn index_handler() -> impl IntoResponse {
    Html(render_app())
}

/// Render the Leptos application to an HTML string.
///
/// Each request gets its own reactive owner, dropped with the response.
#[must_use]
pub fn render_app() -> String {
    let owner = Owner::new();
    let html = owner.with(|| view! { <App /> }.to_html());
    drop(owner);
    html
}
