use crate::{modules, types::Context};
use anyhow::Context as _;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub const API_PREFIX: &str = "/api";

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest(API_PREFIX, modules::get_router())
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(1024 * 64))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());
        Self { ctx, router }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router)
            .await
            .context("HTTP server terminated unexpectedly")
    }
}
