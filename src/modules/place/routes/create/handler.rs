use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::validation::RequestBody};
use axum::extract::State;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    RequestBody(body): RequestBody<request::Body>,
) -> response::Response {
    service(ctx, body).await
}
