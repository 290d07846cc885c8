use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::validation::RequestBody};
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    RequestBody(body): RequestBody<request::Body>,
) -> response::Response {
    service(ctx, request::Payload { id, body }).await
}
