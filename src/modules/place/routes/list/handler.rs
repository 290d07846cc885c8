use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::pagination::Pagination};
use axum::extract::{Query, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    pagination: Pagination,
    Query(filters): Query<request::Filters>,
) -> response::Response {
    service(
        ctx,
        request::Payload {
            pagination,
            filters,
        },
    )
    .await
}
