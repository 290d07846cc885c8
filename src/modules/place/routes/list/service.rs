use super::types::{request, response};
use crate::{app::API_PREFIX, modules::place, types::Context, utils::pagination::Paginated};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let page = ctx
        .places
        .find_many(&payload.filters, &payload.pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchPlaces)?;

    let path = format!("{}{}{}", ctx.app.url, API_PREFIX, place::PATH);

    Ok(response::Success::PaginatedPlaces(Paginated::new(
        page,
        &payload.pagination,
        path,
    )))
}
