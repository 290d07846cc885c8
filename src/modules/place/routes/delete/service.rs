use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let place = ctx
        .places
        .delete_by_id(&payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePlace)?
        .ok_or(response::Error::PlaceNotFound)?;

    tracing::info!("Deleted place {} ({})", place.id, place.slug);

    Ok(response::Success::PlaceDeleted)
}
