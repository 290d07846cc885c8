use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.places
        .find_by_id(&payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchPlace)?
        .ok_or(response::Error::PlaceNotFound)
        .map(response::Success::Place)
}
