use super::types::{request, response};
use crate::{
    modules::place::{repository, slug},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let slug = slug::derive(&payload.name, &payload.city, &payload.state);

    let existing = ctx
        .places
        .find_by_slug_excluding_id(&slug, None)
        .await
        .map_err(|_| response::Error::FailedToCreatePlace)?;

    if existing.is_some() {
        tracing::info!("Rejected place with duplicate slug {slug}");
        return Err(response::Error::DuplicateSlug);
    }

    ctx.places
        .create(repository::CreatePlacePayload {
            name: payload.name,
            city: payload.city,
            state: payload.state,
            slug,
        })
        .await
        .map_err(|err| match err {
            repository::Error::DuplicateSlug => response::Error::DuplicateSlug,
            repository::Error::UnexpectedError => response::Error::FailedToCreatePlace,
        })
        .map(response::Success::PlaceCreated)
}
