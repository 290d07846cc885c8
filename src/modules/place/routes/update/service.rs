use super::types::{request, response};
use crate::{
    modules::place::{repository, slug},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let request::Payload { id, body } = payload;

    ctx.places
        .find_by_id(&id)
        .await
        .map_err(|_| response::Error::FailedToFetchPlace)?
        .ok_or(response::Error::PlaceNotFound)?;

    let slug = slug::derive(&body.name, &body.city, &body.state);

    let conflicting = ctx
        .places
        .find_by_slug_excluding_id(&slug, Some(id.as_str()))
        .await
        .map_err(|_| response::Error::FailedToUpdatePlace)?;

    if let Some(other) = conflicting {
        tracing::info!("Rejected update of place {id}: slug {slug} is taken by {}", other.id);
        return Err(response::Error::DuplicateSlug);
    }

    ctx.places
        .update_by_id(
            &id,
            repository::UpdatePlacePayload {
                name: body.name,
                city: body.city,
                state: body.state,
                slug,
            },
        )
        .await
        .map_err(|err| match err {
            repository::Error::DuplicateSlug => response::Error::DuplicateSlug,
            repository::Error::UnexpectedError => response::Error::FailedToUpdatePlace,
        })?
        .ok_or(response::Error::PlaceNotFound)
        .map(response::Success::PlaceUpdated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::place::repository::{
        CreatePlacePayload, MemoryPlaceRepository, Place, PlaceRepository,
    };

    fn body(name: &str, city: &str, state: &str) -> request::Body {
        request::Body {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    async fn insert(repository: &MemoryPlaceRepository, name: &str, city: &str, state: &str) -> Place {
        repository
            .create(CreatePlacePayload {
                name: name.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                slug: slug::derive(name, city, state),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn recomputes_slug_from_new_fields() {
        let repository = MemoryPlaceRepository::new();
        let place = insert(&repository, "Old", "Town", "State").await;
        let ctx = Arc::new(Context::for_tests(repository));

        let response::Success::PlaceUpdated(updated) = service(
            ctx,
            request::Payload {
                id: place.id.clone(),
                body: body("New Name", "Lagos", "Lagos State"),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, place.id);
        assert_eq!(updated.slug, "new-name-lagos-lagos-state");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn saving_unchanged_fields_does_not_conflict_with_itself() {
        let repository = MemoryPlaceRepository::new();
        let place = insert(&repository, "Place", "City", "State").await;
        let ctx = Arc::new(Context::for_tests(repository));

        let response::Success::PlaceUpdated(updated) = service(
            ctx,
            request::Payload {
                id: place.id.clone(),
                body: body("Place", "City", "State"),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.slug, place.slug);
    }

    #[tokio::test]
    async fn rejects_slug_of_another_place() {
        let repository = MemoryPlaceRepository::new();
        let place = insert(&repository, "Somewhere", "Else", "Entirely").await;
        insert(&repository, "Place", "City", "State").await;
        let ctx = Arc::new(Context::for_tests(repository));

        let err = service(
            ctx.clone(),
            request::Payload {
                id: place.id.clone(),
                body: body("Place", "City", "State"),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, response::Error::DuplicateSlug));
        let unchanged = ctx.places.find_by_id(&place.id).await.unwrap().unwrap();
        assert_eq!(unchanged.slug, "somewhere-else-entirely");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let ctx = Arc::new(Context::for_tests(MemoryPlaceRepository::new()));

        let err = service(
            ctx,
            request::Payload {
                id: "01J00000000000000000000000".to_string(),
                body: body("Place", "City", "State"),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, response::Error::PlaceNotFound));
    }

    #[tokio::test]
    async fn validation_runs_before_lookup() {
        let ctx = Arc::new(Context::for_tests(MemoryPlaceRepository::new()));

        let err = service(
            ctx,
            request::Payload {
                id: "missing".to_string(),
                body: body("Place", "City", ""),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, response::Error::FailedToValidate(_)));
    }
}
