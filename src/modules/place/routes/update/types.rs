pub mod request {
    pub type Body = super::super::super::body::PlaceBody;

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::place::{repository::Place, DUPLICATE_SLUG_MESSAGE, NOT_FOUND_MESSAGE},
        utils::validation,
    };

    #[derive(Debug)]
    pub enum Success {
        PlaceUpdated(Place),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceUpdated(place) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": place })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        PlaceNotFound,
        DuplicateSlug,
        FailedToFetchPlace,
        FailedToUpdatePlace,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::PlaceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": NOT_FOUND_MESSAGE })),
                )
                    .into_response(),
                Self::DuplicateSlug => (
                    StatusCode::CONFLICT,
                    Json(json!({ "success": false, "message": DUPLICATE_SLUG_MESSAGE })),
                )
                    .into_response(),
                Self::FailedToFetchPlace => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to find place" })),
                )
                    .into_response(),
                Self::FailedToUpdatePlace => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to update place" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
