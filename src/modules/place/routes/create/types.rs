pub mod request {
    pub type Body = super::super::super::body::PlaceBody;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::place::{repository::Place, DUPLICATE_SLUG_MESSAGE},
        utils::validation,
    };

    #[derive(Debug)]
    pub enum Success {
        PlaceCreated(Place),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceCreated(place) => (
                    StatusCode::CREATED,
                    Json(json!({ "success": true, "data": place })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        DuplicateSlug,
        FailedToCreatePlace,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::DuplicateSlug => (
                    StatusCode::CONFLICT,
                    Json(json!({ "success": false, "message": DUPLICATE_SLUG_MESSAGE })),
                )
                    .into_response(),
                Self::FailedToCreatePlace => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to create place" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
