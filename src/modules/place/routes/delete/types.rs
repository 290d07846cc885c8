pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::place::NOT_FOUND_MESSAGE;

    #[derive(Debug)]
    pub enum Success {
        PlaceDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        PlaceNotFound,
        FailedToDeletePlace,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": NOT_FOUND_MESSAGE })),
                )
                    .into_response(),
                Self::FailedToDeletePlace => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to delete place" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
