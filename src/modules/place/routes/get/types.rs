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

    use crate::modules::place::{repository::Place, NOT_FOUND_MESSAGE};

    #[derive(Debug)]
    pub enum Success {
        Place(Place),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Place(place) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": place })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        PlaceNotFound,
        FailedToFetchPlace,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": NOT_FOUND_MESSAGE })),
                )
                    .into_response(),
                Self::FailedToFetchPlace => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch place" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
