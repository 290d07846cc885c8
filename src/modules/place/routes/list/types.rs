pub mod request {
    use crate::{modules::place::repository, utils::pagination::Pagination};

    pub type Filters = repository::Filters;

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::place::repository::Place, utils::pagination::Paginated};

    #[derive(Debug)]
    pub enum Success {
        PaginatedPlaces(Paginated<Place>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaginatedPlaces(places) => (StatusCode::OK, Json(places)).into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToFetchPlaces,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPlaces => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch places" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
