pub mod repository;
mod routes;
pub mod slug;

pub use routes::get_router;

pub const PATH: &str = "/places";
pub const DUPLICATE_SLUG_MESSAGE: &str = "A record with the same slug already exists.";
pub const NOT_FOUND_MESSAGE: &str = "Place not found";
