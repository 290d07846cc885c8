pub mod place;

mod router;
pub use router::get_router;
