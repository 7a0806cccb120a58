pub mod cake;

mod router;
pub use router::get_router;
