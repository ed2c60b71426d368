//! Booking pages. Handlers are generic over the store so the same flow runs
//! against PostgreSQL in production and an in-memory store in tests.

mod create;
mod delete;
mod list;

pub use create::{create, new_form};
pub use delete::delete;
pub use list::list;
