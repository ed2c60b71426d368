pub mod booking;
pub mod classroom;
pub mod user;
