//! Classroom booking rules and the submission flow built on them.

pub mod request;
pub mod service;
pub mod slots;
pub mod validator;

pub use request::{BookingKey, BookingRequest};
pub use service::{Identity, SubmitOutcome};
pub use validator::{Advisory, Category, Rejection, Severity, Verdict, validate};
