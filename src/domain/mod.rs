//! # Domain
//!
//! Validated, application-internal records and the error taxonomy.
//! Nothing in here does I/O; the API layer produces these from wire DTOs.

pub mod error;
pub mod person;
pub mod planet;

pub use error::{ApiError, FetchError, ValidationError};
pub use person::Person;
pub use planet::Planet;
