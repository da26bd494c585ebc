//! # Application Layer
//!
//! Use cases over the persistence ports and the errors they return.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
