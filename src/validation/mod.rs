//! Input checks run before an estimate is priced.

mod validate;

pub use validate::{validate_estimate, ValidationResult};
