pub mod validation;

pub use validation::{get_validation_result, validate_transaction};
