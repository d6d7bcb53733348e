pub mod validation;

pub use validation::{ValidationEngine, ValidationService};
