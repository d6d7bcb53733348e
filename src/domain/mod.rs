//! Domain entities shared by the rule engine and the HTTP boundary.

pub mod rule;
pub mod transaction;
pub mod validation;

pub use rule::{RuleDefinition, RuleKind, ValidationRule};
pub use transaction::{Counterparty, ValidationRequest};
pub use validation::{RuleResult, RuleStatus, ValidationResult, ValidationStatus};
