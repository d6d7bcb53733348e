//! Rule catalog, per-kind checks and the evaluation observer seam.

pub mod catalog;
pub mod evaluator;
pub mod observer;

pub use catalog::RuleCatalog;
pub use evaluator::{CounterpartyCheck, Outcome, RuleCheck, RuleEvaluator};
pub use observer::{RuleObserver, TracingObserver};
