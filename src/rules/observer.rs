use crate::domain::{RuleResult, ValidationRule};

/// Receives one event per evaluated rule.
pub trait RuleObserver: Send + Sync {
    fn rule_evaluated(&self, rule: &ValidationRule, result: &RuleResult);
}

/// Forwards rule events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RuleObserver for TracingObserver {
    fn rule_evaluated(&self, rule: &ValidationRule, result: &RuleResult) {
        tracing::debug!(
            rule_id = %rule.id,
            rule_name = %rule.name,
            status = %result.status,
            message = %result.message,
            "Rule applied"
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::domain::RuleStatus;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingObserver {
        pub events: Mutex<Vec<(String, RuleStatus)>>,
    }

    impl RuleObserver for RecordingObserver {
        fn rule_evaluated(&self, rule: &ValidationRule, result: &RuleResult) {
            self.events
                .lock()
                .unwrap()
                .push((rule.id.clone(), result.status));
        }
    }
}
