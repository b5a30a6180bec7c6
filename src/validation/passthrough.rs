use super::{CommitValidator, ValidationResult};

/// Default validator: every message is accepted
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl CommitValidator for Passthrough {
    fn validate_message(&self, _summary: &str, _description: &str) -> ValidationResult {
        ValidationResult::ok()
    }
}
