use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a project name or generator type.
    ///
    /// The name becomes a single path component, so it must be non-empty,
    /// must not be hidden and must not contain separators.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let reject = |reason: &str| {
            Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.trim().is_empty() {
            return reject("name cannot be empty");
        }
        if name.starts_with('.') {
            return reject("name cannot start with '.'");
        }
        if name.contains(['/', '\\']) {
            return reject("name cannot contain path separators");
        }
        if name.chars().any(char::is_control) {
            return reject("name cannot contain control characters");
        }

        Ok(())
    }
}
