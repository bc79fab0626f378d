/// Password-strength policy.
///
/// Validates plaintext passwords before they are accepted for hashing.
/// Pure check, collects every violation rather than stopping at the first.
pub struct PasswordPolicy;

impl PasswordPolicy {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 255;

    /// Validate a plaintext password against the policy.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    /// Unit if the password satisfies the policy
    ///
    /// # Errors
    /// List of human-readable violations
    pub fn validate(password: &str) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let length = password.chars().count();

        if length < Self::MIN_LENGTH {
            errors.push(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        if length > Self::MAX_LENGTH {
            errors.push(format!(
                "Password must be at most {} characters",
                Self::MAX_LENGTH
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(PasswordPolicy::validate("Password123").is_ok());
    }

    #[test]
    fn test_minimum_length_boundary() {
        assert!(PasswordPolicy::validate("eightch8").is_ok());
        assert!(PasswordPolicy::validate("seven77").is_err());
    }

    #[test]
    fn test_too_short() {
        let errors = PasswordPolicy::validate("short").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "Password must be at least 8 characters");
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(256);
        let errors = PasswordPolicy::validate(&long).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "Password must be at most 255 characters");
    }
}
