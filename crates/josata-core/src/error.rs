//! Error types for the Josata site

use thiserror::Error;

/// Main error type for site logic operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Particle field configuration rejected at construction
    #[error("Invalid plexus config: {0}")]
    InvalidConfig(String),

    /// Contact form submitted with a required field empty
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    /// Contact form submitted with a malformed email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::EmptyField("subject");
        assert_eq!(format!("{}", err), "Required field is empty: subject");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SiteError::InvalidConfig("point_count must be positive".into());
        assert_eq!(
            format!("{}", err),
            "Invalid plexus config: point_count must be positive"
        );
    }
}
