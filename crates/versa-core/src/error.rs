//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersaError {
    /// An explicitly requested version was never declared as a boundary.
    #[error("VERSION/{0} is not a valid API version")]
    NotRegistered(String),

    /// Direct field read found no such field: (resource, field).
    #[error("LOOKUP/{0} has no field `{1}`")]
    Lookup(String, String),

    #[error("SCHEMA/{0}")]
    Schema(String),
}

impl VersaError {
    pub fn not_registered(version: impl Into<String>) -> Self {
        Self::NotRegistered(version.into())
    }

    pub fn lookup(resource: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Lookup(resource.into(), field.into())
    }
}

pub type Result<T> = std::result::Result<T, VersaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered_message() {
        let err = VersaError::not_registered("2.1.0");
        assert_eq!(err.to_string(), "VERSION/2.1.0 is not a valid API version");
    }

    #[test]
    fn test_lookup_message() {
        let err = VersaError::lookup("user", "email");
        assert_eq!(err.to_string(), "LOOKUP/user has no field `email`");
    }
}
