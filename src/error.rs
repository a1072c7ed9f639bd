//! Widget error types.

/// The single error kind raised by widget constructors and append paths.
///
/// Carries the name of the offending parameter and a human-readable reason.
/// Raised synchronously at the point of violation and never caught inside
/// the library; the caller is the sole recovery point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid parameter \"{param}\": {reason}")]
pub struct InvalidParameter {
    /// Name of the parameter that failed validation.
    pub param: String,
    /// Why it was rejected.
    pub reason: String,
}

impl InvalidParameter {
    pub fn new(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_format() {
        let err = InvalidParameter::new("msg", "It should be a non-empty string");
        assert_eq!(
            err.to_string(),
            "Invalid parameter \"msg\": It should be a non-empty string"
        );
    }
}
