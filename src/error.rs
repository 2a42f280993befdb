//! Error types and handling for cowbuffer

/// Result type alias for cowbuffer operations
pub type Result<T> = std::result::Result<T, CowBufferError>;

/// Error types for copy-on-write buffer operations
#[derive(Debug, thiserror::Error)]
pub enum CowBufferError {
    /// Operation attempted on a handle with no live storage reference
    #[error("Invalid handle: {operation} called on a closed or detached handle")]
    InvalidHandle { operation: String },

    /// Text view requested on a zero-length buffer
    #[error("Empty buffer: {operation} requires non-empty storage")]
    EmptyBuffer { operation: String },

    /// Text view requested over bytes that are not valid UTF-8
    #[error("Invalid text: buffer content is not valid UTF-8")]
    InvalidText {
        #[source]
        source: std::str::Utf8Error,
    },

    /// Invalid parameters or configuration
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },
}

impl CowBufferError {
    /// Create an invalid handle error for the named operation
    pub fn invalid_handle(operation: impl Into<String>) -> Self {
        Self::InvalidHandle {
            operation: operation.into(),
        }
    }

    /// Create an empty buffer error for the named operation
    pub fn empty_buffer(operation: impl Into<String>) -> Self {
        Self::EmptyBuffer {
            operation: operation.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}

impl From<std::str::Utf8Error> for CowBufferError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::InvalidText { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CowBufferError::invalid_handle("update");
        assert!(matches!(err, CowBufferError::InvalidHandle { .. }));

        let err = CowBufferError::empty_buffer("as_text");
        assert!(matches!(err, CowBufferError::EmptyBuffer { .. }));

        let err = CowBufferError::invalid_parameter("capacity", "must be non-zero");
        assert!(matches!(err, CowBufferError::InvalidParameter { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = CowBufferError::invalid_handle("try_clone");
        let display = format!("{}", err);
        assert!(display.contains("Invalid handle"));
        assert!(display.contains("try_clone"));

        let err = CowBufferError::empty_buffer("as_text");
        let display = format!("{}", err);
        assert!(display.contains("Empty buffer"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let invalid = [0xFFu8, 0xFE];
        let utf8_err = std::str::from_utf8(&invalid).unwrap_err();
        let err: CowBufferError = utf8_err.into();
        assert!(matches!(err, CowBufferError::InvalidText { .. }));
    }
}
