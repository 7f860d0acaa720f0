use std::fmt;

#[derive(Debug)]
pub enum AssetGenError {
    ConfigError(String),
    RequestError(String),
    ResponseError(String),
    ImageError(String),
    IoError(String),
}

impl fmt::Display for AssetGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetGenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AssetGenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            AssetGenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            AssetGenError::ImageError(msg) => write!(f, "Image error: {}", msg),
            AssetGenError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AssetGenError {}

pub type Result<T> = std::result::Result<T, AssetGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssetGenError::ConfigError("DEEPINFRA_TOKEN not set".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: DEEPINFRA_TOKEN not set"
        );

        let err = AssetGenError::ResponseError("HTTP 429".into());
        assert_eq!(err.to_string(), "Response error: HTTP 429");
    }
}
