use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Convenience type alias for Results with TabError
pub type Result<T> = std::result::Result<T, TabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: TabError = json_err.into();
        assert!(matches!(err, TabError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = TabError::Snapshot("duplicate tab id 't1'".to_string());
        assert_eq!(err.to_string(), "Snapshot error: duplicate tab id 't1'");
    }
}
