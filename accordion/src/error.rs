use thiserror::Error;

/// Construction-time failure. No other widget operation has an error path:
/// opening an open item, closing a closed one and repeated init/destroy are
/// all defined as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("accordion requires at least one item")]
    NoItems,
    #[error("accordion item {index}: trigger is not an HTML element")]
    InvalidTrigger { index: usize },
    #[error("accordion item {index}: panel is not an HTML element")]
    InvalidPanel { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_item() {
        let err = ConfigurationError::InvalidTrigger { index: 2 };
        assert_eq!(
            err.to_string(),
            "accordion item 2: trigger is not an HTML element"
        );
        let err = ConfigurationError::InvalidPanel { index: 0 };
        assert_eq!(
            err.to_string(),
            "accordion item 0: panel is not an HTML element"
        );
        assert_eq!(
            ConfigurationError::NoItems.to_string(),
            "accordion requires at least one item"
        );
    }
}
