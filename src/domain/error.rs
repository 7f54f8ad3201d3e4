use thiserror::Error;

/// Failures surfaced by the identity provider or the session storage behind it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("request rejected by wallet")]
    Rejected,
    #[error("wallet is not connected")]
    NotConnected,
    #[error("unsupported request method: {0}")]
    UnsupportedMethod(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("session storage failure: {0}")]
    Storage(String),
}

/// Errors produced by forum actions. They are always turned into a
/// notification at the action boundary and never end the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForumError {
    #[error("{0}")]
    Validation(String),
    #[error("post {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ForumError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Message shown to the user in an error toast
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::NotFound(id) => format!("Post #{id} no longer exists"),
            Self::Provider(_) => "Wallet connection failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_message() {
        assert_eq!(
            ForumError::validation("Please fill in all fields!").user_message(),
            "Please fill in all fields!"
        );
        assert_eq!(ForumError::NotFound(7).user_message(), "Post #7 no longer exists");
        assert_eq!(
            ForumError::from(ProviderError::Rejected).user_message(),
            "Wallet connection failed"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ForumError::NotFound(3).to_string(), "post 3 not found");
        assert_eq!(
            ForumError::from(ProviderError::UnsupportedMethod("stx_transferStx".into()))
                .to_string(),
            "unsupported request method: stx_transferStx"
        );
    }
}
