use thiserror::Error;

/// Failures talking to the sales backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {status}")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Reasons a sale form is refused before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("customer is required")]
    MissingCustomer,

    #[error("item is required")]
    MissingItem,

    #[error("quantity must be a positive whole number, got {0:?}")]
    InvalidQuantity(String),

    #[error("item {item:?} has no usable price")]
    InvalidPrice { item: String },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("backend rejected the sale: {0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Text shown to the user through the alert channel.
    pub fn alert_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => "Please fill all fields correctly.".to_string(),
            SubmitError::Rejected(reason) => format!("Error adding sale: {reason}"),
            SubmitError::Api(err) => format!("Error: {err}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
