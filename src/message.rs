//! The JSON body used for status messages, e.g. `{"message": "Loan updated"}`.

use serde::{Deserialize, Serialize};

/// A human readable status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The text shown to the client.
    pub message: String,
}

impl Message {
    /// Create a message from any string-like value.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
