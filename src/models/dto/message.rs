use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain JSON message body, used for health responses and error payloads
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
