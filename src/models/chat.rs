use serde::{ Serialize, Deserialize };

/// One completed user/assistant exchange. History is an ordered slice of
/// these, owned by the caller; the bridge only reads it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}
