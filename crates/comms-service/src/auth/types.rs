use serde::{Deserialize, Serialize};

/// User context extracted from a verified session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub email: Option<String>,
}
