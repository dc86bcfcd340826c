use serde::{Deserialize, Serialize};

/// GitHub user (subset)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
}
