use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Account;

/// Candidate record bound from a create request. Omitted fields fall back
/// to their zero values, so a missing name is rejected the same way an
/// empty one is.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewAccount {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub balance: i64,
}

/// Full-replace body for updates. The target id comes from the path, never
/// from the body; omitted fields overwrite with zero values (not a patch).
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateAccount {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub balance: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub balance: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            balance: account.balance,
            created_at: account.created_at.to_string(),
            updated_at: account.updated_at.to_string(),
        }
    }
}
