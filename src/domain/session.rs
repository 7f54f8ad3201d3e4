use serde::{Deserialize, Serialize};

use crate::domain::error::ProviderError;

/// Name shown when the provider does not return a username
pub const DEFAULT_DISPLAY_NAME: &str = "Stacks User";

/// One account entry returned by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAddress {
    pub address: String,
    #[serde(default)]
    pub public_key: Option<String>,
}

/// Session payload returned by the identity provider.
/// This is also the snapshot persisted under the session storage key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
    #[serde(default)]
    pub addresses: Vec<AccountAddress>,
    #[serde(default)]
    pub username: Option<String>,
}

impl ProviderResponse {
    pub fn primary_address(&self) -> Option<&AccountAddress> {
        self.addresses.first()
    }

    pub fn to_json(&self) -> Result<String, ProviderError> {
        serde_json::to_string(self).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(json).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

/// The currently authenticated wallet user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub address: String,
    pub display_name: String,
    pub balance: u64,
    pub posts_created: u32,
    pub rewards_given: u64,
}

impl Session {
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
            balance: 0,
            posts_created: 0,
            rewards_given: 0,
        }
    }

    /// Build a session from a provider payload.
    /// Fails when the payload carries no address.
    pub fn from_response(response: &ProviderResponse) -> Result<Self, ProviderError> {
        let address = response
            .primary_address()
            .ok_or_else(|| ProviderError::InvalidResponse("no address returned".to_string()))?;
        let display_name = response
            .username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME);
        Ok(Self::new(address.address.clone(), display_name))
    }

    pub fn with_balance(mut self, balance: u64) -> Self {
        self.balance = balance;
        self
    }

    /// Mock spend; balances are not verified, so this saturates at zero.
    pub fn spend(&mut self, amount: u64) {
        self.balance = self.balance.saturating_sub(amount);
        self.rewards_given = self.rewards_given.saturating_add(amount);
    }

    pub fn record_post(&mut self) {
        self.posts_created = self.posts_created.saturating_add(1);
    }
}
