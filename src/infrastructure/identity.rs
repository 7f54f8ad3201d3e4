//! Identity provider
//!
//! The forum never talks to a wallet directly. Everything goes through
//! [`IdentityProvider`], which the command executor drives on background tasks.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};

use nostr_sdk::prelude::{Keys, ToBech32};
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    domain::{
        error::ProviderError,
        session::{AccountAddress, ProviderResponse},
    },
    infrastructure::config::WalletConfig,
};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ProviderError>> + Send + 'a>>;

pub const METHOD_GET_ACCOUNTS: &str = "get_accounts";
pub const METHOD_GET_BALANCE: &str = "get_balance";

/// External wallet collaborator
pub trait IdentityProvider: Send + Sync {
    /// Whether the provider already holds an authenticated session
    fn check_connected(&self) -> bool;

    /// Prompt the user to authenticate and return the session payload
    fn connect(&self) -> ProviderFuture<'_, ProviderResponse>;

    /// Drop the provider-side session
    fn disconnect(&self) -> Result<(), ProviderError>;

    /// Session payload held by the provider, if any
    fn read_local_session(&self) -> Option<ProviderResponse>;

    /// Generic account request such as `get_accounts` or `get_balance`
    fn request(&self, method: &str, params: Value) -> ProviderFuture<'_, Value>;
}

/// Wallet backed by a local nostr key pair.
/// The address is the bech32 `npub` of the public key.
pub struct LocalWallet {
    keys: Keys,
    username: Option<String>,
    balance: u64,
    auto_approve: bool,
    connected: AtomicBool,
}

impl LocalWallet {
    pub fn new(keys: Keys, username: Option<String>, balance: u64, auto_approve: bool) -> Self {
        Self {
            keys,
            username,
            balance,
            auto_approve,
            connected: AtomicBool::new(false),
        }
    }

    /// Build the wallet from config, generating a throwaway key pair when no key is set
    pub fn from_config(config: &WalletConfig) -> Result<Self, ProviderError> {
        let secret = config.privatekey.expose_secret();
        let keys = if secret.trim().is_empty() {
            log::info!("No wallet private key configured; generating an ephemeral key pair");
            Keys::generate()
        } else {
            Keys::parse(secret.trim())
                .map_err(|e| ProviderError::InvalidResponse(format!("invalid private key: {e}")))?
        };
        let username = Some(config.username.trim().to_string()).filter(|name| !name.is_empty());
        Ok(Self::new(
            keys,
            username,
            config.initial_balance,
            config.auto_approve,
        ))
    }

    pub fn address(&self) -> String {
        let public_key = self.keys.public_key();
        match public_key.to_bech32() {
            Ok(npub) => npub,
            Err(_) => public_key.to_hex(),
        }
    }

    fn response(&self) -> ProviderResponse {
        ProviderResponse {
            addresses: vec![AccountAddress {
                address: self.address(),
                public_key: Some(self.keys.public_key().to_hex()),
            }],
            username: self.username.clone(),
        }
    }

    /// Balances are public; account details need an authenticated session
    fn handle_request(&self, method: &str) -> Result<Value, ProviderError> {
        match method {
            METHOD_GET_ACCOUNTS if !self.check_connected() => Err(ProviderError::NotConnected),
            METHOD_GET_ACCOUNTS => serde_json::to_value(self.response())
                .map_err(|e| ProviderError::InvalidResponse(e.to_string())),
            METHOD_GET_BALANCE => Ok(json!({ "balance": self.balance })),
            other => Err(ProviderError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl IdentityProvider for LocalWallet {
    fn check_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn connect(&self) -> ProviderFuture<'_, ProviderResponse> {
        Box::pin(async move {
            if !self.auto_approve {
                return Err(ProviderError::Rejected);
            }
            self.connected.store(true, Ordering::SeqCst);
            Ok(self.response())
        })
    }

    fn disconnect(&self) -> Result<(), ProviderError> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn read_local_session(&self) -> Option<ProviderResponse> {
        self.check_connected().then(|| self.response())
    }

    fn request(&self, method: &str, _params: Value) -> ProviderFuture<'_, Value> {
        let result = self.handle_request(method);
        Box::pin(async move { result })
    }
}

/// Parse the `get_balance` reply
pub fn balance_from_value(value: &Value) -> Result<u64, ProviderError> {
    value
        .get("balance")
        .and_then(Value::as_u64)
        .ok_or_else(|| ProviderError::InvalidResponse(format!("missing balance in {value}")))
}

/// Parse the `get_accounts` reply
pub fn accounts_from_value(value: Value) -> Result<ProviderResponse, ProviderError> {
    serde_json::from_value(value).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}
