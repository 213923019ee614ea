//! Wallet session provider.
//!
//! Connecting means: authorize with the extension, list accounts, adopt the
//! first one as the active identity. No account picker exists. The session
//! lives in memory only and is discarded when the process (or page) ends.

use crate::error::{ErrorKind, Result};
use crate::interface::WalletApi;
use crate::model::structs::Account;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Connecting,
    Connected(Account),
    /// Flattened description of whatever went wrong; the user retries manually.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    state: SessionState,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The loading flag the UI renders while the handshake is in flight.
    pub fn is_connecting(&self) -> bool {
        matches!(self.state, SessionState::Connecting)
    }

    pub fn account(&self) -> Option<&Account> {
        match self.state {
            SessionState::Connected(ref account) => Some(account),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self.state {
            SessionState::Failed(ref msg) => Some(msg),
            _ => None,
        }
    }

    /// Idle/Failed -> Connecting -> Connected or Failed. Every exit path
    /// leaves `is_connecting()` false; a stuck "connecting" state would
    /// otherwise wedge the connect button forever.
    pub async fn connect(&mut self, wallet: &impl WalletApi, app_name: &str) -> Result<Account> {
        self.state = SessionState::Connecting;

        match authorize(wallet, app_name).await {
            Ok(account) => {
                self.state = SessionState::Connected(account.clone());
                Ok(account)
            }
            Err(e) => {
                self.state = SessionState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}

async fn authorize(wallet: &impl WalletApi, app_name: &str) -> Result<Account> {
    let extensions = wallet.enable(app_name).await?;
    if extensions.is_empty() {
        return Err(ErrorKind::NoExtensionFound.into());
    }

    let accounts = wallet.accounts().await?;
    // First account wins; there is no selection UI.
    accounts
        .into_iter()
        .next()
        .ok_or_else(|| ErrorKind::NoAccountsFound.into())
}
