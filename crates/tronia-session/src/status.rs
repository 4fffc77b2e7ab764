//! Session status reporting

use serde::{Deserialize, Serialize};

/// State of the external wallet link, as reported by the host
/// integration. The session never talks to a wallet itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletLink {
    /// Wallet extension not installed
    Missing,
    /// Installed but not logged in
    Locked,
    /// Ready to use
    Connected,
}

/// Poll-driven session health. The UI queries this proactively every few
/// seconds; channel and balance problems are reported here instead of
/// failing individual calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    NeedsInstall,
    NeedsLogin,
    NoChannel,
    InsufficientBalance,
    Ready,
    Error,
}
