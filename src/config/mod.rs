//! Configuration module for walletbook
//!
//! - Path resolution (env override, XDG, platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WalletPaths;
pub use settings::{Backend, Settings};
