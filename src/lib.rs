//! Core crate exports for managing note vaults from the terminal.
//!
//! The root module re-exports the registry and flow types so that the binary
//! and embedders can drive vault selection without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod paths;
pub mod registry;
pub mod tui;
pub mod vault;

pub use registry::{FileStore, RegistryStore, VaultRegistry};
pub use tui::{DirectoryPicker, FlowOutcome, PickerResult, VaultEntry, VaultFlow};
pub use vault::{Vault, VaultConfig, VaultError};
