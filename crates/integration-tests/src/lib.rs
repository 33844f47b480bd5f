//! Integration tests for Clay Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clay-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shared_store` - Storefront and admin over one data directory
//! - `persistence` - On-disk layout and recovery from bad data
//!
//! Every test gets its own temporary data directory through [`TestContext`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use tempfile::TempDir;

use clay_market_admin::AdminCredentials;
use clay_market_core::{FileStore, StorageError};

/// Admin username used by [`TestContext`].
pub const ADMIN_USERNAME: &str = "potter";
/// Admin password used by [`TestContext`].
pub const ADMIN_PASSWORD: &str = "kiln-fired-9";

/// A temporary data directory with a file store over it.
pub struct TestContext {
    dir: TempDir,
    pub store: FileStore,
    pub credentials: AdminCredentials,
}

impl TestContext {
    /// Create a fresh, empty data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn new() -> Result<Self, StorageError> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path())?;
        Ok(Self {
            dir,
            store,
            credentials: AdminCredentials::new(
                ADMIN_USERNAME.to_owned(),
                SecretString::from(ADMIN_PASSWORD),
            ),
        })
    }

    /// Open a second store over the same directory, as another process would.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory has gone away.
    pub fn reopen(&self) -> Result<FileStore, StorageError> {
        FileStore::open(self.dir.path())
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn file_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{key}.json"))
    }
}
