//! String-keyed persistent mapping used as the only durability mechanism.
//!
//! Mirrors the browser's `localStorage`: values are opaque strings, callers
//! encode structured data themselves.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Trait for key/value storage backends
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
