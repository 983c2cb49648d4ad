mod key_store;

pub use key_store::{InMemoryKeyStore, KeyStore};

#[cfg(test)]
pub use key_store::MockKeyStore;
