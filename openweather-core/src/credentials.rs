use std::{collections::HashMap, fmt::Debug, path::PathBuf};

use crate::Config;

/// Source of named API keys.
///
/// The client calls [`read`](CredentialStore::read) before looking a key up and
/// [`clear`](CredentialStore::clear) right after, so a store only needs to hold
/// secrets in memory for the duration of one lookup.
pub trait CredentialStore: Send + Sync + Debug {
    fn read(&mut self) -> anyhow::Result<()>;

    fn api_key(&self, service: &str) -> Option<String>;

    fn clear(&mut self);
}

/// Reads keys from the `[api_keys]` table of a config file.
#[derive(Debug, Clone)]
pub struct ConfigCredentialStore {
    path: PathBuf,
    keys: HashMap<String, String>,
}

impl ConfigCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keys: HashMap::new(),
        }
    }
}

impl CredentialStore for ConfigCredentialStore {
    fn read(&mut self) -> anyhow::Result<()> {
        self.keys = Config::load_from(&self.path)?.api_keys;
        Ok(())
    }

    fn api_key(&self, service: &str) -> Option<String> {
        self.keys.get(service).cloned()
    }

    fn clear(&mut self) {
        self.keys.clear();
    }
}
