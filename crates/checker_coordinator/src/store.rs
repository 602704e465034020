use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::TabId;

/// Session-scoped storage for managed tab IDs.
///
/// Implementations survive coordinator restarts within one browser session
/// but nothing survives a full restart. An absent key reads as empty.
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Vec<TabId>;
    fn store(&self, key: &str, ids: &[TabId]);
    fn remove(&self, key: &str);
}

/// In-memory session store, the default implementation.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, Vec<TabId>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Vec<TabId> {
        self.entries
            .lock()
            .expect("session store lock")
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn store(&self, key: &str, ids: &[TabId]) {
        self.entries
            .lock()
            .expect("session store lock")
            .insert(key.to_owned(), ids.to_vec());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().expect("session store lock").remove(key);
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn load(&self, key: &str) -> Vec<TabId> {
        (**self).load(key)
    }

    fn store(&self, key: &str, ids: &[TabId]) {
        (**self).store(key, ids)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
