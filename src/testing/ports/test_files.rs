//! Shared in-memory file backing store for the filesystem test double.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory file storage shared between a test and `MockRepositoryFs`.
///
/// Tests seed files through this handle, hand a `MockRepositoryFs` to the
/// command under test, then inspect the same handle afterwards.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<String, String>>>,
    pub(crate) writes: Arc<Mutex<Vec<String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    /// Current content of a file.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Paths written through the double, in write order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}
