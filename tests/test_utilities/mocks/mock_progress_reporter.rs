use std::sync::{Arc, Mutex};

use blinker::prelude::*;

/// Mock ProgressReporter that records messages for assertions.
///
/// Use cases take ownership of their reporter, so tests grab a handle
/// to the message log before handing the mock over.
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded messages.
    pub fn log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.messages)
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
