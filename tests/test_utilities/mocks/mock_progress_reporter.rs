use pipo_diff::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock ProgressReporter that records every message for assertions
pub struct MockProgressReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle onto the recorded messages, valid after the reporter has
    /// been moved into a use case.
    pub fn messages(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.messages)
    }

    fn record(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(message);
    }

    fn start_busy(&self, message: &str) {
        self.record(message);
    }

    fn finish_busy(&self, message: &str) {
        self.record(message);
    }

    fn report_error(&self, message: &str) {
        self.record(message);
    }
}
