use pipo_diff::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock OutputPresenter that captures presented content
pub struct MockOutputPresenter {
    captured: Rc<RefCell<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self {
            captured: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle onto the captured output, valid after the presenter has
    /// been moved into a use case.
    pub fn captured(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.captured)
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.captured.borrow_mut().push(content.to_string());
        Ok(())
    }
}
