//! Teacher observer.

use crate::observer::notification::NotificationObserver;
use log::info;
use std::cell::RefCell;

/// Observer that logs and records every submission notification it receives.
#[derive(Debug)]
pub struct Teacher {
    name: String,
    received: RefCell<Vec<String>>,
}

impl Teacher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns received notifications, oldest first.
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl NotificationObserver for Teacher {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, message: &str) {
        info!(
            "event=notification_received module=observer status=ok teacher={} message={}",
            self.name, message
        );
        self.received.borrow_mut().push(message.to_string());
    }
}
