//! Notification sink used by the forms to surface outcomes.
//!
//! Fire-and-forget: the forms never wait on or inspect what the sink does.
//! The site renders notices as toasts; tests record them with [`NoticeLog`].

use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify_success(&self, message: &str) {
        (**self).notify_success(message);
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message);
    }
}

/// Records every notice in order.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: RefCell<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push(Notice {
            level,
            message: message.to_string(),
        });
    }
}

impl Notifier for NoticeLog {
    fn notify_success(&self, message: &str) {
        self.push(NoticeLevel::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}
