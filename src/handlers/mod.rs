//! Entry points for the view layer.
//!
//! Each handler performs one user action and pushes exactly one notification:
//! a success message when state changed, an error message when it did not.
//! No-ops (dropping a card on its own column, deleting a missing template)
//! stay silent.

use std::cell::RefCell;

use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

pub mod communications;
pub mod jobs;
pub mod site_visits;
pub mod templates;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient message for the user, e.g. a toast.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

impl From<&ServiceError> for Notification {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::Form(form_error) => {
                Notification::error(form_error.title(), form_error.description())
            }
            ServiceError::NotFound => {
                Notification::error("Not found", "The selected item no longer exists")
            }
            ServiceError::TypeConstraint(_) | ServiceError::Internal(_) => {
                Notification::error("Something went wrong", "Please try again")
            }
        }
    }
}

/// Receives notifications produced by handlers.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Notifier that keeps every notification in order until drained.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything received so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.entries.take()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}

/// Notifies about `result` and hands it back.
///
/// `success` returns `None` when the call did not change anything.
pub(crate) fn report<T, N, F>(
    notifier: &N,
    result: ServiceResult<T>,
    success: F,
) -> ServiceResult<T>
where
    N: Notifier + ?Sized,
    F: FnOnce(&T) -> Option<Notification>,
{
    match &result {
        Ok(value) => {
            if let Some(notification) = success(value) {
                log::info!("{}: {}", notification.title, notification.description);
                notifier.notify(notification);
            }
        }
        Err(err) => {
            log::error!("Action failed: {err}");
            notifier.notify(Notification::from(err));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;
    use crate::forms::FormError;

    struct CapturingLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn form_errors_carry_their_wording() {
        let notification = Notification::from(&ServiceError::Form(FormError::MissingRecipient));

        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.title, "Missing recipient");
        assert_eq!(notification.description, "Please select a recipient");
    }

    #[test]
    fn log_drains_in_order() {
        let log = NotificationLog::new();
        log.notify(Notification::success("One", "first"));
        log.notify(Notification::error("Two", "second"));

        let drained = log.drain();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "One");
        assert_eq!(drained[1].title, "Two");
        assert!(log.entries().is_empty());
    }

    #[test]
    fn silent_success_pushes_nothing() {
        let log = NotificationLog::new();

        let result: ServiceResult<u8> = report(&log, Ok(1), |_| None);

        assert_eq!(result, Ok(1));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn failures_are_logged_as_errors() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
        let log = NotificationLog::new();

        let result: ServiceResult<u8> =
            report(&log, Err(ServiceError::Internal("disk on fire".into())), |_| None);

        assert!(result.is_err());
        let records = LOGGER.records.lock().unwrap();
        assert!(
            records
                .iter()
                .any(|(level, message)| *level == Level::Error && message.contains("disk on fire"))
        );
    }
}
