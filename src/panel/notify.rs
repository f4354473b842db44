//! Status notifications shown by the panel

use std::fmt;

use log::{error, info};

/// Visual category of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// One status message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.kind {
            StatusKind::Success => "✓ ",
            StatusKind::Error => "⚠ ",
            StatusKind::Info => "",
        };
        write!(f, "{mark}{}", self.text)
    }
}

/// Sink for status messages, implemented by the panel UI
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, status: Status);
}

/// Notifier writing status messages to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, status: Status) {
        match status.kind {
            StatusKind::Error => error!("{status}"),
            StatusKind::Success | StatusKind::Info => info!("{status}"),
        }
    }
}
