/// Icon shown on the modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
    Error,
}

/// Button set offered by the modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSet {
    Ok,
    YesNo,
}

/// A modal notification for the host UI to display. Titles, messages and
/// button sets are fixed; the rendering layer shows them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: &'static str,
    message: String,
    severity: Severity,
    buttons: ButtonSet,
}

impl Notification {
    pub fn information(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Information,
            buttons: ButtonSet::Ok,
        }
    }

    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Warning,
            buttons: ButtonSet::Ok,
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Error,
            buttons: ButtonSet::Ok,
        }
    }

    /// Yes/No confirmation dialog.
    pub fn confirmation(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Warning,
            buttons: ButtonSet::YesNo,
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn severity(&self) -> Severity {
        self.severity
    }
    pub fn buttons(&self) -> ButtonSet {
        self.buttons
    }
}
