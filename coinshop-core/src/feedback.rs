//! Dialog feedback shown after every outcome-producing action.
//!
//! There is exactly one [`FeedbackSlot`] per screen. Showing new feedback
//! overwrites whatever is there, acknowledged or not; only an explicit
//! dismissal clears it.

use std::fmt;

/// Warning shown when the user tries to buy without choosing a package.
pub const NO_SELECTION_MESSAGE: &str =
    "Please select a coin package to proceed with the purchase.";
/// Shown after a completed purchase.
pub const PURCHASE_SUCCEEDED_MESSAGE: &str =
    "Your coin purchase was successful! The coins have been added to your account.";
/// Shown when the service answers with a success status that is not 200.
pub const PURCHASE_NOT_PROCESSED_MESSAGE: &str =
    "We couldn't process your payment at this time. Please try again.";
/// Fallback for failed purchases that carry no server message.
pub const PURCHASE_FAILED_MESSAGE: &str =
    "Something went wrong while processing your payment. Please try again later.";
/// Shown when the catalog could not be fetched.
pub const CATALOG_LOAD_FAILED_MESSAGE: &str =
    "We couldn't load the coin packages. Please refresh the page to try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Title used when none is given explicitly.
    pub fn default_title(self) -> &'static str {
        match self {
            Severity::Success => "Success!",
            Severity::Error => "Oops!",
            Severity::Warning => "Attention",
            Severity::Info => "Information",
        }
    }

    /// Label of the button that dismisses the dialog.
    pub fn acknowledge_label(self) -> &'static str {
        match self {
            Severity::Success => "Close",
            _ => "OK",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}

/// A single dialog's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Feedback {
    /// Feedback with the default title for `severity`.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: severity.default_title().to_string(),
            message: message.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

/// The screen's one dialog slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `feedback`, replacing anything currently shown.
    pub fn show(&mut self, feedback: Feedback) {
        self.current = Some(feedback);
    }

    /// Dismiss the dialog. Returns what was shown, if anything.
    pub fn dismiss(&mut self) -> Option<Feedback> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
