//! Event type definitions for the purchase screen.
//!
//! Host messages come from the embedding shell and only ever touch the
//! identity cell. User actions come from the rendering front end and drive
//! the selection and purchase flow.

pub use coinshop_sdk::objects::HostMessage;

/// Something the user did on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Tap on a package card.
    Select { package_id: String },
    /// Tap on the recharge button.
    Submit,
    /// Acknowledge the dialog.
    DismissFeedback,
}

impl std::fmt::Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::Select { package_id } => write!(f, "select:{package_id}"),
            UserAction::Submit => write!(f, "submit"),
            UserAction::DismissFeedback => write!(f, "dismiss"),
        }
    }
}
