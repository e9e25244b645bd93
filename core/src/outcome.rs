//! What an operation on the view amounted to.
//!
//! # Design
//! Hosts receive these values instead of having the view pop dialogs. A
//! `Notice` is the part a person must be told about before continuing; the
//! rest of the outcome is for the host's own bookkeeping and for tests.

use crate::locale::{Locale, Message};
use crate::types::{Record, RecordId};

/// Blocking, user-facing message raised by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FillAllFields,
    LoadFailed,
    CreateFailed,
    DeleteFailed,
}

impl Notice {
    pub fn text(self, locale: Locale) -> &'static str {
        let message = match self {
            Notice::FillAllFields => Message::FillAllFields,
            Notice::LoadFailed => Message::LoadFailed,
            Notice::CreateFailed => Message::CreateFailed,
            Notice::DeleteFailed => Message::DeleteFailed,
        };
        locale.text(message)
    }
}

/// Why a submit never left the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// At least one field is the empty string.
    MissingFields,
    /// The email does not have the `local@domain.tld` shape. Reported inline
    /// next to the email input, not as a notice.
    InvalidEmail,
}

impl Rejection {
    pub fn notice(self) -> Option<Notice> {
        match self {
            Rejection::MissingFields => Some(Notice::FillAllFields),
            Rejection::InvalidEmail => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded { count: usize },
    Created(Record),
    Deleted(RecordId),
    Rejected(Rejection),
    Failed(Notice),
    /// The view was torn down before the response arrived; nothing changed.
    Discarded,
}

impl Outcome {
    /// The notice a host should show, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Outcome::Failed(notice) => Some(*notice),
            Outcome::Rejected(rejection) => rejection.notice(),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Loaded { .. } | Outcome::Created(_) | Outcome::Deleted(_)
        )
    }
}
