//! Confirmation overlay shown after a successful mutation.
//!
//! There is no timer: once open, the modal stays open until dismissed. A
//! second success while it is open only replaces the title.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open { title: String },
}

impl Modal {
    pub fn open(&mut self, title: impl Into<String>) {
        *self = Modal::Open {
            title: title.into(),
        };
    }

    /// Close the modal. Closing a closed modal is a no-op.
    pub fn dismiss(&mut self) {
        *self = Modal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Modal::Open { title } => Some(title),
            Modal::Closed => None,
        }
    }
}
