//! Lifecycle transitions applied to stored documents.
//!
//! Validation decides whether an update is legal; this module only describes
//! what a legal update does. The owner is not part of [`DocumentChanges`], so
//! applying changes can never reassign it.

use super::{Document, DocumentStatus};

/// Field changes requested for an existing document. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentChanges {
    pub title: Option<String>,
    pub text: Option<String>,
    pub status: Option<DocumentStatus>,
}

impl DocumentChanges {
    /// Title that differs from the document's current one, if requested.
    pub fn changed_title<'a>(&'a self, current: &Document) -> Option<&'a str> {
        self.title
            .as_deref()
            .filter(|title| *title != current.title())
    }

    /// Status the document ends in once the changes apply.
    pub fn next_status(&self, current: DocumentStatus) -> DocumentStatus {
        self.status.unwrap_or(current)
    }
}

impl Document {
    /// Apply `changes`, returning the updated document.
    ///
    /// # Examples
    /// ```
    /// use drafts::domain::{Document, DocumentChanges, DocumentId, DocumentStatus, UserId};
    ///
    /// let owner = UserId::random();
    /// let doc = Document::new(DocumentId::random(), "Spec v1", "a", DocumentStatus::Draft, owner);
    /// let updated = doc.apply(DocumentChanges {
    ///     title: Some("Spec v2".into()),
    ///     ..DocumentChanges::default()
    /// });
    /// assert_eq!(updated.title(), "Spec v2");
    /// assert_eq!(updated.status(), DocumentStatus::Draft);
    /// assert_eq!(updated.owner_id(), &owner);
    /// ```
    #[must_use]
    pub fn apply(mut self, changes: DocumentChanges) -> Self {
        let next = changes.next_status(self.status());
        if let Some(title) = changes.title {
            self.set_title(title);
        }
        if let Some(text) = changes.text {
            self.set_text(text);
        }
        self.set_status(next);
        self
    }
}
