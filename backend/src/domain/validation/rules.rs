//! The document rule set.
//!
//! Lookups are resolved by the caller; a rule sees what the store returned
//! and decides from that alone.

use std::collections::HashMap;

use crate::domain::{Document, DocumentId, DocumentStatus, User, UserId};

use super::{DOCUMENT, USER, ValidationError};

/// A required text field of a creation request must be supplied.
pub fn field_present(field: &str, value: Option<&str>) -> Option<ValidationError> {
    value
        .is_none()
        .then(|| ValidationError::missing_field(DOCUMENT, field))
}

/// Creation needs an owner reference.
pub fn owner_required(owner_id: Option<&UserId>) -> Option<ValidationError> {
    owner_id
        .is_none()
        .then(|| ValidationError::missing_field(DOCUMENT, "ownerId"))
}

/// The referenced owner must be a stored user.
pub fn owner_exists(owner_id: &UserId, found: Option<&User>) -> Option<ValidationError> {
    found
        .is_none()
        .then(|| ValidationError::not_found(USER, "id", owner_id))
}

/// The target of an update must be a stored document.
///
/// Unlike the other rules this yields the document on success: no further
/// update rule can be evaluated without it.
pub fn document_exists(
    id: &DocumentId,
    found: Option<Document>,
) -> Result<Document, ValidationError> {
    found.ok_or_else(|| ValidationError::not_found(DOCUMENT, "id", id))
}

/// No other document may already hold `title`.
///
/// `holder` is the stored document with that exact title, if any; `excluding`
/// names the document being updated, which may keep its own title.
///
/// # Examples
/// ```
/// use drafts::domain::validation::rules::title_unique;
///
/// assert!(title_unique("Spec v1", None, None).is_none());
/// ```
pub fn title_unique(
    title: &str,
    holder: Option<&Document>,
    excluding: Option<&DocumentId>,
) -> Option<ValidationError> {
    let taken = holder.is_some_and(|doc| Some(doc.id()) != excluding);
    taken.then(|| ValidationError::duplicate_title(DOCUMENT, title))
}

/// Approved documents are frozen.
pub fn not_approved(existing: &Document) -> Option<ValidationError> {
    existing
        .status()
        .is_terminal()
        .then(|| ValidationError::approved(DOCUMENT))
}

/// An update may restate the owner but never change it.
pub fn owner_unchanged(existing: &Document, requested: Option<&UserId>) -> Option<ValidationError> {
    requested
        .filter(|owner| *owner != existing.owner_id())
        .map(|owner| ValidationError::owner_changed(DOCUMENT, owner))
}

/// Documents start open; `None` means the default `DRAFT`.
pub fn initial_status_open(status: Option<DocumentStatus>) -> Option<ValidationError> {
    status
        .is_some_and(DocumentStatus::is_terminal)
        .then(|| ValidationError::approved_at_creation(DOCUMENT))
}

/// Every title shared by two or more requests in one batch yields a
/// `DUPLICATE_TITLE` detail for each request carrying it, tagged with the
/// request's index. Requests without a title take part in no clash.
pub fn titles_distinct_in_batch<'a, I>(titles: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let titles: Vec<Option<&str>> = titles.into_iter().collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for title in titles.iter().copied().flatten() {
        *counts.entry(title).or_default() += 1;
    }

    let mut details = Vec::new();
    for (index, title) in titles.into_iter().enumerate() {
        let Some(title) = title else { continue };
        if counts.get(title).copied().unwrap_or_default() > 1 {
            details.push(ValidationError::duplicate_title(DOCUMENT, title).with_index(index));
        }
    }
    details
}
