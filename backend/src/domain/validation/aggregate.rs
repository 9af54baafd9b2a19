//! Combinators over rule outcomes.

use super::{ValidationError, ValidationErrors};

/// Stop at the first failing outcome.
///
/// The iterator is consumed lazily, so outcomes after the first failure are
/// never evaluated.
///
/// # Examples
/// ```
/// use drafts::domain::{ValidationError, first_of};
///
/// let outcomes = [None, Some(ValidationError::missing_field("Document", "ownerId"))];
/// let err = first_of(outcomes).expect_err("second rule fails");
/// assert_eq!(err.len(), 1);
/// ```
pub fn first_of<I>(outcomes: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = Option<ValidationError>>,
{
    match outcomes.into_iter().flatten().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Collect every failing outcome, in order.
pub fn all_of<I>(outcomes: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = Option<ValidationError>>,
{
    let failures: Vec<_> = outcomes.into_iter().flatten().collect();
    ValidationErrors::from_vec(failures).map_or(Ok(()), Err)
}
