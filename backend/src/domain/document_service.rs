//! Document lifecycle service.
//!
//! Implements [`DocumentCommand`] and [`DocumentQuery`] over the document and
//! user repositories. The same rule outcomes feed both single-item and batch
//! creation; only the combinator differs ([`first_of`] versus [`all_of`]).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateDocumentRequest, DocumentCommand, DocumentQuery, DocumentRepository,
    DocumentRepositoryError, UpdateDocumentRequest, UserRepository, UserRepositoryError,
};
use crate::domain::validation::{DOCUMENT, TEXT, TITLE, rules};
use crate::domain::{
    Document, DocumentId, Error, UserId, ValidationError, ValidationErrors, all_of, first_of,
};

/// Service implementing the document driving ports.
pub struct DocumentLifecycleService<D: ?Sized, U: ?Sized> {
    documents: Arc<D>,
    users: Arc<U>,
}

impl<D: ?Sized, U: ?Sized> Clone for DocumentLifecycleService<D, U> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            users: Arc::clone(&self.users),
        }
    }
}

impl<D: ?Sized, U: ?Sized> DocumentLifecycleService<D, U> {
    /// Create a new service over the given repositories.
    pub fn new(documents: Arc<D>, users: Arc<U>) -> Self {
        Self { documents, users }
    }
}

impl<D, U> DocumentLifecycleService<D, U>
where
    D: DocumentRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    fn map_document_error(error: DocumentRepositoryError) -> Error {
        match error {
            DocumentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("document repository unavailable: {message}"))
            }
            DocumentRepositoryError::Query { message } => {
                Error::internal(format!("document repository error: {message}"))
            }
            // The store caught a title race the pre-write check missed.
            DocumentRepositoryError::DuplicateTitle { title } => {
                ValidationErrors::from(ValidationError::duplicate_title(DOCUMENT, &title)).into()
            }
        }
    }

    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserRepositoryError::DuplicateEmail { email } => {
                Error::internal(format!("unexpected user write during lookup: {email}"))
            }
        }
    }

    fn rejected(operation: &'static str, errors: ValidationErrors) -> Error {
        warn!(
            operation,
            failures = errors.len(),
            first = %errors.first(),
            "document request rejected"
        );
        errors.into()
    }

    /// Presence rules for a creation request: title, text, then owner.
    fn presence_outcomes(request: &CreateDocumentRequest) -> [Option<ValidationError>; 3] {
        [
            rules::field_present(TITLE, request.title.as_deref()),
            rules::field_present(TEXT, request.text.as_deref()),
            rules::owner_required(request.owner_id.as_ref()),
        ]
    }

    /// OwnerExists for a supplied owner; an absent owner is not looked up.
    async fn owner_outcome(
        &self,
        owner_id: Option<&UserId>,
    ) -> Result<Option<ValidationError>, Error> {
        let Some(owner_id) = owner_id else {
            return Ok(None);
        };
        let owner = self
            .users
            .find_by_id(owner_id)
            .await
            .map_err(Self::map_user_error)?;
        Ok(rules::owner_exists(owner_id, owner.as_ref()))
    }

    /// TitleUnique against storage for a supplied title.
    async fn title_outcome(&self, title: Option<&str>) -> Result<Option<ValidationError>, Error> {
        let Some(title) = title else {
            return Ok(None);
        };
        let holder = self
            .documents
            .find_by_title(title)
            .await
            .map_err(Self::map_document_error)?;
        Ok(rules::title_unique(title, holder.as_ref(), None))
    }

    /// Every creation rule for one request, in rule order.
    async fn creation_outcomes(
        &self,
        request: &CreateDocumentRequest,
    ) -> Result<Vec<ValidationError>, Error> {
        let mut outcomes = Vec::from(Self::presence_outcomes(request));
        outcomes.push(self.owner_outcome(request.owner_id.as_ref()).await?);
        outcomes.push(self.title_outcome(request.title.as_deref()).await?);
        outcomes.push(rules::initial_status_open(request.status));

        let failures: Vec<_> = outcomes.into_iter().flatten().collect();
        debug!(
            title = request.title.as_deref().unwrap_or_default(),
            failures = failures.len(),
            "evaluated creation rules"
        );
        Ok(failures)
    }

    /// Build the document for a request that passed validation.
    fn new_document(request: CreateDocumentRequest) -> Result<Document, Error> {
        let CreateDocumentRequest {
            title: Some(title),
            text: Some(text),
            owner_id: Some(owner_id),
            status,
        } = request
        else {
            return Err(Error::internal("validated request lost a required field"));
        };
        Ok(Document::new(
            DocumentId::random(),
            title,
            text,
            status.unwrap_or_default(),
            owner_id,
        ))
    }

    /// Per-request failures tagged with their index, followed by sibling
    /// title clashes, ordered by index.
    async fn batch_failures(
        &self,
        requests: &[CreateDocumentRequest],
    ) -> Result<Vec<ValidationError>, Error> {
        let mut failures = Vec::new();
        for (index, request) in requests.iter().enumerate() {
            let outcomes = self.creation_outcomes(request).await?;
            failures.extend(outcomes.into_iter().map(|e| e.with_index(index)));
        }

        let siblings = rules::titles_distinct_in_batch(requests.iter().map(|r| r.title.as_deref()));
        for clash in siblings {
            // A title already taken in storage is reported once per request.
            let already_reported = failures
                .iter()
                .any(|f| f.index() == clash.index() && f.code() == clash.code());
            if !already_reported {
                failures.push(clash);
            }
        }
        failures.sort_by_key(ValidationError::index);
        Ok(failures)
    }
}

#[async_trait]
impl<D, U> DocumentCommand for DocumentLifecycleService<D, U>
where
    D: DocumentRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn create_document(&self, request: CreateDocumentRequest) -> Result<Document, Error> {
        let reject = |errors: ValidationErrors| Self::rejected("create_document", errors);
        // Each stage reaches the stores only once every earlier rule holds.
        first_of(Self::presence_outcomes(&request)).map_err(reject)?;
        first_of([self.owner_outcome(request.owner_id.as_ref()).await?]).map_err(reject)?;
        first_of([
            self.title_outcome(request.title.as_deref()).await?,
            rules::initial_status_open(request.status),
        ])
        .map_err(reject)?;

        let document = Self::new_document(request)?;
        let saved = self
            .documents
            .save(&document)
            .await
            .map_err(Self::map_document_error)?;
        info!(document_id = %saved.id(), title = %saved.title(), "document created");
        Ok(saved)
    }

    async fn create_documents(
        &self,
        requests: Vec<CreateDocumentRequest>,
    ) -> Result<Vec<Document>, Error> {
        let failures = self.batch_failures(&requests).await?;
        all_of(failures.into_iter().map(Some))
            .map_err(|errors| Self::rejected("create_documents", errors))?;

        let documents = requests
            .into_iter()
            .map(Self::new_document)
            .collect::<Result<Vec<_>, _>>()?;
        let saved = self
            .documents
            .save_all(&documents)
            .await
            .map_err(Self::map_document_error)?;
        info!(count = saved.len(), "document batch created");
        Ok(saved)
    }

    async fn update_document(
        &self,
        id: DocumentId,
        request: UpdateDocumentRequest,
    ) -> Result<Document, Error> {
        let found = self
            .documents
            .find_by_id(&id)
            .await
            .map_err(Self::map_document_error)?;
        let existing = rules::document_exists(&id, found)
            .map_err(|missing| Self::rejected("update_document", missing.into()))?;

        let changes = request.changes();
        let title_unique = match changes.changed_title(&existing) {
            Some(title) => {
                let holder = self
                    .documents
                    .find_by_title(title)
                    .await
                    .map_err(Self::map_document_error)?;
                rules::title_unique(title, holder.as_ref(), Some(&id))
            }
            None => None,
        };
        all_of([
            rules::not_approved(&existing),
            rules::owner_unchanged(&existing, request.owner_id.as_ref()),
            title_unique,
        ])
        .map_err(|errors| Self::rejected("update_document", errors))?;

        let updated = existing.apply(changes);
        let saved = self
            .documents
            .save(&updated)
            .await
            .map_err(Self::map_document_error)?;
        info!(document_id = %saved.id(), status = %saved.status(), "document updated");
        Ok(saved)
    }
}

#[async_trait]
impl<D, U> DocumentQuery for DocumentLifecycleService<D, U>
where
    D: DocumentRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn list_documents(&self) -> Result<Vec<Document>, Error> {
        self.documents
            .find_all()
            .await
            .map_err(Self::map_document_error)
    }
}

#[cfg(test)]
#[path = "document_service_tests.rs"]
mod tests;
