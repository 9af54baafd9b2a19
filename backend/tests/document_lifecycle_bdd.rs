//! Behaviour tests for the document lifecycle rules against in-memory stores.
//!
//! Each test walks one scenario through `given`/`when`/`then` steps that
//! share a [`LifecycleWorld`].

use std::sync::{Arc, Mutex};

use drafts::domain::ports::{
    CreateDocumentRequest, DocumentCommand, DocumentQuery, DocumentRepository,
    UpdateDocumentRequest,
};
use drafts::domain::{
    Document, DocumentId, DocumentLifecycleService, DocumentStatus, Error, ErrorCode, User,
    UserId,
};
use drafts::outbound::memory::{InMemoryDocumentRepository, InMemoryUserRepository};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use tokio::runtime::Runtime;

type Service = DocumentLifecycleService<InMemoryDocumentRepository, InMemoryUserRepository>;

struct LifecycleWorld {
    runtime: Runtime,
    documents: Arc<InMemoryDocumentRepository>,
    service: Service,
    owner: UserId,
    target: Option<Document>,
    before: Vec<Document>,
    outcome: Option<Result<Vec<Document>, Error>>,
    listings: Vec<Vec<Document>>,
}

type SharedWorld = Arc<Mutex<LifecycleWorld>>;

fn owner() -> User {
    User::from_parts(
        UserId::random(),
        "u1@example.com".to_owned(),
        "u1".to_owned(),
        "Una".to_owned(),
        "One".to_owned(),
        None,
    )
}

#[fixture]
fn world() -> SharedWorld {
    let user = owner();
    let documents = Arc::new(InMemoryDocumentRepository::default());
    let users = Arc::new(InMemoryUserRepository::with_users([user.clone()]));
    Arc::new(Mutex::new(LifecycleWorld {
        runtime: Runtime::new().expect("tokio runtime"),
        documents: Arc::clone(&documents),
        service: DocumentLifecycleService::new(documents, users),
        owner: *user.id(),
        target: None,
        before: Vec::new(),
        outcome: None,
        listings: Vec::new(),
    }))
}

fn request(title: &str, owner_id: Option<UserId>) -> CreateDocumentRequest {
    CreateDocumentRequest {
        title: Some(title.to_owned()),
        text: Some("body".to_owned()),
        owner_id,
        status: None,
    }
}

fn stored(world: &LifecycleWorld) -> Vec<Document> {
    world
        .runtime
        .block_on(world.service.list_documents())
        .expect("list documents")
}

fn validation_codes(error: &Error) -> Vec<String> {
    error
        .details()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|detail| detail.get("code").and_then(|code| code.as_str()))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[given("an empty document store")]
fn an_empty_document_store(world: SharedWorld) {
    let ctx = world.lock().expect("world lock");
    assert!(stored(&ctx).is_empty());
}

#[given("a stored document titled {title} in status {status}")]
fn a_stored_document(world: SharedWorld, title: String, status: DocumentStatus) {
    let mut ctx = world.lock().expect("world lock");
    let document = Document::new(DocumentId::random(), title, "original", status, ctx.owner);
    ctx.runtime
        .block_on(ctx.documents.save(&document))
        .expect("seed document");
    let before = stored(&ctx);
    ctx.target = Some(document);
    ctx.before = before;
}

#[when("the owner creates a document titled {title}")]
fn the_owner_creates(world: SharedWorld, title: String) {
    let mut ctx = world.lock().expect("world lock");
    let req = request(&title, Some(ctx.owner));
    let result = ctx.runtime.block_on(ctx.service.create_document(req));
    ctx.outcome = Some(result.map(|doc| vec![doc]));
}

#[when("an unknown owner creates a document titled {title}")]
fn an_unknown_owner_creates(world: SharedWorld, title: String) {
    let mut ctx = world.lock().expect("world lock");
    let req = request(&title, Some(UserId::random()));
    let result = ctx.runtime.block_on(ctx.service.create_document(req));
    ctx.outcome = Some(result.map(|doc| vec![doc]));
}

#[when("the owner creates a batch of two documents titled {title}")]
fn the_owner_creates_duplicate_batch(world: SharedWorld, title: String) {
    let mut ctx = world.lock().expect("world lock");
    let batch = vec![request(&title, Some(ctx.owner)), request(&title, Some(ctx.owner))];
    let result = ctx.runtime.block_on(ctx.service.create_documents(batch));
    ctx.outcome = Some(result);
}

#[when("the stored document is updated with {field} set to {value}")]
fn the_stored_document_is_updated(world: SharedWorld, field: String, value: String) {
    let mut ctx = world.lock().expect("world lock");
    let id = *ctx.target.as_ref().expect("target document").id();
    let mut changes = UpdateDocumentRequest::default();
    match field.as_str() {
        "title" => changes.title = Some(value),
        "text" => changes.text = Some(value),
        other => panic!("unsupported field {other}"),
    }
    let result = ctx.runtime.block_on(ctx.service.update_document(id, changes));
    ctx.outcome = Some(result.map(|doc| vec![doc]));
}

#[when("the stored document is reassigned to another owner")]
fn the_stored_document_is_reassigned(world: SharedWorld) {
    let mut ctx = world.lock().expect("world lock");
    let id = *ctx.target.as_ref().expect("target document").id();
    let changes = UpdateDocumentRequest {
        owner_id: Some(UserId::random()),
        ..UpdateDocumentRequest::default()
    };
    let result = ctx.runtime.block_on(ctx.service.update_document(id, changes));
    ctx.outcome = Some(result.map(|doc| vec![doc]));
}

#[when("the documents are listed twice")]
fn the_documents_are_listed_twice(world: SharedWorld) {
    let mut ctx = world.lock().expect("world lock");
    let first = stored(&ctx);
    let second = stored(&ctx);
    ctx.listings = vec![first, second];
}

#[then("the operation succeeds with status {status}")]
fn the_operation_succeeds(world: SharedWorld, status: DocumentStatus) {
    let ctx = world.lock().expect("world lock");
    let documents = match ctx.outcome.as_ref().expect("operation ran") {
        Ok(documents) => documents,
        Err(error) => panic!("unexpected failure: {error:?}"),
    };
    assert!(documents.iter().all(|doc| doc.status() == status));
}

#[then("the operation fails with {code} reported {count} times")]
fn the_operation_fails(world: SharedWorld, code: String, count: usize) {
    let ctx = world.lock().expect("world lock");
    let error = match ctx.outcome.as_ref().expect("operation ran") {
        Ok(documents) => panic!("unexpected success: {documents:?}"),
        Err(error) => error,
    };
    let codes = validation_codes(error);
    assert_eq!(codes.len(), count, "details: {codes:?}");
    assert!(codes.iter().all(|reported| *reported == code), "details: {codes:?}");
}

#[then("the store holds {count} documents")]
fn the_store_holds(world: SharedWorld, count: usize) {
    let ctx = world.lock().expect("world lock");
    assert_eq!(stored(&ctx).len(), count);
}

#[then("the store is unchanged")]
fn the_store_is_unchanged(world: SharedWorld) {
    let ctx = world.lock().expect("world lock");
    assert_eq!(stored(&ctx), ctx.before);
}

#[then("both listings are identical")]
fn both_listings_are_identical(world: SharedWorld) {
    let ctx = world.lock().expect("world lock");
    let [first, second] = ctx.listings.as_slice() else {
        panic!("expected two listings, got {}", ctx.listings.len());
    };
    assert_eq!(first, second);
    assert_eq!(first, &ctx.before);
}

#[then("the stored document keeps its owner")]
fn the_stored_document_keeps_its_owner(world: SharedWorld) {
    let ctx = world.lock().expect("world lock");
    let id = ctx.target.as_ref().expect("target document").id();
    let current = stored(&ctx)
        .into_iter()
        .find(|doc| doc.id() == id)
        .expect("target still stored");
    assert_eq!(*current.owner_id(), ctx.owner);
}

#[then("the stored document is titled {title}")]
fn the_stored_document_is_titled(world: SharedWorld, title: String) {
    let ctx = world.lock().expect("world lock");
    let id = ctx.target.as_ref().expect("target document").id();
    let current = stored(&ctx)
        .into_iter()
        .find(|doc| doc.id() == id)
        .expect("target still stored");
    assert_eq!(current.title(), title);
}

#[rstest]
fn create_defaults_to_draft(world: SharedWorld) {
    an_empty_document_store(world.clone());
    the_owner_creates(world.clone(), "Spec v1".to_owned());
    the_operation_succeeds(world.clone(), DocumentStatus::Draft);
    the_store_holds(world, 1);
}

#[rstest]
fn create_rejects_taken_title(world: SharedWorld) {
    a_stored_document(world.clone(), "Spec v1".to_owned(), DocumentStatus::Draft);
    the_owner_creates(world.clone(), "Spec v1".to_owned());
    the_operation_fails(world.clone(), "DUPLICATE_TITLE".to_owned(), 1);
    the_store_is_unchanged(world);
}

#[rstest]
fn create_rejects_unknown_owner(world: SharedWorld) {
    an_empty_document_store(world.clone());
    an_unknown_owner_creates(world.clone(), "Spec v1".to_owned());
    the_operation_fails(world.clone(), "NOT_FOUND".to_owned(), 1);
    the_store_holds(world, 0);
}

#[rstest]
fn approved_documents_are_frozen(world: SharedWorld) {
    a_stored_document(world.clone(), "Spec v1".to_owned(), DocumentStatus::Approved);
    the_stored_document_is_updated(world.clone(), "text".to_owned(), "edited".to_owned());
    the_operation_fails(world.clone(), "INVALID_STATE".to_owned(), 1);
    the_store_is_unchanged(world);
}

#[rstest]
fn batch_with_sibling_titles_persists_nothing(world: SharedWorld) {
    an_empty_document_store(world.clone());
    the_owner_creates_duplicate_batch(world.clone(), "A".to_owned());
    the_operation_fails(world.clone(), "DUPLICATE_TITLE".to_owned(), 2);
    the_store_holds(world, 0);
}

#[rstest]
#[case(DocumentStatus::Draft)]
#[case(DocumentStatus::Revision)]
fn open_documents_keep_their_owner(world: SharedWorld, #[case] status: DocumentStatus) {
    a_stored_document(world.clone(), "Spec v1".to_owned(), status);
    the_stored_document_is_reassigned(world.clone());
    the_operation_fails(world.clone(), "INVALID_STATE".to_owned(), 1);
    the_store_is_unchanged(world.clone());
    the_stored_document_keeps_its_owner(world);
}

#[rstest]
fn listing_without_writes_is_stable(world: SharedWorld) {
    a_stored_document(world.clone(), "Spec v1".to_owned(), DocumentStatus::Draft);
    a_stored_document(world.clone(), "Spec v2".to_owned(), DocumentStatus::Approved);
    the_documents_are_listed_twice(world.clone());
    both_listings_are_identical(world);
}

#[rstest]
fn draft_can_be_renamed(world: SharedWorld) {
    a_stored_document(world.clone(), "Spec v1".to_owned(), DocumentStatus::Draft);
    the_stored_document_is_updated(world.clone(), "title".to_owned(), "Spec v2".to_owned());
    the_operation_succeeds(world.clone(), DocumentStatus::Draft);
    the_stored_document_is_titled(world, "Spec v2".to_owned());
}

#[rstest]
fn failed_batches_report_an_error_code(world: SharedWorld) {
    a_stored_document(world.clone(), "A".to_owned(), DocumentStatus::Draft);
    the_owner_creates_duplicate_batch(world.clone(), "A".to_owned());
    let ctx = world.lock().expect("world lock");
    let error = ctx
        .outcome
        .as_ref()
        .expect("operation ran")
        .as_ref()
        .expect_err("batch rejected");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "2 validation errors");
}
