//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{documents, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub code: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DocumentRow {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub status: String,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = documents)]
pub(crate) struct NewDocumentRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub text: &'a str,
    pub status: &'a str,
    pub owner_id: Uuid,
}

/// Mutable columns written by an upsert. The owner is fixed at creation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = documents)]
pub(crate) struct DocumentChangeset<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub status: &'a str,
}
