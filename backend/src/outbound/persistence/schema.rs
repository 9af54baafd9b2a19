//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Document owners. `email` carries a unique index.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        code -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        phone_number -> Nullable<Varchar>,
        created_at -> Timestamptz,
        /// Insertion order tie-breaker for rows sharing a timestamp.
        seq -> Int8,
    }
}

diesel::table! {
    /// Documents. `title` is unique and `status` is constrained to the three
    /// lifecycle values.
    documents (id) {
        id -> Uuid,
        title -> Varchar,
        text -> Text,
        status -> Varchar,
        owner_id -> Uuid,
        created_at -> Timestamptz,
        /// Maintained by the `documents_touch_updated_at` trigger.
        updated_at -> Timestamptz,
        seq -> Int8,
    }
}

diesel::joinable!(documents -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(documents, users);
