//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Job postings.
    ///
    /// `created_at` is stored as the RFC 3339 text stamped at creation so a
    /// malformed legacy value survives reads and simply counts as expired.
    jobs (id) {
        /// Insertion-order tiebreaker; never exposed.
        seq -> Int8,
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Job title.
        title -> Text,
        /// Job description.
        description -> Text,
        /// Job location.
        location -> Text,
        /// Advertised salary.
        salary -> Float8,
        /// Duties as a JSON array of strings.
        duties -> Text,
        /// External link; empty when not supplied.
        url -> Text,
        /// Creation time, RFC 3339.
        created_at -> Text,
    }
}
