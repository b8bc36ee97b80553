//! Internal Diesel row structs for the `jobs` table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::jobs;

/// Row struct for reading from the jobs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: f64,
    pub duties: String,
    pub url: String,
    pub created_at: String,
}

/// Insertable struct for new job records. `seq` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub(crate) struct NewJobRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub salary: f64,
    pub duties: &'a str,
    pub url: &'a str,
    pub created_at: &'a str,
}

/// Changeset replacing every mutable column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = jobs)]
pub(crate) struct JobUpdate<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub salary: f64,
    pub duties: &'a str,
    pub url: &'a str,
}
