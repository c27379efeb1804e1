//! Database module: models, schema and queries for the AST check store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for provisioning the owned table
//! - `store.rs`: connection pool and queries (Postgres or SQLite via `sqlx::Any`)

pub mod models;
pub mod schema;
pub mod store;

pub use models::{AstCheck, DwellingRecord, UpsertKind};
pub use schema::AST_CHECK_INIT;
pub use store::{Database, DbPool};
