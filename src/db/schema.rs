//! SQL DDL for the AST check table.
//! Written in the dialect shared by Postgres and SQLite.

/// Owned table plus the unique index that backs the atomic upsert.
/// Both statements are idempotent; running them on every start is a no-op
/// once the table exists. A pre-existing table without the index gains it
/// here, provided it holds no duplicate keys.
pub const AST_CHECK_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS SHMASTCheck (
    Dwelling_ID TEXT NOT NULL,
    Academic_Year TEXT NOT NULL,
    Checked_By TEXT NOT NULL,
    Comment TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS ux_shmastcheck_key
    ON SHMASTCheck (Dwelling_ID, Academic_Year);
"#;
