#![allow(dead_code)]

use ast_checker::config::{BasicConfig, Config, DatabaseConfig, FormConfig, Secrets};
use ast_checker::db::Database;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

pub const PASSWORD: &str = "correct horse";

/// Temporary SQLite database with the owned table provisioned and an empty
/// dwelling directory. Removed on drop.
pub struct TestDb {
    pub db: Database,
    path: PathBuf,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub async fn temp_database(tag: &str) -> TestDb {
    let db = bare_database(tag).await;
    sqlx::query(
        "CREATE TABLE SHMDwellingInfo (
            Dwelling_ID TEXT,
            flat_number TEXT,
            property_address TEXT,
            city TEXT
        )",
    )
    .execute(db.db.pool())
    .await
    .expect("failed to create directory table");
    db
}

/// Like `temp_database` but without the directory table.
pub async fn bare_database(tag: &str) -> TestDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "ast-checker-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let url = format!("sqlite:{}?mode=rwc", path.display());
    let db = Database::connect(&url, 4)
        .await
        .expect("failed to open sqlite database");
    db.migrate().await.expect("failed to provision schema");
    TestDb { db, path }
}

pub async fn add_dwelling(db: &Database, id: &str, flat: &str, address: &str, city: &str) {
    sqlx::query(
        "INSERT INTO SHMDwellingInfo (Dwelling_ID, flat_number, property_address, city)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(flat)
    .bind(address)
    .bind(city)
    .execute(db.pool())
    .await
    .expect("failed to insert dwelling");
}

pub fn test_config() -> Config {
    Config {
        basic: BasicConfig {
            insecure_cookie: true,
            ..BasicConfig::default()
        },
        secrets: Secrets {
            password: PASSWORD.to_string(),
            db_username: "tester".to_string(),
            db_password: "unused".to_string(),
        },
        database: DatabaseConfig::default(),
        form: FormConfig::default(),
    }
}
