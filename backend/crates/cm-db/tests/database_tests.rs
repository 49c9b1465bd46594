use cm_db::{CertificateRepository, Database};

use googletest::prelude::*;
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn given_missing_parent_directory_when_connect_then_creates_database_file() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("certs.db");

    // When
    let result = Database::connect(&path).await;

    // Then
    assert_that!(result, ok(anything()));
    assert!(path.exists());
}

#[tokio::test]
async fn given_connected_database_when_queried_then_migrations_applied() {
    let temp = TempDir::new().unwrap();
    let pool = Database::connect(&temp.path().join("certs.db")).await.unwrap();

    let found = CertificateRepository::find_by_user(&pool, Uuid::new_v4()).await;

    assert_that!(found, ok(len(eq(0))));
}
