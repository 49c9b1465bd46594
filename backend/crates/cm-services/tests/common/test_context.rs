use cm_db::Database;
use cm_services::{DataAccess, DataAccessSettings, LocalObjectStorage, ManualClock};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use tempfile::TempDir;

pub const TEST_TTL: Duration = Duration::from_secs(30);
pub const TEST_PUBLIC_BASE_URL: &str = "http://objects.test/objects";

/// Services over an in-memory database, a temporary object directory and a manual clock.
pub struct TestContext {
    pub data: DataAccess,
    pub pool: SqlitePool,
    pub clock: Arc<ManualClock>,
    pub storage: Arc<LocalObjectStorage>,
    // Held so the directory outlives the test
    pub storage_dir: TempDir,
}

impl TestContext {
    /// Moves the clock past the cache TTL so the next read goes to the store.
    pub fn expire_cache(&self) {
        self.clock.advance(TEST_TTL);
    }
}

pub async fn create_test_context() -> TestContext {
    let pool = Database::in_memory()
        .await
        .expect("Failed to create in-memory database");
    let storage_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Arc::new(LocalObjectStorage::new(
        storage_dir.path().join("objects"),
        TEST_PUBLIC_BASE_URL,
    ));
    let clock = Arc::new(ManualClock::new());

    let settings = DataAccessSettings {
        cache_ttl: TEST_TTL,
        request_timeout: Duration::from_secs(5),
    };
    let data = DataAccess::with_clock(pool.clone(), settings, storage.clone(), clock.clone());

    TestContext {
        data,
        pool,
        clock,
        storage,
        storage_dir,
    }
}
