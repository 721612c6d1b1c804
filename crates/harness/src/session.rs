use field_builder_engine::{BuilderConfig, FieldBuilder, Submitter};
use field_builder_storage::{KeyValueStore, SqliteStore};
use tempfile::TempDir;

use crate::RecordingSubmitter;

pub type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A builder over an on-disk SQLite store in a temp dir, so a session can be
/// closed and reopened the way a page reload would.
pub struct TestSession<T: Submitter = RecordingSubmitter> {
    pub dir: TempDir,
    pub builder: FieldBuilder<SqliteStore, T>,
}

impl TestSession<RecordingSubmitter> {
    pub fn new() -> TestResult<Self> {
        Self::with_submitter(BuilderConfig::default(), RecordingSubmitter::new())
    }
}

impl<T: Submitter> TestSession<T> {
    pub fn with_submitter(config: BuilderConfig, submitter: T) -> TestResult<Self> {
        let dir = tempfile::tempdir()?;
        let store = SqliteStore::open(&db_path(&dir)?)?;
        let builder = FieldBuilder::open(config, store, submitter)?;
        Ok(Self { dir, builder })
    }

    /// Drop the builder and its connection, then open a fresh one over the
    /// same database. The submitter carries over.
    pub fn reopen(self) -> TestResult<Self> {
        let Self { dir, builder } = self;
        let config = builder.config().clone();
        let (store, submitter) = builder.into_parts();
        drop(store);
        Self::reopen_parts(dir, config, submitter)
    }

    /// Raw JSON currently stored under the configured key.
    pub fn stored_json(&self) -> TestResult<Option<String>> {
        let key = &self.builder.config().storage_key;
        Ok(self.builder.store().get(key)?)
    }

    /// Write raw JSON under the configured key, bypassing the builder, and
    /// reopen over it.
    pub fn write_raw(self, json: &str) -> TestResult<Self> {
        let Self { dir, builder } = self;
        let config = builder.config().clone();
        let (mut store, submitter) = builder.into_parts();
        store.set(&config.storage_key, json)?;
        drop(store);
        Self::reopen_parts(dir, config, submitter)
    }

    fn reopen_parts(dir: TempDir, config: BuilderConfig, submitter: T) -> TestResult<Self> {
        let store = SqliteStore::open(&db_path(&dir)?)?;
        let builder = FieldBuilder::open(config, store, submitter)?;
        Ok(Self { dir, builder })
    }
}

fn db_path(dir: &TempDir) -> TestResult<String> {
    let path = dir.path().join("field-builder.db");
    let path = path.to_str().ok_or("temp dir path is not UTF-8")?;
    Ok(path.to_string())
}
