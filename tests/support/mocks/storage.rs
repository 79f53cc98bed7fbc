// tests/support/mocks/storage.rs
use std::sync::Mutex;

use async_trait::async_trait;
use builders_api::application::{ApplicationResult, ports::storage::ObjectStorage};
use bytes::Bytes;

pub const STORAGE_BASE: &str = "https://project.example.test/storage/v1/object/public";

/// アップロードされたオブジェクトの記録
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub content_type: String,
    pub size: usize,
}

/// 書き込みと削除を記録するだけのストレージ
#[derive(Default)]
pub struct CapturingStorage {
    pub uploads: Mutex<Vec<StoredObject>>,
    pub removals: Mutex<Vec<(String, Vec<String>)>>,
}

impl CapturingStorage {
    pub fn uploaded(&self) -> Vec<StoredObject> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<(String, Vec<String>)> {
        self.removals.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for CapturingStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        data: Bytes,
    ) -> ApplicationResult<()> {
        self.uploads.lock().unwrap().push(StoredObject {
            bucket: bucket.into(),
            path: path.into(),
            content_type: content_type.into(),
            size: data.len(),
        });
        Ok(())
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> ApplicationResult<()> {
        self.removals
            .lock()
            .unwrap()
            .push((bucket.into(), paths.to_vec()));
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{STORAGE_BASE}/{bucket}/{path}")
    }
}
