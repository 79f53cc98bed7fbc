//! Image upload rules shared by avatar and thumbnail uploads.

use std::sync::Arc;

use bytes::Bytes;
use url::Url;

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::storage::ObjectStorage,
};

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

const MAX_EXTENSION_LEN: usize = 8;

impl UploadedFile {
    /// Extension for the stored object. The client's file name is only
    /// trusted when the text after its last dot is short ASCII alphanumerics;
    /// otherwise the content subtype is used (`image/svg+xml` gives `svg`).
    pub fn extension(&self) -> String {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| is_safe_extension(ext))
            .map_or_else(|| self.content_type_extension(), str::to_string)
    }

    fn content_type_extension(&self) -> String {
        let subtype = self.content_type.split_once('/').map_or("", |(_, sub)| sub);
        let ext: String = subtype
            .chars()
            .take_while(char::is_ascii_alphanumeric)
            .take(MAX_EXTENSION_LEN)
            .collect();
        if ext.is_empty() { "bin".to_string() } else { ext }
    }
}

fn is_safe_extension(ext: &str) -> bool {
    !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy)]
pub struct ImagePolicy {
    pub max_bytes: usize,
    pub limit_label: &'static str,
}

pub const AVATAR_POLICY: ImagePolicy = ImagePolicy {
    max_bytes: 2 * 1024 * 1024,
    limit_label: "2MB",
};

pub const THUMBNAIL_POLICY: ImagePolicy = ImagePolicy {
    max_bytes: 10 * 1024 * 1024,
    limit_label: "10MB",
};

impl ImagePolicy {
    pub fn check(&self, file: Option<UploadedFile>) -> ApplicationResult<UploadedFile> {
        let file = file.ok_or_else(|| ApplicationError::validation("No file provided"))?;
        if !file.content_type.starts_with("image/") {
            return Err(ApplicationError::validation("File must be an image"));
        }
        if file.data.len() > self.max_bytes {
            return Err(ApplicationError::validation(format!(
                "File size must be less than {}",
                self.limit_label
            )));
        }
        Ok(file)
    }
}

/// Object path inside the bucket for a public URL previously handed out:
/// the last three path segments (`<folder>/<user>/<file>`).
pub fn object_path_from_public_url(public_url: &str) -> Option<String> {
    let url = Url::parse(public_url).ok()?;
    let segments: Vec<&str> = url.path_segments()?.collect();
    if segments.len() < 3 || segments.iter().rev().take(3).any(|s| s.is_empty()) {
        return None;
    }
    Some(segments[segments.len() - 3..].join("/"))
}

/// Best-effort removal of the object behind `previous_url`. Failures are
/// logged and never abort the upload that replaces it.
pub async fn discard_previous(
    storage: &Arc<dyn ObjectStorage>,
    bucket: &str,
    previous_url: Option<&str>,
) {
    let Some(path) = previous_url.and_then(object_path_from_public_url) else {
        return;
    };

    if let Err(err) = storage.remove(bucket, &[path.clone()]).await {
        tracing::warn!(error = %err, bucket, path, "failed to remove previous upload");
    }
}
