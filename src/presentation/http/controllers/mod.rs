// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod comments;
pub mod notifications;
pub mod profiles;
pub mod projects;

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::Deserialize;

use crate::application::commands::UploadedFile;
use crate::presentation::http::error::HttpResult;

/// Record id as clients send it: JSON number or numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            Self::Int(id) => id.to_string(),
            Self::Text(id) => id,
        }
    }
}

fn raw_id(id: Option<RawId>) -> Option<String> {
    id.map(RawId::into_string)
}

/// Files and text fields of a multipart form, keyed by field name.
#[derive(Debug, Default)]
pub struct MultipartForm {
    files: HashMap<String, UploadedFile>,
    fields: HashMap<String, String>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().unwrap_or_default().to_string();
                    let data = field.bytes().await?;
                    // Browsers submit an empty part for an untouched file input.
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            data,
                        },
                    );
                }
                None => {
                    form.fields.insert(name, field.text().await?);
                }
            }
        }

        Ok(form)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}
