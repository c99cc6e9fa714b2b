use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Url,
    File,
}

/// A file picked for upload, before it has been turned into an image reference.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Encodes `bytes` as an inline `data:` URL.
pub fn to_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Ordered image references for one product draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageCollection {
    images: Vec<String>,
    mode: InputMode,
    pending_url: String,
}

impl ImageCollection {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn into_images(self) -> Vec<String> {
        self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn pending_url(&self) -> &str {
        &self.pending_url
    }

    pub fn set_pending_url(&mut self, text: impl Into<String>) {
        self.pending_url = text.into();
    }

    /// Acknowledge key on the URL input. Only acts while in URL mode.
    pub fn commit_key(&mut self) -> bool {
        if self.mode != InputMode::Url {
            return false;
        }
        let text = std::mem::take(&mut self.pending_url);
        let added = self.add_from_url(&text);
        if !added {
            self.pending_url = text;
        }
        added
    }

    pub fn add_from_url(&mut self, text: &str) -> bool {
        let url = text.trim();
        if !self.push_unique(url) {
            return false;
        }
        self.pending_url.clear();
        true
    }

    /// Decodes the image files concurrently and appends each one as soon as
    /// its decode finishes. Returns how many entries were appended.
    pub async fn add_from_files(&mut self, files: Vec<ImageFile>) -> usize {
        let mut decodes = JoinSet::new();
        for file in files {
            if !file.is_image() {
                tracing::debug!(file = %file.name, media_type = %file.media_type, "skipping non-image file");
                continue;
            }
            decodes.spawn_blocking(move || to_data_url(&file.media_type, &file.bytes));
        }

        let mut added = 0;
        while let Some(joined) = decodes.join_next().await {
            match joined {
                Ok(data_url) => {
                    if self.push_unique(&data_url) {
                        added += 1;
                    }
                }
                Err(err) => tracing::warn!(error = %err, "image decode failed"),
            }
        }
        added
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    fn push_unique(&mut self, reference: &str) -> bool {
        if reference.is_empty() || self.images.iter().any(|existing| existing == reference) {
            return false;
        }
        self.images.push(reference.to_string());
        true
    }
}
