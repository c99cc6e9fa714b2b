use serde::Serialize;
use utoipa::ToSchema;

/// Multipart body for the image upload endpoint.
#[derive(ToSchema)]
pub struct ImageUploadForm {
    /// Image references already on the draft, repeated once per entry.
    pub existing: Vec<String>,
    /// Files to embed. Anything that is not `image/*` is skipped.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<Vec<u8>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageUploadResponse {
    pub images: Vec<String>,
    pub added: usize,
}
